//! eID record and its builder
//!
//! An [`EidRecord`] is the immutable set of decoded field values read from one
//! identity document. Records are assembled with an [`EidRecordBuilder`] that
//! validates each value as the card decoder reports it.
//!
//! # Example
//! ```ignore
//! use serbian_eid::{EidRecordBuilder, FieldId};
//!
//! let mut builder = EidRecordBuilder::new();
//! builder
//!     .add_value(FieldId::GivenName, "Petar")?
//!     .add_value(FieldId::Surname, "Petrović")?;
//! let record = builder.build();
//! assert_eq!(record.surname(), Some("Petrović"));
//! ```

mod builder;
mod format;
mod labels;

pub use builder::EidRecordBuilder;
pub use format::{PLACEHOLDER, SERBIA_CODE, SERBIA_DISPLAY};
pub use labels::AddressLabels;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::field::FieldId;

/// Errors that can occur while assembling a record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EidError {
    #[error("Value '{value}' not valid for tag '{field}'")]
    InvalidValue { field: FieldId, value: String },

    #[error("Tag '{field}' already set, rejected value '{value}'")]
    DuplicateField { field: FieldId, value: String },

    #[error("Unknown tag code: {0}")]
    UnknownCode(u16),
}

pub type Result<T> = std::result::Result<T, EidError>;

/// Decoded identity document data
///
/// Fields are kept in code order, which is also the order of the debug dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "BTreeMap<FieldId, String>")]
pub struct EidRecord {
    fields: BTreeMap<FieldId, String>,
}

impl EidRecord {
    pub(crate) fn new(fields: BTreeMap<FieldId, String>) -> Self {
        Self { fields }
    }

    /// Create a builder for a new record
    pub fn builder() -> EidRecordBuilder {
        EidRecordBuilder::new()
    }

    /// Get the raw value of a field, `None` if it was never set
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Check if a field is set to a non-empty value
    ///
    /// An empty value counts as absent: decoders store an empty string for
    /// fields that were transmitted without content.
    pub fn has(&self, field: FieldId) -> bool {
        self.get(field).is_some_and(|value| !value.is_empty())
    }

    /// Iterate over the present fields in code order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.fields
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (*field, value.as_str()))
    }

    /// Number of stored fields, including empty ones
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn doc_reg_no(&self) -> Option<&str> {
        self.get(FieldId::DocRegNo)
    }
    pub fn issuing_date(&self) -> Option<&str> {
        self.get(FieldId::IssuingDate)
    }
    pub fn expiry_date(&self) -> Option<&str> {
        self.get(FieldId::ExpiryDate)
    }
    pub fn issuing_authority(&self) -> Option<&str> {
        self.get(FieldId::IssuingAuthority)
    }
    pub fn personal_number(&self) -> Option<&str> {
        self.get(FieldId::PersonalNumber)
    }
    pub fn surname(&self) -> Option<&str> {
        self.get(FieldId::Surname)
    }
    pub fn given_name(&self) -> Option<&str> {
        self.get(FieldId::GivenName)
    }
    pub fn parent_given_name(&self) -> Option<&str> {
        self.get(FieldId::ParentGivenName)
    }
    pub fn sex(&self) -> Option<&str> {
        self.get(FieldId::Sex)
    }
    pub fn place_of_birth(&self) -> Option<&str> {
        self.get(FieldId::PlaceOfBirth)
    }
    pub fn community_of_birth(&self) -> Option<&str> {
        self.get(FieldId::CommunityOfBirth)
    }
    pub fn state_of_birth(&self) -> Option<&str> {
        self.get(FieldId::StateOfBirth)
    }
    pub fn state_of_birth_code(&self) -> Option<&str> {
        self.get(FieldId::StateOfBirthCode)
    }
    pub fn date_of_birth(&self) -> Option<&str> {
        self.get(FieldId::DateOfBirth)
    }
    pub fn state(&self) -> Option<&str> {
        self.get(FieldId::State)
    }
    pub fn community(&self) -> Option<&str> {
        self.get(FieldId::Community)
    }
    pub fn place(&self) -> Option<&str> {
        self.get(FieldId::Place)
    }
    pub fn street(&self) -> Option<&str> {
        self.get(FieldId::Street)
    }
    pub fn house_number(&self) -> Option<&str> {
        self.get(FieldId::HouseNumber)
    }
    pub fn house_letter(&self) -> Option<&str> {
        self.get(FieldId::HouseLetter)
    }
    pub fn entrance(&self) -> Option<&str> {
        self.get(FieldId::Entrance)
    }
    pub fn floor(&self) -> Option<&str> {
        self.get(FieldId::Floor)
    }
    pub fn apartment_number(&self) -> Option<&str> {
        self.get(FieldId::ApartmentNumber)
    }
}

/// Visits a serialized map entry by entry so the builder sees every key,
/// including repeated ones
struct EidRecordVisitor;

impl<'de> Visitor<'de> for EidRecordVisitor {
    type Value = EidRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of eID fields to values")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<EidRecord, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut builder = EidRecordBuilder::new();
        while let Some((field, value)) = map.next_entry::<FieldId, String>()? {
            builder.add_value(field, value).map_err(de::Error::custom)?;
        }
        Ok(builder.build())
    }
}

impl<'de> Deserialize<'de> for EidRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EidRecordVisitor)
    }
}

impl From<EidRecord> for BTreeMap<FieldId, String> {
    fn from(record: EidRecord) -> Self {
        record.fields
    }
}

/// Debug dump of the present fields, e.g. `Surname: PetrovićGiven name: Petar`
///
/// Meant for diagnostics only; there is no separator between entries.
impl fmt::Display for EidRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, value) in self.iter() {
            write!(f, "{}: {}", field, value)?;
        }
        Ok(())
    }
}
