//! eID field taxonomy
//!
//! Every datum the card decoder can report is identified by a [`FieldId`].
//! Each identifier carries the numeric tag used by the card decoder, a display
//! label for generic dumps, and a validation predicate.
//!
//! # Example
//! ```ignore
//! use serbian_eid::field::FieldId;
//!
//! let field = FieldId::from_code(201).unwrap();
//! assert_eq!(field, FieldId::PersonalNumber);
//! assert!(field.validate("0101990710006"));
//! ```

mod validate;

pub use validate::{always_valid, is_personal_number_format, never_valid, Validator};

use serde::{Deserialize, Serialize};
use std::fmt;

/// eID field identifiers
///
/// Codes are the tags reported by the card decoder and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u16)]
pub enum FieldId {
    /// Placeholder for ignored input, never stored in a record
    Ignored = 0,

    /// Registered document number
    DocRegNo = 101,
    /// The issuing date, e.g. 01.01.2011
    IssuingDate = 102,
    /// The date the document expires
    ExpiryDate = 103,
    /// The authority, e.g. "Ministry of the Interior"
    IssuingAuthority = 104,

    /// The person's unique identifier number (JMBG)
    ///
    /// The last digit is a mod 11 checksum, but documents with an incorrect
    /// checksum have been issued, so only the format is validated.
    PersonalNumber = 201,
    /// Last name, e.g. "Smith" for some John Smith
    Surname = 202,
    /// Given name, e.g. "John" for some John Smith
    GivenName = 203,
    /// The parent's given name used to disambiguate similarly named persons
    ParentGivenName = 204,
    Sex = 205,

    /// The place the person was born in, e.g. "Beograd"
    PlaceOfBirth = 301,
    /// The community/municipality the person was born in, e.g. "Savski Venac"
    CommunityOfBirth = 302,
    StateOfBirth = 303,
    StateOfBirthCode = 304,
    DateOfBirth = 305,

    /// State of residence, usually the three letter code "SRB"
    State = 401,
    /// Community/municipality of residence
    Community = 402,
    /// Place of residence
    Place = 403,
    Street = 404,
    HouseNumber = 405,
    HouseLetter = 406,
    Entrance = 407,
    Floor = 408,
    ApartmentNumber = 409,
}

impl FieldId {
    /// All storable fields in code order (the sentinel is not included)
    pub const ALL: [FieldId; 23] = [
        Self::DocRegNo,
        Self::IssuingDate,
        Self::ExpiryDate,
        Self::IssuingAuthority,
        Self::PersonalNumber,
        Self::Surname,
        Self::GivenName,
        Self::ParentGivenName,
        Self::Sex,
        Self::PlaceOfBirth,
        Self::CommunityOfBirth,
        Self::StateOfBirth,
        Self::StateOfBirthCode,
        Self::DateOfBirth,
        Self::State,
        Self::Community,
        Self::Place,
        Self::Street,
        Self::HouseNumber,
        Self::HouseLetter,
        Self::Entrance,
        Self::Floor,
        Self::ApartmentNumber,
    ];

    /// Resolve a decoder tag code
    ///
    /// Unknown codes resolve to `None`. The sentinel code 0 also resolves to
    /// `None` since it never identifies real card data.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.code() == code)
    }

    /// Numeric tag code used by the card decoder
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Display name used in generic dumps (not localized)
    pub fn label(self) -> &'static str {
        match self {
            Self::Ignored => "Ignored",
            Self::DocRegNo => "Document reg. number",
            Self::IssuingDate => "Issuing date",
            Self::ExpiryDate => "Expiry date",
            Self::IssuingAuthority => "Issuing authority",
            Self::PersonalNumber => "Personal number",
            Self::Surname => "Surname",
            Self::GivenName => "Given name",
            Self::ParentGivenName => "Parent given name",
            Self::Sex => "Gender",
            Self::PlaceOfBirth => "Place of birth",
            Self::CommunityOfBirth => "Community of birth",
            Self::StateOfBirth => "State of birth",
            Self::StateOfBirthCode => "State of birth code",
            Self::DateOfBirth => "Date of birth",
            Self::State => "State",
            Self::Community => "Community",
            Self::Place => "Place",
            Self::Street => "Street name",
            Self::HouseNumber => "House number",
            Self::HouseLetter => "House letter",
            Self::Entrance => "Entrance label",
            Self::Floor => "Floor number",
            Self::ApartmentNumber => "Appartment number",
        }
    }

    /// Validation predicate attached to this field
    pub fn validator(self) -> Validator {
        match self {
            Self::Ignored => never_valid,
            Self::PersonalNumber => is_personal_number_format,
            _ => always_valid,
        }
    }

    /// Check whether a raw value is acceptable for this field
    pub fn validate(self, value: &str) -> bool {
        (self.validator())(value)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
