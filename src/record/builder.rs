//! Record builder
//!
//! Accumulates validated (field, value) pairs as the card decoder reports them.

use std::collections::BTreeMap;
use log::{debug, trace};

use super::{EidError, EidRecord, Result};
use crate::field::FieldId;

/// Builds an [`EidRecord`]
///
/// A builder is meant to be driven by a single decoding sequence and is
/// consumed by [`EidRecordBuilder::build`].
#[derive(Debug, Default)]
pub struct EidRecordBuilder {
    fields: BTreeMap<FieldId, String>,
}

impl EidRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value for a field
    ///
    /// Fails with [`EidError::InvalidValue`] if the value does not pass the
    /// field's validator (the ignored sentinel never does), and with
    /// [`EidError::DuplicateField`] if the field was already added. A failed
    /// call leaves the builder unchanged.
    pub fn add_value(&mut self, field: FieldId, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        // Log the field only, values are personal data
        if !field.validate(&value) {
            debug!("Rejected invalid value for {}", field);
            return Err(EidError::InvalidValue { field, value });
        }
        if self.fields.contains_key(&field) {
            debug!("Rejected duplicate value for {}", field);
            return Err(EidError::DuplicateField { field, value });
        }
        debug!("Accepted value for {}", field);
        self.fields.insert(field, value);
        Ok(self)
    }

    /// Add a value by its decoder tag code
    ///
    /// Fails with [`EidError::UnknownCode`] if the code does not identify a field.
    pub fn add_code(&mut self, code: u16, value: impl Into<String>) -> Result<&mut Self> {
        match FieldId::from_code(code) {
            Some(field) => self.add_value(field, value),
            None => {
                debug!("Rejected unknown tag code {}", code);
                Err(EidError::UnknownCode(code))
            }
        }
    }

    /// Number of fields added so far
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Finish the record
    pub fn build(self) -> EidRecord {
        trace!("Building eID record with {} fields", self.fields.len());
        EidRecord::new(self.fields)
    }
}
