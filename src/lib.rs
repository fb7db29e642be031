//! Serbian eID personal and residence data
//!
//! This crate holds the fields decoded from a Serbian electronic identity
//! document and renders them into human-readable strings. Talking to the card
//! and extracting field bytes is left to the caller, which reports decoded
//! (tag, value) pairs to an [`EidRecordBuilder`].
//!
//! The crate provides:
//! - A closed field taxonomy ([`FieldId`]) with wire codes, labels and validators
//! - A validating builder producing an immutable [`EidRecord`]
//! - Composite formatters for the full name, residence and place of birth
//!
//! # Example
//! ```ignore
//! use serbian_eid::{AddressLabels, EidRecordBuilder, FieldId};
//!
//! let mut builder = EidRecordBuilder::new();
//! builder
//!     .add_value(FieldId::Street, "Main street")?
//!     .add_value(FieldId::HouseNumber, "11")?
//!     .add_value(FieldId::ApartmentNumber, "4")?
//!     .add_value(FieldId::State, "SRB")?;
//! let record = builder.build();
//!
//! assert_eq!(
//!     record.place_full_with(&AddressLabels::default()),
//!     "Main street 11/4\nREPUBLIKA SRBIJA"
//! );
//! ```

pub mod field;
pub mod record;

pub use field::{FieldId, Validator};
pub use record::{AddressLabels, EidError, EidRecord, EidRecordBuilder, Result};
