//! Address label templates
//!
//! Templates used by [`super::EidRecord::place_full_with`]. The defaults are the
//! labels recommended for Serbian; they can be overridden from a config file
//! (via serde) or from environment variables.

use serde::{Deserialize, Serialize};
use log::debug;

use super::format::PLACEHOLDER;

/// Label templates for the entrance, floor and apartment parts of an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressLabels {
    pub entrance: String,
    pub floor: String,
    pub apartment: String,
}

impl Default for AddressLabels {
    fn default() -> Self {
        Self {
            entrance: "ulaz %s".to_string(),
            floor: "%s. sprat".to_string(),
            apartment: "br. %s".to_string(),
        }
    }
}

impl AddressLabels {
    const ENTRANCE_VAR: &'static str = "EID_ENTRANCE_FORMAT";
    const FLOOR_VAR: &'static str = "EID_FLOOR_FORMAT";
    const APARTMENT_VAR: &'static str = "EID_APARTMENT_FORMAT";

    /// Templates that render the raw values without decoration
    pub fn plain() -> Self {
        Self {
            entrance: PLACEHOLDER.to_string(),
            floor: PLACEHOLDER.to_string(),
            apartment: PLACEHOLDER.to_string(),
        }
    }

    /// Default labels with overrides taken from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut labels = Self::default();
        for (var, slot) in [
            (Self::ENTRANCE_VAR, &mut labels.entrance),
            (Self::FLOOR_VAR, &mut labels.floor),
            (Self::APARTMENT_VAR, &mut labels.apartment),
        ] {
            if let Some(value) = lookup(var) {
                debug!("Using {} = {:?}", var, value);
                *slot = value;
            }
        }
        labels
    }
}
