//! Urban/rural classification of barangays.

use serde::Serialize;

/// Urban/rural label from the 2020 census.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UrbanRural {
    Rural,
    Urban,
}

impl UrbanRural {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rural => "Rural",
            Self::Urban => "Urban",
        }
    }
}

/// Map the single-letter census marker to a label.
///
/// Only an exact `R` or `U` is classified; anything else, including an
/// absent marker, yields `None`.
///
/// # Examples
/// ```
/// use psgc_generator::classify::{classify_urban_rural, UrbanRural};
///
/// assert_eq!(classify_urban_rural(Some("R")), Some(UrbanRural::Rural));
/// assert_eq!(classify_urban_rural(Some("X")), None);
/// ```
#[must_use]
pub fn classify_urban_rural(marker: Option<&str>) -> Option<UrbanRural> {
    match marker? {
        "R" => Some(UrbanRural::Rural),
        "U" => Some(UrbanRural::Urban),
        _ => None,
    }
}
