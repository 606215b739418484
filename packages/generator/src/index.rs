//! Lookup of cities that have been subdivided into sub-municipalities.

use std::collections::HashSet;

use crate::codes::sub_municipality_prefix;
use crate::types::{Level, RawRecord};

/// Seven-character code prefixes of every sub-municipality in a dataset.
///
/// A barangay whose code shares one of these prefixes lies inside a
/// sub-municipality, which means its city has been subdivided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubMunicipalityIndex {
    prefixes: HashSet<String>,
}

impl SubMunicipalityIndex {
    /// Build the index from the full raw dataset.
    #[must_use]
    pub fn build(records: &[RawRecord]) -> Self {
        let prefixes: HashSet<String> = records
            .iter()
            .filter(|r| r.level() == Some(Level::SubMunicipality))
            .filter_map(|r| sub_municipality_prefix(&r.psgc_code))
            .map(str::to_string)
            .collect();

        tracing::debug!(sub_municipalities = prefixes.len(), "built sub-municipality index");

        Self { prefixes }
    }

    /// Whether the code shares its seven-character prefix with a
    /// sub-municipality.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        sub_municipality_prefix(code).is_some_and(|prefix| self.prefixes.contains(prefix))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
