//! Core data types for the generator.
//!
//! `RawRecord` is one row of the flat PSGC table. Each geographic level has
//! its own enriched schema so that the fields a level keeps, drops or adds
//! are visible in one place.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

use crate::classify::UrbanRural;
use crate::config::UNAVAILABLE_CORRESPONDENCE_CODE;

/// Administrative levels, coarsest to finest.
///
/// Tags are parsed case-insensitively from either the abbreviations used in
/// the publication datafile or the full level names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Level {
    #[strum(serialize = "Reg", serialize = "Region")]
    Region,

    #[strum(serialize = "Prov", serialize = "Province")]
    Province,

    #[strum(serialize = "City")]
    City,

    #[strum(serialize = "Mun", serialize = "Municipality")]
    Municipality,

    #[strum(serialize = "SubMun", serialize = "SubMunicipality")]
    SubMunicipality,

    #[strum(serialize = "Brgy", serialize = "Bgy", serialize = "Barangay")]
    Barangay,
}

impl Level {
    /// Full level name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Region => "Region",
            Self::Province => "Province",
            Self::City => "City",
            Self::Municipality => "Municipality",
            Self::SubMunicipality => "SubMunicipality",
            Self::Barangay => "Barangay",
        }
    }

    /// Name of the output artifact for this level: the collection file stem
    /// for regions, the per-entity directory for everything else.
    #[must_use]
    pub fn output_name(&self) -> &'static str {
        match self {
            Self::Region => "regions",
            Self::Province => "provinces",
            Self::City => "cities",
            Self::Municipality => "municipalities",
            Self::SubMunicipality => "submunicipalities",
            Self::Barangay => "barangays",
        }
    }

    /// Parse a geographic level tag, returning `None` for unknown tags.
    ///
    /// # Examples
    /// ```
    /// use psgc_generator::types::Level;
    ///
    /// assert_eq!(Level::from_tag("SubMun"), Some(Level::SubMunicipality));
    /// assert_eq!(Level::from_tag("Bgy"), Some(Level::Barangay));
    /// assert_eq!(Level::from_tag("Dist"), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.trim().parse().ok()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn unavailable_code() -> String {
    UNAVAILABLE_CORRESPONDENCE_CODE.to_string()
}

/// One row of the flat PSGC table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Ten-digit PSGC code; the only source of hierarchical position.
    #[serde(rename = "psgc10DigitCode")]
    pub psgc_code: String,

    pub name: String,

    /// Correspondence code from the older nine-digit scheme.
    #[serde(default = "unavailable_code")]
    pub code: String,

    /// Level tag as it appears in the source.
    pub geographic_level: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_class: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_classification: Option<String>,

    /// Single-letter urban/rural marker (`U` or `R`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urban_rural: Option<String>,

    #[serde(rename = "population2020", default)]
    pub population: u64,

    /// Free-text status marker such as `Capital` or `Pob.`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl RawRecord {
    /// Create a record with only the required fields set.
    #[must_use]
    pub fn new(
        psgc_code: impl Into<String>,
        name: impl Into<String>,
        geographic_level: impl Into<String>,
    ) -> Self {
        Self {
            psgc_code: psgc_code.into(),
            name: name.into(),
            code: unavailable_code(),
            geographic_level: geographic_level.into(),
            old_name: None,
            city_class: None,
            income_classification: None,
            urban_rural: None,
            population: 0,
            status: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_urban_rural(mut self, marker: impl Into<String>) -> Self {
        self.urban_rural = Some(marker.into());
        self
    }

    #[must_use]
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    /// Parsed level tag, `None` when the tag is not recognized.
    #[must_use]
    pub fn level(&self) -> Option<Level> {
        Level::from_tag(&self.geographic_level)
    }

    /// Split into the fields every level keeps and the inputs that are only
    /// consumed by level-specific logic.
    #[must_use]
    pub fn into_parts(self) -> (RecordFields, LevelInputs) {
        let fields = RecordFields {
            psgc_code: self.psgc_code,
            name: self.name,
            code: self.code,
            geographic_level: self.geographic_level,
            old_name: self.old_name,
            city_class: self.city_class,
            income_classification: self.income_classification,
            population: self.population,
        };
        let inputs = LevelInputs {
            status: self.status,
            urban_rural: self.urban_rural,
        };
        (fields, inputs)
    }
}

/// Fields carried unchanged by every enriched record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFields {
    #[serde(rename = "psgc10DigitCode")]
    pub psgc_code: String,

    pub name: String,

    pub code: String,

    pub geographic_level: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_classification: Option<String>,

    #[serde(rename = "population2020")]
    pub population: u64,
}

/// Raw inputs that never reach the output as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelInputs {
    pub status: Option<String>,
    pub urban_rural: Option<String>,
}

impl LevelInputs {
    /// Whether the status marker equals `marker` exactly.
    #[must_use]
    pub fn has_status(&self, marker: &str) -> bool {
        self.status.as_deref() == Some(marker)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRecord {
    #[serde(flatten)]
    pub fields: RecordFields,

    /// Descriptive region name, e.g. "Ilocos Region" for "Region I".
    pub region_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceRecord {
    #[serde(flatten)]
    pub fields: RecordFields,

    pub region_code: String,
}

/// Enriched city or municipality; both levels share a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityMunicipalityRecord {
    #[serde(flatten)]
    pub fields: RecordFields,

    pub region_code: String,

    pub province_code: String,

    pub is_capital: bool,
}

/// Enriched sub-municipality.
///
/// Sub-municipalities hang off their city rather than a province, so there
/// is no province code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubMunicipalityRecord {
    #[serde(flatten)]
    pub fields: RecordFields,

    pub region_code: String,

    /// The subdivided city.
    pub city_municipality_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarangayRecord {
    #[serde(flatten)]
    pub fields: RecordFields,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub urban_rural: Option<UrbanRural>,

    pub region_code: String,

    pub province_code: String,

    pub city_municipality_code: String,

    pub is_poblacion: bool,

    /// Present only when the containing city is subdivided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_municipality_code: Option<String>,
}

/// An enriched record of any level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnrichedRecord {
    Region(RegionRecord),
    Province(ProvinceRecord),
    CityMunicipality(CityMunicipalityRecord),
    SubMunicipality(SubMunicipalityRecord),
    Barangay(BarangayRecord),
}

impl EnrichedRecord {
    #[must_use]
    pub fn fields(&self) -> &RecordFields {
        match self {
            Self::Region(r) => &r.fields,
            Self::Province(r) => &r.fields,
            Self::CityMunicipality(r) => &r.fields,
            Self::SubMunicipality(r) => &r.fields,
            Self::Barangay(r) => &r.fields,
        }
    }

    /// The record's own ten-digit code.
    #[must_use]
    pub fn psgc_code(&self) -> &str {
        &self.fields().psgc_code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_level_from_tag_abbreviations() {
        assert_eq!(Level::from_tag("Reg"), Some(Level::Region));
        assert_eq!(Level::from_tag("Prov"), Some(Level::Province));
        assert_eq!(Level::from_tag("City"), Some(Level::City));
        assert_eq!(Level::from_tag("Mun"), Some(Level::Municipality));
        assert_eq!(Level::from_tag("SubMun"), Some(Level::SubMunicipality));
        assert_eq!(Level::from_tag("Brgy"), Some(Level::Barangay));
        assert_eq!(Level::from_tag("Bgy"), Some(Level::Barangay));
    }

    #[test]
    fn test_level_from_tag_full_names() {
        for level in Level::iter() {
            assert_eq!(Level::from_tag(level.as_str()), Some(level));
            assert_eq!(Level::from_tag(&level.as_str().to_uppercase()), Some(level));
        }
    }

    #[test]
    fn test_level_from_tag_unknown() {
        assert_eq!(Level::from_tag(""), None);
        assert_eq!(Level::from_tag("Dist"), None);
        assert_eq!(Level::from_tag("Sub Mun"), None);
    }

    #[test]
    fn test_level_ordering_is_coarsest_first() {
        let levels: Vec<Level> = Level::iter().collect();
        let mut sorted = levels.clone();
        sorted.sort();
        assert_eq!(levels, sorted);
        assert_eq!(levels.first(), Some(&Level::Region));
        assert_eq!(levels.last(), Some(&Level::Barangay));
    }

    #[test]
    fn test_raw_record_deserialize_defaults() {
        let json = r#"{
            "psgc10DigitCode": "0100000000",
            "name": "Ilocos Region (Region I)",
            "geographicLevel": "Reg"
        }"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.psgc_code, "0100000000");
        assert_eq!(record.code, "Unavailable");
        assert_eq!(record.population, 0);
        assert!(record.status.is_none());
        assert_eq!(record.level(), Some(Level::Region));
    }

    #[test]
    fn test_raw_record_round_trip_keys() {
        let record = RawRecord::new("0102805001", "Adams", "Bgy")
            .with_urban_rural("R")
            .with_population(1785);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["psgc10DigitCode"], "0102805001");
        assert_eq!(value["geographicLevel"], "Bgy");
        assert_eq!(value["urbanRural"], "R");
        assert_eq!(value["population2020"], 1785);
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_into_parts_separates_level_inputs() {
        let record = RawRecord::new("0102805001", "Adams", "Bgy")
            .with_status("Pob.")
            .with_urban_rural("U");
        let (fields, inputs) = record.into_parts();
        assert_eq!(fields.psgc_code, "0102805001");
        assert!(inputs.has_status("Pob."));
        assert!(!inputs.has_status("Capital"));
        assert_eq!(inputs.urban_rural.as_deref(), Some("U"));
    }

    #[test]
    fn test_sub_municipality_record_has_no_province_code() {
        let (fields, _) = RawRecord::new("1380601000", "Tondo I/II", "SubMun").into_parts();
        let record = EnrichedRecord::SubMunicipality(SubMunicipalityRecord {
            fields,
            region_code: "1300000000".to_string(),
            city_municipality_code: "1380600000".to_string(),
        });
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("provinceCode").is_none());
        assert_eq!(value["cityMunicipalityCode"], "1380600000");
        assert_eq!(record.psgc_code(), "1380601000");
    }
}
