//! Routing of raw records to their level enricher.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::enricher::{EnrichContext, LevelEnricher};
use super::levels::{
    BarangayEnricher, CityMunicipalityEnricher, ProvinceEnricher, RegionEnricher,
    SubMunicipalityEnricher,
};
use crate::error::{GeneratorError, Result};
use crate::index::SubMunicipalityIndex;
use crate::types::{EnrichedRecord, Level, RawRecord};

/// Enriched records partitioned by level.
///
/// Every level has a grouping, possibly empty, holding records in input
/// order. Records with an unrecognized level tag are kept apart in
/// `unclassified` and never appear in a level grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedDataset {
    groups: BTreeMap<Level, Vec<EnrichedRecord>>,
    unclassified: Vec<RawRecord>,
}

impl EnrichedDataset {
    fn new() -> Self {
        Self {
            groups: Level::iter().map(|level| (level, Vec::new())).collect(),
            unclassified: Vec::new(),
        }
    }

    /// Enriched records of one level.
    #[must_use]
    pub fn records(&self, level: Level) -> &[EnrichedRecord] {
        self.groups.get(&level).map(Vec::as_slice).unwrap_or_default()
    }

    /// Records whose level tag was not recognized.
    #[must_use]
    pub fn unclassified(&self) -> &[RawRecord] {
        &self.unclassified
    }

    /// Groupings in level order, coarsest first.
    pub fn iter(&self) -> impl Iterator<Item = (Level, &[EnrichedRecord])> {
        self.groups.iter().map(|(level, records)| (*level, records.as_slice()))
    }

    /// Total number of enriched records across all levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the dataset, returning the level groupings.
    #[must_use]
    pub fn into_groups(self) -> BTreeMap<Level, Vec<EnrichedRecord>> {
        self.groups
    }
}

/// Routes each raw record to the enricher for its level.
pub struct LevelDispatcher<'a> {
    context: EnrichContext<'a>,
    strict_levels: bool,
}

impl<'a> LevelDispatcher<'a> {
    #[must_use]
    pub fn new(sub_municipalities: &'a SubMunicipalityIndex) -> Self {
        Self {
            context: EnrichContext::new(sub_municipalities),
            strict_levels: false,
        }
    }

    /// Fail with `UnrecognizedLevel` instead of setting unknown tags aside.
    #[must_use]
    pub fn with_strict_levels(mut self, strict_levels: bool) -> Self {
        self.strict_levels = strict_levels;
        self
    }

    /// The enricher responsible for a level.
    #[must_use]
    pub fn enricher_for(level: Level) -> &'static dyn LevelEnricher {
        match level {
            Level::Region => &RegionEnricher,
            Level::Province => &ProvinceEnricher,
            Level::City | Level::Municipality => &CityMunicipalityEnricher,
            Level::SubMunicipality => &SubMunicipalityEnricher,
            Level::Barangay => &BarangayEnricher,
        }
    }

    /// Enrich every record, stopping at the first error.
    pub fn dispatch(&self, records: Vec<RawRecord>) -> Result<EnrichedDataset> {
        let mut dataset = EnrichedDataset::new();

        for record in records {
            let Some(level) = record.level() else {
                if self.strict_levels {
                    return Err(GeneratorError::UnrecognizedLevel {
                        code: record.psgc_code,
                        level: record.geographic_level,
                    });
                }
                tracing::warn!(
                    code = %record.psgc_code,
                    level = %record.geographic_level,
                    "Unrecognized geographic level, record excluded from output"
                );
                dataset.unclassified.push(record);
                continue;
            };

            let enriched = Self::enricher_for(level).enrich(record, &self.context)?;
            dataset.groups.entry(level).or_default().push(enriched);
        }

        for (level, records) in dataset.iter() {
            tracing::debug!(level = %level, records = records.len(), "enriched level");
        }

        Ok(dataset)
    }
}

/// Enrich a full raw dataset, setting unrecognized levels aside.
///
/// # Errors
/// `InvalidCodeLength` if any record carries a malformed code; the whole
/// batch is abandoned.
///
/// # Examples
/// ```
/// use psgc_generator::enrich::enrich;
/// use psgc_generator::types::{Level, RawRecord};
///
/// let dataset = enrich(vec![
///     RawRecord::new("0102805000", "City of Laoag", "City").with_status("Capital"),
/// ])
/// .unwrap();
/// assert_eq!(dataset.records(Level::City).len(), 1);
/// ```
pub fn enrich(records: Vec<RawRecord>) -> Result<EnrichedDataset> {
    enrich_with(records, false)
}

/// Enrich a full raw dataset, optionally failing on unrecognized levels.
pub fn enrich_with(records: Vec<RawRecord>, strict_levels: bool) -> Result<EnrichedDataset> {
    let index = SubMunicipalityIndex::build(&records);
    LevelDispatcher::new(&index)
        .with_strict_levels(strict_levels)
        .dispatch(records)
}
