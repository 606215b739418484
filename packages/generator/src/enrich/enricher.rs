//! Level enricher trait definition.

use crate::error::Result;
use crate::index::SubMunicipalityIndex;
use crate::types::{EnrichedRecord, RawRecord};

/// Dataset-wide lookups available to every enricher.
///
/// Built once before enrichment starts and only read afterwards.
#[derive(Debug, Clone, Copy)]
pub struct EnrichContext<'a> {
    pub sub_municipalities: &'a SubMunicipalityIndex,
}

impl<'a> EnrichContext<'a> {
    #[must_use]
    pub fn new(sub_municipalities: &'a SubMunicipalityIndex) -> Self {
        Self { sub_municipalities }
    }
}

/// Trait for level enrichers.
///
/// An enricher turns a raw record of its level into that level's enriched
/// schema. The dispatcher guarantees the record's level tag matches.
pub trait LevelEnricher: Send + Sync {
    /// Enrich a single record.
    ///
    /// # Errors
    /// Fails with `InvalidCodeLength` when the record's code is malformed.
    fn enrich(&self, record: RawRecord, context: &EnrichContext<'_>) -> Result<EnrichedRecord>;
}
