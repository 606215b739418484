//! Per-level enrichment of raw PSGC records.
//!
//! Each geographic level has a [`LevelEnricher`]; the [`LevelDispatcher`]
//! routes records to them with an exhaustive match over [`Level`] and
//! collects the results per level.
//!
//! [`Level`]: crate::types::Level

mod dispatch;
mod enricher;
mod levels;

pub use dispatch::{enrich, enrich_with, EnrichedDataset, LevelDispatcher};
pub use enricher::{EnrichContext, LevelEnricher};
pub use levels::{
    BarangayEnricher, CityMunicipalityEnricher, ProvinceEnricher, RegionEnricher,
    SubMunicipalityEnricher,
};
