//! PSGC API generator - Enrich Philippine Standard Geographic Code records.
//!
//! This crate takes the flat PSGC table, where every administrative unit
//! carries a ten-digit hierarchical code, and produces per-level records
//! with explicit parent codes and level-specific fields.
//!
//! # Example
//!
//! ```
//! use psgc_generator::enrich::enrich;
//! use psgc_generator::types::{EnrichedRecord, Level, RawRecord};
//!
//! let dataset = enrich(vec![
//!     RawRecord::new("0102805000", "City of Laoag", "City").with_status("Capital"),
//! ])
//! .unwrap();
//!
//! let EnrichedRecord::CityMunicipality(city) = &dataset.records(Level::City)[0] else {
//!     unreachable!()
//! };
//! assert_eq!(city.region_code, "0100000000");
//! assert_eq!(city.province_code, "0102800000");
//! assert!(city.is_capital);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and runtime configuration
//! - [`error`]: Error types and Result alias
//! - [`types`]: Levels, raw records and per-level enriched schemas
//! - [`codes`]: Parent code derivation
//! - [`names`]: Region name parsing
//! - [`classify`]: Urban/rural classification
//! - [`index`]: Sub-municipality lookup
//! - [`enrich`]: Level enrichers and dispatcher
//! - [`source`]: JSON, CSV and workbook input
//! - [`output`]: JSON file output
//! - [`generator`]: Load, enrich and write in one run
//! - [`cli`]: Command-line interface

pub mod classify;
pub mod cli;
pub mod codes;
pub mod config;
pub mod enrich;
pub mod error;
pub mod generator;
pub mod index;
pub mod names;
pub mod output;
pub mod source;
pub mod types;

// Re-export main functions
pub use enrich::{enrich, EnrichedDataset};
pub use generator::{convert, generate, GenerateReport};

// Re-export commonly used items
pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use types::{EnrichedRecord, Level, RawRecord};
