//! Configuration constants and runtime settings for the generator.

use std::path::{Path, PathBuf};

/// Width of a PSGC code in characters.
pub const CODE_LENGTH: usize = 10;

/// Leading characters of a code that identify its region.
pub const REGION_PREFIX_LEN: usize = 2;

/// Leading characters of a code that identify its province.
///
/// Also used to point a sub-municipality (and its barangays) at the city
/// that was subdivided.
pub const PROVINCE_PREFIX_LEN: usize = 5;

/// Leading characters of a code that identify its city or municipality.
pub const CITY_MUNICIPALITY_PREFIX_LEN: usize = 7;

/// Leading characters of a code that identify its sub-municipality.
pub const SUB_MUNICIPALITY_PREFIX_LEN: usize = 7;

/// Status marker of a provincial capital.
pub const CAPITAL_STATUS: &str = "Capital";

/// Status marker of a poblacion barangay.
pub const POBLACION_STATUS: &str = "Pob.";

/// Suffix appended to the name of a poblacion barangay.
pub const POBLACION_SUFFIX: &str = " (Pob.)";

/// Placeholder stored when a record has no correspondence code.
pub const UNAVAILABLE_CORRESPONDENCE_CODE: &str = "Unavailable";

/// Default location of the flat record file.
pub const DEFAULT_INPUT_PATH: &str = "src/data/psgc-json/psgc.json";

/// Default base directory for the generated API files.
pub const DEFAULT_OUTPUT_DIR: &str = "public/api";

/// Zero-based index of the datafile sheet in the publication workbook.
pub const DEFAULT_SHEET_INDEX: usize = 3;

/// Runtime settings for a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Flat record file (`.json`, `.csv` or `.xlsx`).
    pub input: PathBuf,

    /// Sheet read when the input is a workbook.
    pub sheet: usize,

    /// Base directory for generated files.
    pub output_dir: PathBuf,

    /// Abort on unrecognized level tags instead of setting the record aside.
    pub strict_levels: bool,
}

impl GeneratorConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            sheet: DEFAULT_SHEET_INDEX,
            output_dir: output_dir.into(),
            strict_levels: false,
        }
    }

    /// Build from `PSGC_INPUT`, `PSGC_SHEET`, `PSGC_OUTPUT_DIR` and
    /// `PSGC_STRICT_LEVELS`, falling back to the defaults for anything unset
    /// or unparseable.
    pub fn from_env() -> Self {
        let input = std::env::var("PSGC_INPUT").unwrap_or_else(|_| DEFAULT_INPUT_PATH.into());
        let output_dir =
            std::env::var("PSGC_OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.into());
        let strict_levels = std::env::var("PSGC_STRICT_LEVELS")
            .ok()
            .is_some_and(|v| parse_flag(&v));
        let sheet = std::env::var("PSGC_SHEET")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_SHEET_INDEX);

        Self::new(input, output_dir)
            .with_sheet(sheet)
            .with_strict_levels(strict_levels)
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_sheet(mut self, sheet: usize) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_strict_levels(mut self, strict_levels: bool) -> Self {
        self.strict_levels = strict_levels;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
