//! Main generator service that ties all components together.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::enrich::enrich_with;
use crate::error::Result;
use crate::output::{save_dataset, WriteSummary};
use crate::source::{load_records_from_sheet, save_records};
use crate::types::Level;

/// Outcome of a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Records read from the input file.
    pub records_read: usize,

    /// Enriched records per level.
    pub enriched: BTreeMap<Level, usize>,

    /// Records set aside because of an unrecognized level tag.
    pub unclassified: usize,

    pub files: WriteSummary,
}

/// Load the flat records, enrich them and write the API files.
///
/// # Arguments
/// * `config` - Input path and sheet, output directory and level strictness
///
/// # Returns
/// Counts for every stage of the run
pub fn generate(config: &GeneratorConfig) -> Result<GenerateReport> {
    let records = load_records_from_sheet(config.input(), config.sheet)?;
    let records_read = records.len();

    let dataset = enrich_with(records, config.strict_levels)?;
    let enriched = dataset
        .iter()
        .map(|(level, records)| (level, records.len()))
        .collect();
    let unclassified = dataset.unclassified().len();
    if unclassified > 0 {
        tracing::warn!(unclassified, "records with unrecognized levels were not written");
    }

    let files = save_dataset(&dataset, config.output_dir())?;

    Ok(GenerateReport {
        records_read,
        enriched,
        unclassified,
        files,
    })
}

/// Convert the publication workbook, or a CSV export of its datafile sheet,
/// into the flat JSON records.
///
/// `sheet` selects the datafile sheet of a workbook input. Returns the number
/// of records written.
pub fn convert(input: &Path, output: &Path, sheet: usize) -> Result<usize> {
    let records = load_records_from_sheet(input, sheet)?;
    save_records(&records, output)?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SHEET_INDEX;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_generate_from_json() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("psgc.json");
        fs::write(
            &input,
            r#"[
                {"psgc10DigitCode": "0100000000", "name": "Ilocos Region (Region I)", "code": "010000000", "geographicLevel": "Reg", "population2020": 5301139},
                {"psgc10DigitCode": "0102800000", "name": "Ilocos Norte", "code": "012800000", "geographicLevel": "Prov", "population2020": 609588},
                {"psgc10DigitCode": "0102899000", "name": "Nowhere", "code": "012899000", "geographicLevel": "Dist", "population2020": 0}
            ]"#,
        )
        .unwrap();

        let output = temp_dir.path().join("api");
        let config = GeneratorConfig::new(&input, &output);
        let report = generate(&config).unwrap();

        assert_eq!(report.records_read, 3);
        assert_eq!(report.enriched.get(&Level::Region), Some(&1));
        assert_eq!(report.enriched.get(&Level::Province), Some(&1));
        assert_eq!(report.unclassified, 1);
        assert_eq!(report.files.total(), 2);
        assert!(output.join("regions.json").exists());
        assert!(output.join("provinces/0102800000.json").exists());
    }

    #[test]
    fn test_generate_strict_levels_fails() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("psgc.json");
        fs::write(
            &input,
            r#"[{"psgc10DigitCode": "0102899000", "name": "Nowhere", "geographicLevel": "Dist"}]"#,
        )
        .unwrap();

        let config = GeneratorConfig::new(&input, temp_dir.path().join("api"))
            .with_strict_levels(true);
        assert!(generate(&config).is_err());
        assert!(!temp_dir.path().join("api").exists());
    }

    #[test]
    fn test_convert_csv_to_json() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("datafile.csv");
        fs::write(
            &input,
            "10-digit PSGC,Name,Geographic Level\n0102801001,Adams,Bgy\n",
        )
        .unwrap();
        let output = temp_dir.path().join("psgc-json").join("psgc.json");

        assert_eq!(convert(&input, &output, DEFAULT_SHEET_INDEX).unwrap(), 1);
        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("\"geographicLevel\": \"Brgy\""));
    }

    #[test]
    fn test_generate_from_workbook() {
        let temp_dir = tempdir().unwrap();
        let input = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/datafile.xlsx");
        let output = temp_dir.path().join("api");

        let report = generate(&GeneratorConfig::new(&input, &output)).unwrap();
        assert_eq!(report.records_read, 4);
        assert_eq!(report.unclassified, 0);
        assert!(output.join("cities/0102805000.json").exists());
        assert!(output.join("barangays/0102805001.json").exists());
    }
}
