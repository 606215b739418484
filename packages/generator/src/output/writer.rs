//! JSON writer for the generated API files.
//!
//! Layout under the output base:
//!
//! ```text
//! regions.json                      all regions
//! provinces/<code>.json             [province]
//! cities/<code>.json                [city]
//! municipalities/<code>.json        [municipality]
//! submunicipalities/<code>.json     [sub-municipality]
//! barangays/<code>.json             [barangay]
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::enrich::EnrichedDataset;
use crate::error::{GeneratorError, Result};
use crate::types::{EnrichedRecord, Level};

/// Number of files written per level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub files: BTreeMap<Level, usize>,
}

impl WriteSummary {
    /// Files written for one level.
    #[must_use]
    pub fn files_for(&self, level: Level) -> usize {
        self.files.get(&level).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.files.values().sum()
    }
}

/// Serialize a value as pretty JSON with a 2-space indent and trailing newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    Ok(content)
}

/// Write a value as JSON, creating parent directories.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt existing files on crash.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(parent)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.json".to_string());
    let temp_file = parent.join(format!(".{file_name}.tmp"));

    let content = render_json(value)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;

    Ok(())
}

/// Path of the file holding a single entity.
///
/// The code becomes the file stem, so it must be a plain file name that
/// stays inside the level directory.
fn entity_path(output_base: &Path, level: Level, record: &EnrichedRecord) -> Result<PathBuf> {
    let code = record.psgc_code();
    let file_name = format!("{code}.json");
    let mut components = Path::new(&file_name).components();
    let is_plain = matches!(components.next(), Some(Component::Normal(_)))
        && components.next().is_none()
        && !code.contains(['/', '\\']);
    if !is_plain {
        return Err(GeneratorError::UnsafeOutputPath(code.to_string()));
    }

    Ok(output_base.join(level.output_name()).join(file_name))
}

/// Save an enriched dataset under `output_base`.
///
/// Regions go into one collection file; every other level gets one file per
/// entity holding a one-element array.
pub fn save_dataset(dataset: &EnrichedDataset, output_base: &Path) -> Result<WriteSummary> {
    fs::create_dir_all(output_base)?;
    let mut summary = WriteSummary::default();

    for (level, records) in dataset.iter() {
        let written = match level {
            Level::Region => {
                let path = output_base.join(format!("{}.json", level.output_name()));
                write_json_atomic(&path, records)?;
                1
            }
            Level::Province
            | Level::City
            | Level::Municipality
            | Level::SubMunicipality
            | Level::Barangay => {
                for record in records {
                    let path = entity_path(output_base, level, record)?;
                    write_json_atomic(&path, std::slice::from_ref(record))?;
                }
                records.len()
            }
        };

        tracing::debug!(level = %level, files = written, "wrote level output");
        summary.files.insert(level, written);
    }

    tracing::info!(
        output = %output_base.display(),
        files = summary.total(),
        "generated PSGC API files"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::types::RawRecord;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn dataset() -> EnrichedDataset {
        enrich(vec![
            RawRecord::new("0100000000", "Ilocos Region (Region I)", "Reg"),
            RawRecord::new("0102800000", "Ilocos Norte", "Prov"),
            RawRecord::new("0102805000", "City of Laoag", "City").with_status("Capital"),
            RawRecord::new("0102801000", "Adams", "Mun"),
            RawRecord::new("0102801001", "Adams", "Brgy").with_urban_rural("R"),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_json_format() {
        let content = render_json(&vec![1, 2]).unwrap();
        assert_eq!(content, "[\n  1,\n  2\n]\n");
    }

    #[test]
    fn test_save_dataset_layout() {
        let temp_dir = tempdir().unwrap();
        let summary = save_dataset(&dataset(), temp_dir.path()).unwrap();

        assert_eq!(summary.files_for(Level::Region), 1);
        assert_eq!(summary.files_for(Level::Province), 1);
        assert_eq!(summary.files_for(Level::City), 1);
        assert_eq!(summary.files_for(Level::Municipality), 1);
        assert_eq!(summary.files_for(Level::SubMunicipality), 0);
        assert_eq!(summary.files_for(Level::Barangay), 1);
        assert_eq!(summary.total(), 5);

        let base = temp_dir.path();
        assert!(base.join("regions.json").exists());
        assert!(base.join("provinces/0102800000.json").exists());
        assert!(base.join("cities/0102805000.json").exists());
        assert!(base.join("municipalities/0102801000.json").exists());
        assert!(base.join("barangays/0102801001.json").exists());
    }

    #[test]
    fn test_entity_file_is_single_element_array() {
        let temp_dir = tempdir().unwrap();
        save_dataset(&dataset(), temp_dir.path()).unwrap();

        let content =
            fs::read_to_string(temp_dir.path().join("cities/0102805000.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["isCapital"], true);
        assert_eq!(items[0]["provinceCode"], "0102800000");
    }

    #[test]
    fn test_code_with_path_separators_is_refused() {
        let temp_dir = tempdir().unwrap();
        let base = temp_dir.path().join("api");
        let dataset = enrich(vec![
            RawRecord::new("0102801001", "Adams", "Brgy"),
            RawRecord::new("../../../x", "Escape", "Brgy"),
        ])
        .unwrap();

        let err = save_dataset(&dataset, &base).unwrap_err();
        assert!(matches!(err, GeneratorError::UnsafeOutputPath(ref code) if code == "../../../x"));
        assert!(!temp_dir.path().join("x.json").exists());
        assert!(!base.parent().unwrap().join("x.json").exists());
    }

    #[test]
    fn test_entity_path_for_plain_code() {
        let dataset = dataset();
        let record = &dataset.records(Level::Barangay)[0];
        let path = entity_path(Path::new("api"), Level::Barangay, record).unwrap();
        assert_eq!(path, Path::new("api").join("barangays").join("0102801001.json"));
    }

    #[test]
    fn test_write_json_atomic_leaves_no_temp_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("data.json");
        write_json_atomic(&path, &["a"]).unwrap();
        write_json_atomic(&path, &["b"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[\n  \"b\"\n]\n");
        assert!(!temp_dir.path().join("nested").join(".data.json.tmp").exists());
    }
}
