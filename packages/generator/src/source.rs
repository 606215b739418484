//! Reading the flat PSGC table.
//!
//! Three inputs are supported: the flat JSON record array produced by the
//! `convert` step, the publication workbook itself, and a CSV export of its
//! datafile sheet.

use std::fs;
use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::config::{DEFAULT_SHEET_INDEX, UNAVAILABLE_CORRESPONDENCE_CODE};
use crate::error::{GeneratorError, Result};
use crate::output::write_json_atomic;
use crate::types::RawRecord;

/// Column headers of the publication datafile, whitespace-normalized.
mod headers {
    pub const CODE: &str = "10-digit PSGC";
    pub const NAME: &str = "Name";
    pub const CORRESPONDENCE_CODE: &str = "Correspondence Code";
    pub const LEVEL: &str = "Geographic Level";
    pub const OLD_NAME: &str = "Old Name";
    pub const CITY_CLASS: &str = "City Class";
    pub const INCOME_CLASSIFICATION: &str = "Income Classification";
    pub const URBAN_RURAL: &str = "Urban / Rural (based on 2020 CPH)";
    pub const POPULATION: &str = "2020 Population";
    pub const STATUS: &str = "Status";
}

/// Load records from a `.json`, `.csv` or `.xlsx` file.
///
/// Workbooks are read from the datafile sheet at [`DEFAULT_SHEET_INDEX`].
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    load_records_from_sheet(path, DEFAULT_SHEET_INDEX)
}

/// Like [`load_records`], reading workbooks from the sheet at `sheet`.
pub fn load_records_from_sheet(path: &Path, sheet: usize) -> Result<Vec<RawRecord>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let records = match extension.as_deref() {
        Some("json") => load_json(path)?,
        Some("csv") => load_csv(path)?,
        Some("xlsx") => load_xlsx(path, sheet)?,
        _ => return Err(GeneratorError::UnsupportedInput(path.to_path_buf())),
    };

    tracing::info!(path = %path.display(), records = records.len(), "loaded PSGC records");
    Ok(records)
}

/// Load the flat JSON record array.
pub fn load_json(path: &Path) -> Result<Vec<RawRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a CSV export of the publication datafile.
pub fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    read_csv(reader)
}

/// Load the datafile sheet of the publication workbook.
///
/// The first row of the sheet holds the column headers; fully blank rows
/// are skipped.
pub fn load_xlsx(path: &Path, sheet: usize) -> Result<Vec<RawRecord>> {
    let mut workbook = open_workbook_auto(path)?;
    let available = workbook.sheet_names().len();
    let range = workbook
        .worksheet_range_at(sheet)
        .ok_or(GeneratorError::MissingSheet {
            index: sheet,
            available,
        })??;

    tracing::debug!(path = %path.display(), sheet, rows = range.height(), "reading workbook sheet");

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let Some(header_row) = rows.next() else {
        return Err(GeneratorError::MissingColumn(headers::CODE.to_string()));
    };
    let columns = Columns::locate(header_row.iter().map(String::as_str))?;

    rows.filter(|row| row.iter().any(|v| !v.trim().is_empty()))
        .map(|row| parse_row(&columns, &row))
        .collect()
}

/// Cell contents as text. Whole numbers are printed without a fraction.
fn cell_text(data: &Data) -> String {
    match data {
        Data::String(value) => value.clone(),
        other => other.to_string(),
    }
}

/// Write records as the flat JSON array read by [`load_json`].
pub fn save_records(records: &[RawRecord], path: &Path) -> Result<()> {
    write_json_atomic(path, records)?;
    tracing::info!(path = %path.display(), records = records.len(), "saved PSGC records");
    Ok(())
}

/// Collapse runs of whitespace (including embedded line breaks) to one space.
fn normalize_header(header: &str) -> String {
    header.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Column positions in a datafile header row.
struct Columns {
    code: usize,
    name: usize,
    level: usize,
    correspondence_code: Option<usize>,
    old_name: Option<usize>,
    city_class: Option<usize>,
    income_classification: Option<usize>,
    urban_rural: Option<usize>,
    population: Option<usize>,
    status: Option<usize>,
}

impl Columns {
    fn locate<'a>(header_row: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let normalized: Vec<String> = header_row.into_iter().map(normalize_header).collect();
        let find = |name: &str| normalized.iter().position(|h| h.eq_ignore_ascii_case(name));
        let require =
            |name: &str| find(name).ok_or_else(|| GeneratorError::MissingColumn(name.to_string()));

        Ok(Self {
            code: require(headers::CODE)?,
            name: require(headers::NAME)?,
            level: require(headers::LEVEL)?,
            correspondence_code: find(headers::CORRESPONDENCE_CODE),
            old_name: find(headers::OLD_NAME),
            city_class: find(headers::CITY_CLASS),
            income_classification: find(headers::INCOME_CLASSIFICATION),
            urban_rural: find(headers::URBAN_RURAL),
            population: find(headers::POPULATION),
            status: find(headers::STATUS),
        })
    }
}

/// Non-empty, trimmed cell value.
fn cell<S: AsRef<str>>(row: &[S], index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| row.get(i))
        .map(|v| v.as_ref().trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Parse a population cell, accepting thousands separators.
fn parse_population(code: &str, value: Option<&str>) -> Result<u64> {
    let Some(value) = value else {
        return Ok(0);
    };
    let digits: String = value.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse()
        .map_err(|_| GeneratorError::InvalidPopulation {
            code: code.to_string(),
            value: value.to_string(),
        })
}

/// The datafile abbreviates barangays as `Bgy`; the flat records use `Brgy`.
fn normalize_level(level: &str) -> String {
    if level == "Bgy" {
        "Brgy".to_string()
    } else {
        level.to_string()
    }
}

/// Build a record from one data row.
fn parse_row<S: AsRef<str>>(columns: &Columns, row: &[S]) -> Result<RawRecord> {
    let psgc_code = cell(row, Some(columns.code)).unwrap_or_default();
    let population = parse_population(&psgc_code, cell(row, columns.population).as_deref())?;

    Ok(RawRecord {
        name: row
            .get(columns.name)
            .map(|v| v.as_ref().to_string())
            .unwrap_or_default(),
        code: cell(row, columns.correspondence_code)
            .unwrap_or_else(|| UNAVAILABLE_CORRESPONDENCE_CODE.to_string()),
        geographic_level: normalize_level(&cell(row, Some(columns.level)).unwrap_or_default()),
        old_name: cell(row, columns.old_name),
        city_class: cell(row, columns.city_class),
        income_classification: cell(row, columns.income_classification),
        urban_rural: cell(row, columns.urban_rural),
        population,
        status: cell(row, columns.status),
        psgc_code,
    })
}

fn read_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<RawRecord>> {
    let columns = Columns::locate(reader.headers()?.iter())?;
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let values: Vec<&str> = row.iter().collect();
        records.push(parse_row(&columns, &values)?);
    }

    Ok(records)
}
