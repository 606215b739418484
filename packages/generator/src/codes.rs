//! Decomposition of ten-digit PSGC codes into parent codes.
//!
//! A PSGC code encodes its position by character prefix: the first 2
//! characters name the region, the first 5 the province, the first 7 the
//! city/municipality. A parent code is that prefix right-padded with `'0'`.

use crate::config::{
    CITY_MUNICIPALITY_PREFIX_LEN, CODE_LENGTH, PROVINCE_PREFIX_LEN, REGION_PREFIX_LEN,
    SUB_MUNICIPALITY_PREFIX_LEN,
};
use crate::error::{GeneratorError, Result};

/// Parent codes derived from a single PSGC code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSet {
    pub region_code: String,
    pub province_code: String,
    pub city_municipality_code: String,
    pub sub_municipality_code: String,
}

/// Reject any code that is not exactly [`CODE_LENGTH`] characters.
pub fn validate_code(code: &str) -> Result<()> {
    let length = code.chars().count();
    if length == CODE_LENGTH {
        Ok(())
    } else {
        Err(GeneratorError::InvalidCodeLength {
            code: code.to_string(),
            length,
        })
    }
}

/// Keep the first `len` characters of a code and pad with `'0'` to full width.
///
/// The code must already be validated.
///
/// # Examples
/// ```
/// use psgc_generator::codes::pad_prefix;
///
/// assert_eq!(pad_prefix("0102805001", 5), "0102800000");
/// ```
#[must_use]
pub fn pad_prefix(code: &str, len: usize) -> String {
    let prefix: String = code.chars().take(len).collect();
    format!("{prefix:0<width$}", width = CODE_LENGTH)
}

/// Derive all parent codes of `code`.
///
/// # Errors
/// `GeneratorError::InvalidCodeLength` if the code is not ten characters.
///
/// # Examples
/// ```
/// use psgc_generator::codes::decompose;
///
/// let codes = decompose("0102805000").unwrap();
/// assert_eq!(codes.region_code, "0100000000");
/// assert_eq!(codes.province_code, "0102800000");
/// assert_eq!(codes.city_municipality_code, "0102805000");
/// ```
pub fn decompose(code: &str) -> Result<CodeSet> {
    validate_code(code)?;

    Ok(CodeSet {
        region_code: pad_prefix(code, REGION_PREFIX_LEN),
        province_code: pad_prefix(code, PROVINCE_PREFIX_LEN),
        city_municipality_code: pad_prefix(code, CITY_MUNICIPALITY_PREFIX_LEN),
        sub_municipality_code: pad_prefix(code, SUB_MUNICIPALITY_PREFIX_LEN),
    })
}

/// The leading characters shared by a sub-municipality and its barangays.
///
/// Counted in characters, like `pad_prefix`, so index keys and padded
/// sub-municipality codes agree on non-ASCII input. Returns `None` for codes
/// too short to carry the prefix.
#[must_use]
pub fn sub_municipality_prefix(code: &str) -> Option<&str> {
    let end = code
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(code.len()))
        .nth(SUB_MUNICIPALITY_PREFIX_LEN)?;
    Some(&code[..end])
}
