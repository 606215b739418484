//! Parsing of composite region display names.

use std::sync::LazyLock;

use regex::Regex;

/// "Leading text (parenthetical text)", e.g. "Ilocos Region (Region I)".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static REGION_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+?)\s*\((.+?)\)").expect("valid regex"));

/// Descriptive and official names of a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionName {
    /// Descriptive name, e.g. "Ilocos Region".
    pub region_name: String,

    /// Official designation used as the record name, e.g. "Region I".
    pub name: String,
}

/// Split a region display name into its descriptive and official parts.
///
/// Names without a parenthetical designation (e.g. "MIMAROPA Region") keep
/// the full name and take the first word as the descriptive name.
///
/// # Examples
/// ```
/// use psgc_generator::names::parse_region_name;
///
/// let parsed = parse_region_name("Ilocos Region (Region I)");
/// assert_eq!(parsed.region_name, "Ilocos Region");
/// assert_eq!(parsed.name, "Region I");
///
/// let parsed = parse_region_name("MIMAROPA Region");
/// assert_eq!(parsed.region_name, "MIMAROPA");
/// assert_eq!(parsed.name, "MIMAROPA Region");
/// ```
#[must_use]
pub fn parse_region_name(display_name: &str) -> RegionName {
    if let Some(caps) = REGION_NAME_PATTERN.captures(display_name) {
        if let (Some(leading), Some(inner)) = (caps.get(1), caps.get(2)) {
            return RegionName {
                region_name: leading.as_str().trim().to_string(),
                name: inner.as_str().trim().to_string(),
            };
        }
    }

    RegionName {
        region_name: display_name.split(' ').next().unwrap_or_default().to_string(),
        name: display_name.to_string(),
    }
}
