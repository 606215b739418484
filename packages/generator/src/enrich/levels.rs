//! One enricher per administrative level.
//!
//! Every enricher validates the record's own code, which is never changed,
//! and derives parent codes from it. `status` is consumed here and never
//! reaches the output; `urbanRural` is kept only for barangays.

use super::enricher::{EnrichContext, LevelEnricher};
use crate::classify::classify_urban_rural;
use crate::codes::{decompose, pad_prefix, validate_code};
use crate::config::{CAPITAL_STATUS, POBLACION_STATUS, POBLACION_SUFFIX, PROVINCE_PREFIX_LEN};
use crate::error::Result;
use crate::names::parse_region_name;
use crate::types::{
    BarangayRecord, CityMunicipalityRecord, EnrichedRecord, ProvinceRecord, RawRecord,
    RegionRecord, SubMunicipalityRecord,
};

/// Regions sit at the top of the hierarchy and carry no parent codes.
///
/// The display name is split into a descriptive `regionName` and the
/// official designation, which becomes the record name.
pub struct RegionEnricher;

impl LevelEnricher for RegionEnricher {
    fn enrich(&self, record: RawRecord, _context: &EnrichContext<'_>) -> Result<EnrichedRecord> {
        validate_code(&record.psgc_code)?;
        let (mut fields, _) = record.into_parts();

        let parsed = parse_region_name(&fields.name);
        fields.name = parsed.name;

        Ok(EnrichedRecord::Region(RegionRecord {
            fields,
            region_name: parsed.region_name,
        }))
    }
}

pub struct ProvinceEnricher;

impl LevelEnricher for ProvinceEnricher {
    fn enrich(&self, record: RawRecord, _context: &EnrichContext<'_>) -> Result<EnrichedRecord> {
        let codes = decompose(&record.psgc_code)?;
        let (fields, _) = record.into_parts();

        Ok(EnrichedRecord::Province(ProvinceRecord {
            fields,
            region_code: codes.region_code,
        }))
    }
}

/// Shared by cities and municipalities.
pub struct CityMunicipalityEnricher;

impl LevelEnricher for CityMunicipalityEnricher {
    fn enrich(&self, record: RawRecord, _context: &EnrichContext<'_>) -> Result<EnrichedRecord> {
        let codes = decompose(&record.psgc_code)?;
        let (fields, inputs) = record.into_parts();

        Ok(EnrichedRecord::CityMunicipality(CityMunicipalityRecord {
            fields,
            region_code: codes.region_code,
            province_code: codes.province_code,
            is_capital: inputs.has_status(CAPITAL_STATUS),
        }))
    }
}

/// Sub-municipalities point at the city they subdivide via the
/// five-character prefix and have no province.
pub struct SubMunicipalityEnricher;

impl LevelEnricher for SubMunicipalityEnricher {
    fn enrich(&self, record: RawRecord, _context: &EnrichContext<'_>) -> Result<EnrichedRecord> {
        let codes = decompose(&record.psgc_code)?;
        let city_municipality_code = pad_prefix(&record.psgc_code, PROVINCE_PREFIX_LEN);
        let (fields, _) = record.into_parts();

        Ok(EnrichedRecord::SubMunicipality(SubMunicipalityRecord {
            fields,
            region_code: codes.region_code,
            city_municipality_code,
        }))
    }
}

/// Barangays keep their urban/rural label and learn whether their city is
/// subdivided from the sub-municipality index.
pub struct BarangayEnricher;

impl LevelEnricher for BarangayEnricher {
    fn enrich(&self, record: RawRecord, context: &EnrichContext<'_>) -> Result<EnrichedRecord> {
        let codes = decompose(&record.psgc_code)?;
        let in_sub_municipality = context.sub_municipalities.contains(&record.psgc_code);
        let (mut fields, inputs) = record.into_parts();

        let is_poblacion = inputs.has_status(POBLACION_STATUS);
        if is_poblacion {
            fields.name.push_str(POBLACION_SUFFIX);
        }

        let (city_municipality_code, sub_municipality_code) = if in_sub_municipality {
            (
                pad_prefix(&fields.psgc_code, PROVINCE_PREFIX_LEN),
                Some(codes.sub_municipality_code),
            )
        } else {
            (codes.city_municipality_code, None)
        };

        Ok(EnrichedRecord::Barangay(BarangayRecord {
            fields,
            urban_rural: classify_urban_rural(inputs.urban_rural.as_deref()),
            region_code: codes.region_code,
            province_code: codes.province_code,
            city_municipality_code,
            is_poblacion,
            sub_municipality_code,
        }))
    }
}
