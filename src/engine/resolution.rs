//! Read-only price lookup against a configuration.

use serde::Serialize;

use crate::domain::{
    Decimal, PriceField, PricingConfiguration, ProvinceCatalog, ProvinceCode, RegionName,
    RegionTieredSchedule, WeightBandSchedule,
};
use crate::error::PricingError;

/// Effective region-tiered price for one province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRegionPrice {
    pub region_name: RegionName,
    pub first_weight_price: Decimal,
    pub additional_weight_price: Decimal,
    pub min_charge: Decimal,
    /// Fields taken from the province override rather than the region.
    pub overridden: Vec<PriceField>,
}

impl ResolvedRegionPrice {
    pub fn field(&self, field: PriceField) -> Decimal {
        match field {
            PriceField::FirstWeightPrice => self.first_weight_price,
            PriceField::AdditionalWeightPrice => self.additional_weight_price,
            PriceField::MinCharge => self.min_charge,
        }
    }
}

/// Result of [`preview`] for either schedule shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedPrice {
    UnitPrice { unit_price: Decimal },
    Region(ResolvedRegionPrice),
}

/// Price of the first band (ascending by start weight) with
/// `start_weight <= weight < end_weight`. Weights outside every band are not
/// extrapolated.
pub fn resolve_weight_band_price(
    schedule: &WeightBandSchedule,
    weight: Decimal,
) -> Result<Decimal, PricingError> {
    if schedule.is_empty() {
        return Err(PricingError::EmptySchedule);
    }
    schedule
        .ascending()
        .into_iter()
        .find(|band| band.contains(weight))
        .map(|band| band.unit_price)
        .ok_or(PricingError::NoMatchingBand(weight))
}

/// Effective price for a province: each field comes from the province
/// override when set, otherwise from the province's region.
pub fn resolve_region_price(
    schedule: &RegionTieredSchedule,
    province: &ProvinceCode,
    catalog: &ProvinceCatalog,
) -> Result<ResolvedRegionPrice, PricingError> {
    let region_name = catalog
        .region_of(province)
        .ok_or_else(|| PricingError::UnknownProvince(province.clone()))?;
    let region = schedule
        .region(region_name)
        .ok_or_else(|| PricingError::UnknownRegion(region_name.clone()))?;
    let province_override = schedule.province_override(province);

    let mut overridden = Vec::new();
    let mut pick = |field: PriceField| match province_override.and_then(|o| o.field(field)) {
        Some(value) => {
            overridden.push(field);
            value
        }
        None => region.field(field),
    };
    let first_weight_price = pick(PriceField::FirstWeightPrice);
    let additional_weight_price = pick(PriceField::AdditionalWeightPrice);
    let min_charge = pick(PriceField::MinCharge);

    Ok(ResolvedRegionPrice {
        region_name: region_name.clone(),
        first_weight_price,
        additional_weight_price,
        min_charge,
        overridden,
    })
}

/// Resolve against whichever shape `config` holds. Weight-banded schedules use
/// `weight`; region-tiered ones use `province`.
pub fn preview(
    config: &PricingConfiguration,
    weight: Decimal,
    province: &ProvinceCode,
    catalog: &ProvinceCatalog,
) -> Result<ResolvedPrice, PricingError> {
    match config {
        PricingConfiguration::WeightBanded(schedule) => {
            resolve_weight_band_price(schedule, weight)
                .map(|unit_price| ResolvedPrice::UnitPrice { unit_price })
        }
        PricingConfiguration::RegionTiered(schedule) => {
            resolve_region_price(schedule, province, catalog).map(ResolvedPrice::Region)
        }
    }
}
