//! Region/province tiered pricing.
//!
//! Every region carries a full price row. Provinces may override any subset of
//! the three fields; whatever a province leaves unset is read from the row of
//! the region the province catalog places it in.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::catalog::RegionEntry;
use crate::domain::{Decimal, PriceField, ProvinceCode, RegionName};
use crate::engine::BatchAdjustment;
use crate::error::PricingError;

/// Base price row of one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPrice {
    pub region_name: RegionName,
    #[serde(default)]
    pub first_weight_price: Decimal,
    #[serde(default)]
    pub additional_weight_price: Decimal,
    #[serde(default)]
    pub min_charge: Decimal,
}

impl RegionPrice {
    pub fn zeroed(region_name: RegionName) -> Self {
        RegionPrice {
            region_name,
            first_weight_price: Decimal::zero(),
            additional_weight_price: Decimal::zero(),
            min_charge: Decimal::zero(),
        }
    }

    pub fn field(&self, field: PriceField) -> Decimal {
        match field {
            PriceField::FirstWeightPrice => self.first_weight_price,
            PriceField::AdditionalWeightPrice => self.additional_weight_price,
            PriceField::MinCharge => self.min_charge,
        }
    }

    fn field_mut(&mut self, field: PriceField) -> &mut Decimal {
        match field {
            PriceField::FirstWeightPrice => &mut self.first_weight_price,
            PriceField::AdditionalWeightPrice => &mut self.additional_weight_price,
            PriceField::MinCharge => &mut self.min_charge,
        }
    }
}

/// Partial price record for one province. `None` means inherit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_weight_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_weight_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_charge: Option<Decimal>,
}

impl ProvinceOverride {
    pub fn field(&self, field: PriceField) -> Option<Decimal> {
        match field {
            PriceField::FirstWeightPrice => self.first_weight_price,
            PriceField::AdditionalWeightPrice => self.additional_weight_price,
            PriceField::MinCharge => self.min_charge,
        }
    }

    fn field_mut(&mut self, field: PriceField) -> &mut Option<Decimal> {
        match field {
            PriceField::FirstWeightPrice => &mut self.first_weight_price,
            PriceField::AdditionalWeightPrice => &mut self.additional_weight_price,
            PriceField::MinCharge => &mut self.min_charge,
        }
    }

    pub fn is_empty(&self) -> bool {
        PriceField::ALL.iter().all(|f| self.field(*f).is_none())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionTieredSchedule {
    #[serde(default)]
    pub regions: Vec<RegionPrice>,
    #[serde(rename = "provinceOverrides", default)]
    pub province_overrides: BTreeMap<ProvinceCode, ProvinceOverride>,
}

impl RegionTieredSchedule {
    /// One zero-priced row per catalog entry, in catalog order.
    pub fn initialize(region_catalog: &[RegionEntry]) -> Self {
        RegionTieredSchedule {
            regions: region_catalog
                .iter()
                .map(|entry| RegionPrice::zeroed(entry.region_name.clone()))
                .collect(),
            province_overrides: BTreeMap::new(),
        }
    }

    pub fn region(&self, region_name: &RegionName) -> Option<&RegionPrice> {
        self.regions.iter().find(|r| &r.region_name == region_name)
    }

    pub fn province_override(&self, code: &ProvinceCode) -> Option<&ProvinceOverride> {
        self.province_overrides.get(code)
    }

    /// # Errors
    /// `UnknownRegion` when no row is named `region_name`.
    pub fn update_region_field(
        &self,
        region_name: &RegionName,
        field: PriceField,
        value: Decimal,
    ) -> Result<Self, PricingError> {
        let mut next = self.clone();
        let region = next
            .regions
            .iter_mut()
            .find(|r| &r.region_name == region_name)
            .ok_or_else(|| PricingError::UnknownRegion(region_name.clone()))?;
        *region.field_mut(field) = value;
        Ok(next)
    }

    /// Set or clear one override field of a province.
    ///
    /// Clearing a field reverts it to the inherited value. The override entry
    /// itself is kept even once every field is cleared.
    pub fn set_province_override_field(
        &self,
        code: &ProvinceCode,
        field: PriceField,
        value: Option<Decimal>,
    ) -> Self {
        let mut next = self.clone();
        let entry = next.province_overrides.entry(code.clone()).or_default();
        *entry.field_mut(field) = value;
        next
    }

    /// Adjust all three fields of every region row. Province overrides are
    /// left exactly as they are.
    pub fn batch_adjust(&self, adjustment: BatchAdjustment) -> Result<Self, PricingError> {
        let mut next = self.clone();
        for region in &mut next.regions {
            for field in PriceField::ALL {
                let slot = region.field_mut(field);
                *slot = adjustment.apply(*slot)?;
            }
        }
        Ok(next)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        let mut seen = HashSet::new();
        for region in &self.regions {
            if !seen.insert(&region.region_name) {
                return Err(PricingError::DuplicateRegion(region.region_name.clone()));
            }
            if let Some(field) = PriceField::ALL
                .into_iter()
                .find(|f| region.field(*f).is_negative())
            {
                return Err(PricingError::InvalidPrice {
                    region: region.region_name.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}
