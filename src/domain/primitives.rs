//! Domain primitives: identifiers, the template discriminator and edit enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// Opaque weight band identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BandId(pub String);

impl BandId {
    pub fn new(id: impl Into<String>) -> Self {
        BandId(id.into())
    }

    /// Fresh identifier for a band created during editing.
    pub fn generate() -> Self {
        BandId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Region name, the natural key of a region price row (e.g. "1区").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionName(pub String);

impl RegionName {
    pub fn new(name: impl Into<String>) -> Self {
        RegionName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Province code, the key of the province override map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProvinceCode(pub String);

impl ProvinceCode {
    pub fn new(code: impl Into<String>) -> Self {
        ProvinceCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProvinceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Template category selecting the shape of a price document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateType {
    /// Weight-banded unit pricing (大客户).
    #[serde(rename = "DAKEHU", alias = "dakehu")]
    WeightBanded,
    /// Region/province tiered pricing (通票).
    #[serde(rename = "TONGPIAO", alias = "tongpiao")]
    RegionTiered,
    /// Warehouse distribution (仓配). Priced with the weight-banded shape.
    #[serde(rename = "CANGPEI", alias = "cangpei")]
    WarehouseDistribution,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::WeightBanded => "DAKEHU",
            TemplateType::RegionTiered => "TONGPIAO",
            TemplateType::WarehouseDistribution => "CANGPEI",
        }
    }

    /// The schedule shape this category is priced with.
    pub fn shape(&self) -> ScheduleShape {
        match self {
            TemplateType::WeightBanded | TemplateType::WarehouseDistribution => {
                ScheduleShape::WeightBanded
            }
            TemplateType::RegionTiered => ScheduleShape::RegionTiered,
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DAKEHU" => Ok(TemplateType::WeightBanded),
            "TONGPIAO" => Ok(TemplateType::RegionTiered),
            "CANGPEI" => Ok(TemplateType::WarehouseDistribution),
            _ => Err(PricingError::UnknownTemplateType(s.to_string())),
        }
    }
}

/// The two schedule shapes a configuration can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleShape {
    WeightBanded,
    RegionTiered,
}

impl fmt::Display for ScheduleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleShape::WeightBanded => write!(f, "weight-banded"),
            ScheduleShape::RegionTiered => write!(f, "region-tiered"),
        }
    }
}

/// Batch adjustment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustMode {
    /// Scale by `1 + value / 100`.
    Percent,
    /// Add `value`.
    Amount,
}

/// One of the three monetary fields of a region price or province override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    FirstWeightPrice,
    AdditionalWeightPrice,
    MinCharge,
}

impl PriceField {
    pub const ALL: [PriceField; 3] = [
        PriceField::FirstWeightPrice,
        PriceField::AdditionalWeightPrice,
        PriceField::MinCharge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::FirstWeightPrice => "first_weight_price",
            PriceField::AdditionalWeightPrice => "additional_weight_price",
            PriceField::MinCharge => "min_charge",
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
