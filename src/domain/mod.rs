//! Domain types for quotation pricing.
//!
//! This module provides:
//! - Exact money values via the Decimal wrapper
//! - Identifiers and enums: BandId, RegionName, ProvinceCode, TemplateType
//! - The two schedule shapes and the PricingConfiguration that selects one
//! - Region/province catalogs and the quote validity window

pub mod catalog;
pub mod configuration;
pub mod decimal;
pub mod primitives;
pub mod quote;
pub mod region_tiered;
pub mod weight_band;

pub use catalog::{Province, ProvinceCatalog, RegionEntry};
pub use configuration::{PricingConfiguration, TemplateDocument};
pub use decimal::Decimal;
pub use primitives::{
    AdjustMode, BandId, PriceField, ProvinceCode, RegionName, ScheduleShape, TemplateType,
};
pub use quote::QuoteValidity;
pub use region_tiered::{ProvinceOverride, RegionPrice, RegionTieredSchedule};
pub use weight_band::{BandFieldUpdate, ContiguityIssue, WeightBand, WeightBandSchedule};
