use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::catalog::CatalogError;
use crate::domain::{BandId, Decimal, PriceField, ProvinceCode, RegionName, ScheduleShape};

/// Recoverable failures of the pricing core.
///
/// None of these leave a configuration or history half-modified: the edit
/// that failed is simply never committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Schedule has no weight bands")]
    EmptySchedule,
    #[error("Cannot remove the last remaining weight band")]
    MinimumCardinality,
    #[error("Adjustment value must be non-zero")]
    InvalidAdjustment,
    #[error("Unknown region: {0}")]
    UnknownRegion(RegionName),
    #[error("Unknown province: {0}")]
    UnknownProvince(ProvinceCode),
    #[error("No weight band covers {0}kg")]
    NoMatchingBand(Decimal),
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Nothing to redo")]
    NothingToRedo,
    #[error("Invalid weight band {id}: {reason}")]
    InvalidBand { id: BandId, reason: String },
    #[error("Invalid {field} for region {region}")]
    InvalidPrice { region: RegionName, field: PriceField },
    #[error("Duplicate region: {0}")]
    DuplicateRegion(RegionName),
    #[error("Template expects a {expected} schedule, found {found}")]
    TemplateMismatch {
        expected: ScheduleShape,
        found: ScheduleShape,
    },
    #[error("Malformed price document: {0}")]
    MalformedDocument(String),
    #[error("Unknown template type: {0}")]
    UnknownTemplateType(String),
    #[error("Value out of range while computing {0}")]
    Overflow(&'static str),
}

/// Errors surfaced by the preview binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),
}
