pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod history;
pub mod preview;
pub mod session;

pub use config::Config;
pub use domain::{
    AdjustMode, BandFieldUpdate, BandId, Decimal, PriceField, PricingConfiguration, Province,
    ProvinceCatalog, ProvinceCode, ProvinceOverride, QuoteValidity, RegionEntry, RegionName,
    RegionPrice, RegionTieredSchedule, ScheduleShape, TemplateDocument, TemplateType, WeightBand,
    WeightBandSchedule,
};
pub use engine::{BatchAdjustment, ResolvedPrice, ResolvedRegionPrice};
pub use error::{AppError, PricingError};
pub use history::{ConfigurationEditHistory, EditHistory};
pub use session::EditingSession;
