//! Pure computation over pricing configurations.
//!
//! Nothing here mutates a schedule in place: lookups only read, and the batch
//! transform produces values the schedules copy into a new state.

pub mod adjustment;
pub mod resolution;

pub use adjustment::BatchAdjustment;
pub use resolution::{
    preview, resolve_region_price, resolve_weight_band_price, ResolvedPrice, ResolvedRegionPrice,
};
