//! The price document edited in a quote: one of two schedule shapes.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::RegionEntry;
use crate::domain::{
    RegionTieredSchedule, ScheduleShape, TemplateType, WeightBandSchedule,
};
use crate::error::PricingError;

/// A pricing schedule in one of its two shapes.
///
/// Serializes untagged: the discriminator travels next to the document
/// (see [`TemplateDocument`]), not inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PricingConfiguration {
    WeightBanded(WeightBandSchedule),
    RegionTiered(RegionTieredSchedule),
}

impl PricingConfiguration {
    pub fn shape(&self) -> ScheduleShape {
        match self {
            PricingConfiguration::WeightBanded(_) => ScheduleShape::WeightBanded,
            PricingConfiguration::RegionTiered(_) => ScheduleShape::RegionTiered,
        }
    }

    /// A fresh configuration for `template_type`: the default bands, or one
    /// zero-priced row per catalog region.
    pub fn seed(template_type: TemplateType, region_catalog: &[RegionEntry]) -> Self {
        match template_type.shape() {
            ScheduleShape::WeightBanded => {
                PricingConfiguration::WeightBanded(WeightBandSchedule::with_default_bands())
            }
            ScheduleShape::RegionTiered => PricingConfiguration::RegionTiered(
                RegionTieredSchedule::initialize(region_catalog),
            ),
        }
    }

    /// Build a configuration from a stored price document.
    ///
    /// The discriminator decides which shape is read. A document carrying the
    /// other shape's key is rejected; an empty document, or one whose list is
    /// empty, is seeded the way a new schedule is.
    pub fn from_document(
        template_type: TemplateType,
        document: &serde_json::Value,
        region_catalog: &[RegionEntry],
    ) -> Result<Self, PricingError> {
        let object = match document {
            serde_json::Value::Null => return Ok(Self::seed(template_type, region_catalog)),
            serde_json::Value::Object(map) => map,
            other => {
                return Err(PricingError::MalformedDocument(format!(
                    "expected an object, got {}",
                    other
                )))
            }
        };

        let expected = template_type.shape();
        let has_bands = object.contains_key("weightRanges");
        let has_regions = object.contains_key("regions");
        match (expected, has_bands, has_regions) {
            (ScheduleShape::WeightBanded, false, true) => {
                return Err(PricingError::TemplateMismatch {
                    expected,
                    found: ScheduleShape::RegionTiered,
                })
            }
            (ScheduleShape::RegionTiered, true, false) => {
                return Err(PricingError::TemplateMismatch {
                    expected,
                    found: ScheduleShape::WeightBanded,
                })
            }
            _ => {}
        }

        let malformed = |e: serde_json::Error| PricingError::MalformedDocument(e.to_string());
        match expected {
            ScheduleShape::WeightBanded => {
                let schedule: WeightBandSchedule =
                    serde_json::from_value(document.clone()).map_err(malformed)?;
                if schedule.is_empty() {
                    return Ok(Self::seed(template_type, region_catalog));
                }
                Ok(PricingConfiguration::WeightBanded(schedule))
            }
            ScheduleShape::RegionTiered => {
                let mut schedule: RegionTieredSchedule =
                    serde_json::from_value(document.clone()).map_err(malformed)?;
                if schedule.regions.is_empty() {
                    schedule.regions = RegionTieredSchedule::initialize(region_catalog).regions;
                }
                Ok(PricingConfiguration::RegionTiered(schedule))
            }
        }
    }

    /// The plain structured value handed to persistence and rendering.
    pub fn to_document(&self) -> serde_json::Value {
        serde_json::to_value(self)
            .expect("schedules hold only strings, numbers and string-keyed maps")
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        match self {
            PricingConfiguration::WeightBanded(schedule) => schedule.validate(),
            PricingConfiguration::RegionTiered(schedule) => schedule.validate(),
        }
    }

    pub fn as_weight_banded(&self) -> Option<&WeightBandSchedule> {
        match self {
            PricingConfiguration::WeightBanded(schedule) => Some(schedule),
            PricingConfiguration::RegionTiered(_) => None,
        }
    }

    pub fn as_region_tiered(&self) -> Option<&RegionTieredSchedule> {
        match self {
            PricingConfiguration::RegionTiered(schedule) => Some(schedule),
            PricingConfiguration::WeightBanded(_) => None,
        }
    }

    /// The weight-banded schedule, or `TemplateMismatch`.
    pub fn weight_banded(&self) -> Result<&WeightBandSchedule, PricingError> {
        self.as_weight_banded()
            .ok_or(PricingError::TemplateMismatch {
                expected: ScheduleShape::WeightBanded,
                found: self.shape(),
            })
    }

    /// The region-tiered schedule, or `TemplateMismatch`.
    pub fn region_tiered(&self) -> Result<&RegionTieredSchedule, PricingError> {
        self.as_region_tiered()
            .ok_or(PricingError::TemplateMismatch {
                expected: ScheduleShape::RegionTiered,
                found: self.shape(),
            })
    }
}

/// A template as supplied by the template catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    pub template_type: TemplateType,
    #[serde(default)]
    pub template_data: serde_json::Value,
}

impl TemplateDocument {
    /// Read the template into an owned configuration. The template itself is
    /// never shared with the result.
    pub fn to_configuration(
        &self,
        region_catalog: &[RegionEntry],
    ) -> Result<PricingConfiguration, PricingError> {
        PricingConfiguration::from_document(self.template_type, &self.template_data, region_catalog)
    }
}
