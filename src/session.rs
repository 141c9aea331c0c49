//! An editing session: one template type, one history, one active
//! configuration.
//!
//! Every edit is computed against the active snapshot and, if it succeeds and
//! changes something, committed as a new snapshot. A failed edit leaves the
//! history exactly as it was.

use crate::domain::{
    BandFieldUpdate, BandId, Decimal, PriceField, PricingConfiguration, ProvinceCode,
    RegionEntry, RegionName, TemplateDocument, TemplateType,
};
use crate::engine::BatchAdjustment;
use crate::error::PricingError;
use crate::history::ConfigurationEditHistory;

#[derive(Debug, Clone)]
pub struct EditingSession {
    template_type: TemplateType,
    history: ConfigurationEditHistory,
}

impl EditingSession {
    /// Start a session from an existing configuration.
    ///
    /// # Errors
    /// `TemplateMismatch` when the configuration's shape does not fit
    /// `template_type`.
    pub fn new(
        template_type: TemplateType,
        configuration: PricingConfiguration,
    ) -> Result<Self, PricingError> {
        let expected = template_type.shape();
        if configuration.shape() != expected {
            return Err(PricingError::TemplateMismatch {
                expected,
                found: configuration.shape(),
            });
        }
        Ok(EditingSession {
            template_type,
            history: ConfigurationEditHistory::new(configuration),
        })
    }

    /// Start a blank session for `template_type`.
    pub fn blank(template_type: TemplateType, region_catalog: &[RegionEntry]) -> Self {
        EditingSession {
            template_type,
            history: ConfigurationEditHistory::new(PricingConfiguration::seed(
                template_type,
                region_catalog,
            )),
        }
    }

    /// Start a session seeded with a copy of a catalog template.
    pub fn from_template(
        template: &TemplateDocument,
        region_catalog: &[RegionEntry],
    ) -> Result<Self, PricingError> {
        let configuration = template.to_configuration(region_catalog)?;
        tracing::info!(template_type = %template.template_type, "Seeded session from template");
        Self::new(template.template_type, configuration)
    }

    pub fn template_type(&self) -> TemplateType {
        self.template_type
    }

    pub fn current(&self) -> &PricingConfiguration {
        self.history.current()
    }

    pub fn history(&self) -> &ConfigurationEditHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> Result<&PricingConfiguration, PricingError> {
        self.history.undo()
    }

    pub fn redo(&mut self) -> Result<&PricingConfiguration, PricingError> {
        self.history.redo()
    }

    /// Keep the active configuration and forget the rest of the history.
    pub fn reset(&mut self) {
        let current = self.history.current().clone();
        self.history.reset(current);
    }

    /// Compute an edit from the active configuration and commit the result.
    ///
    /// Returns whether a snapshot was committed: an edit that yields the
    /// current configuration unchanged is not recorded.
    pub fn apply<F>(&mut self, edit: F) -> Result<bool, PricingError>
    where
        F: FnOnce(&PricingConfiguration) -> Result<PricingConfiguration, PricingError>,
    {
        let next = edit(self.history.current())?;
        if next.shape() != self.template_type.shape() {
            return Err(PricingError::TemplateMismatch {
                expected: self.template_type.shape(),
                found: next.shape(),
            });
        }
        if &next == self.history.current() {
            return Ok(false);
        }
        self.history.commit(next);
        Ok(true)
    }

    pub fn add_band(&mut self) -> Result<bool, PricingError> {
        self.apply(|config| {
            Ok(PricingConfiguration::WeightBanded(
                config.weight_banded()?.add_band()?,
            ))
        })
    }

    pub fn remove_band(&mut self, id: &BandId) -> Result<bool, PricingError> {
        self.apply(|config| {
            Ok(PricingConfiguration::WeightBanded(
                config.weight_banded()?.remove_band(id)?,
            ))
        })
    }

    pub fn update_band_field(
        &mut self,
        id: &BandId,
        update: BandFieldUpdate,
    ) -> Result<bool, PricingError> {
        self.apply(|config| {
            Ok(PricingConfiguration::WeightBanded(
                config.weight_banded()?.update_band_field(id, update),
            ))
        })
    }

    /// Normalize band order and ids.
    pub fn renumber_bands(&mut self) -> Result<bool, PricingError> {
        self.apply(|config| {
            Ok(PricingConfiguration::WeightBanded(
                config.weight_banded()?.renumber(),
            ))
        })
    }

    pub fn update_region_field(
        &mut self,
        region_name: &RegionName,
        field: PriceField,
        value: Decimal,
    ) -> Result<bool, PricingError> {
        self.apply(|config| {
            Ok(PricingConfiguration::RegionTiered(
                config
                    .region_tiered()?
                    .update_region_field(region_name, field, value)?,
            ))
        })
    }

    pub fn set_province_override_field(
        &mut self,
        code: &ProvinceCode,
        field: PriceField,
        value: Option<Decimal>,
    ) -> Result<bool, PricingError> {
        self.apply(|config| {
            Ok(PricingConfiguration::RegionTiered(
                config
                    .region_tiered()?
                    .set_province_override_field(code, field, value),
            ))
        })
    }

    /// Bulk price change on whichever shape the session edits.
    pub fn batch_adjust(&mut self, adjustment: BatchAdjustment) -> Result<bool, PricingError> {
        self.apply(|config| {
            Ok(match config {
                PricingConfiguration::WeightBanded(schedule) => {
                    PricingConfiguration::WeightBanded(schedule.batch_adjust(adjustment)?)
                }
                PricingConfiguration::RegionTiered(schedule) => {
                    PricingConfiguration::RegionTiered(schedule.batch_adjust(adjustment)?)
                }
            })
        })
    }

    /// Validate and hand off the active configuration.
    pub fn finish(self) -> Result<(TemplateType, PricingConfiguration), PricingError> {
        self.history.current().validate()?;
        Ok((self.template_type, self.history.into_current()))
    }

    /// The active configuration as a template catalog entry.
    pub fn to_template_document(&self) -> TemplateDocument {
        TemplateDocument {
            template_type: self.template_type,
            template_data: self.history.current().to_document(),
        }
    }
}
