//! Weight-banded unit pricing.
//!
//! Bands are kept in the order the user arranged them. Ascending order and
//! contiguity are checked at validation time, never enforced on each edit.

use serde::{Deserialize, Serialize};

use crate::domain::{BandId, Decimal};
use crate::engine::BatchAdjustment;
use crate::error::PricingError;

/// Width in kg of a band appended after the last one.
pub const APPENDED_BAND_WIDTH: i64 = 10;

/// A closed-open weight interval with a per-kg price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightBand {
    pub id: BandId,
    #[serde(rename = "range")]
    pub label: String,
    pub start_weight: Decimal,
    pub end_weight: Decimal,
    #[serde(rename = "price")]
    pub unit_price: Decimal,
}

impl WeightBand {
    pub fn new(id: BandId, start_weight: Decimal, end_weight: Decimal, unit_price: Decimal) -> Self {
        WeightBand {
            id,
            label: band_label(start_weight, end_weight),
            start_weight,
            end_weight,
            unit_price,
        }
    }

    /// True when `start_weight <= weight < end_weight`.
    pub fn contains(&self, weight: Decimal) -> bool {
        self.start_weight <= weight && weight < self.end_weight
    }
}

/// Label shown for a band, e.g. `"1-3kg"`.
pub fn band_label(start_weight: Decimal, end_weight: Decimal) -> String {
    format!("{}-{}kg", start_weight, end_weight)
}

/// A single field edit on a band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BandFieldUpdate {
    Label(String),
    StartWeight(Decimal),
    EndWeight(Decimal),
    UnitPrice(Decimal),
}

/// A gap or overlap between two neighbouring bands (in ascending order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContiguityIssue {
    Gap {
        after: BandId,
        before: BandId,
        from: Decimal,
        to: Decimal,
    },
    Overlap {
        first: BandId,
        second: BandId,
        from: Decimal,
        to: Decimal,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightBandSchedule {
    #[serde(rename = "weightRanges", default)]
    pub bands: Vec<WeightBand>,
}

impl WeightBandSchedule {
    pub fn new(bands: Vec<WeightBand>) -> Self {
        WeightBandSchedule { bands }
    }

    /// The seed set used when a schedule is first populated:
    /// 0-1, 1-3, 3-5, 5-10 and 10-30 kg, all priced at zero.
    pub fn with_default_bands() -> Self {
        let bounds = [(0, 1), (1, 3), (3, 5), (5, 10), (10, 30)];
        let bands = bounds
            .iter()
            .enumerate()
            .map(|(i, (start, end))| {
                WeightBand::new(
                    BandId::new((i + 1).to_string()),
                    Decimal::from_int(*start),
                    Decimal::from_int(*end),
                    Decimal::zero(),
                )
            })
            .collect();
        WeightBandSchedule { bands }
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn get(&self, id: &BandId) -> Option<&WeightBand> {
        self.bands.iter().find(|b| &b.id == id)
    }

    /// Append a band starting where the last one ends, 10kg wide, priced at
    /// zero. An empty schedule gets a 0-10kg band.
    ///
    /// # Errors
    /// `Overflow` when the last end weight leaves no room for another band.
    pub fn add_band(&self) -> Result<Self, PricingError> {
        let start = self
            .bands
            .last()
            .map(|b| b.end_weight)
            .unwrap_or_else(Decimal::zero);
        let end = start
            .checked_add(Decimal::from_int(APPENDED_BAND_WIDTH))
            .ok_or(PricingError::Overflow("appended band end weight"))?;

        let mut next = self.clone();
        next.bands
            .push(WeightBand::new(BandId::generate(), start, end, Decimal::zero()));
        Ok(next)
    }

    /// Remove the first band with `id`. Unknown ids leave the schedule
    /// unchanged.
    ///
    /// # Errors
    /// `MinimumCardinality` when only one band remains.
    pub fn remove_band(&self, id: &BandId) -> Result<Self, PricingError> {
        if self.bands.len() <= 1 {
            return Err(PricingError::MinimumCardinality);
        }
        let mut next = self.clone();
        if let Some(index) = next.bands.iter().position(|b| &b.id == id) {
            next.bands.remove(index);
        }
        Ok(next)
    }

    /// Replace one field of the band with `id`; unknown ids are a no-op.
    pub fn update_band_field(&self, id: &BandId, update: BandFieldUpdate) -> Self {
        let mut next = self.clone();
        if let Some(band) = next.bands.iter_mut().find(|b| &b.id == id) {
            match update {
                BandFieldUpdate::Label(label) => band.label = label,
                BandFieldUpdate::StartWeight(w) => band.start_weight = w,
                BandFieldUpdate::EndWeight(w) => band.end_weight = w,
                BandFieldUpdate::UnitPrice(p) => band.unit_price = p,
            }
        }
        next
    }

    /// Apply `adjustment` to every band price independently.
    pub fn batch_adjust(&self, adjustment: BatchAdjustment) -> Result<Self, PricingError> {
        let mut next = self.clone();
        for band in &mut next.bands {
            band.unit_price = adjustment.apply(band.unit_price)?;
        }
        Ok(next)
    }

    /// Bands in ascending `start_weight` order; ties keep their position.
    pub fn ascending(&self) -> Vec<&WeightBand> {
        let mut sorted: Vec<&WeightBand> = self.bands.iter().collect();
        sorted.sort_by_key(|b| b.start_weight);
        sorted
    }

    /// Sort ascending by `start_weight` and reassign ids `1..n`.
    pub fn renumber(&self) -> Self {
        let bands = self
            .ascending()
            .into_iter()
            .enumerate()
            .map(|(i, band)| WeightBand {
                id: BandId::new((i + 1).to_string()),
                ..band.clone()
            })
            .collect();
        WeightBandSchedule { bands }
    }

    /// Gaps and overlaps between neighbouring bands in ascending order.
    pub fn contiguity_issues(&self) -> Vec<ContiguityIssue> {
        self.ascending()
            .windows(2)
            .filter_map(|pair| {
                let (a, b) = (pair[0], pair[1]);
                if a.end_weight < b.start_weight {
                    Some(ContiguityIssue::Gap {
                        after: a.id.clone(),
                        before: b.id.clone(),
                        from: a.end_weight,
                        to: b.start_weight,
                    })
                } else if a.end_weight > b.start_weight {
                    Some(ContiguityIssue::Overlap {
                        first: a.id.clone(),
                        second: b.id.clone(),
                        from: b.start_weight,
                        to: a.end_weight.min(b.end_weight),
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Check the per-band invariants. Gaps and overlaps are tolerated and only
    /// logged.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.bands.is_empty() {
            return Err(PricingError::EmptySchedule);
        }
        for band in &self.bands {
            let reason = if band.start_weight.is_negative() {
                Some("start weight is negative")
            } else if band.end_weight <= band.start_weight {
                Some("end weight must exceed start weight")
            } else if band.unit_price.is_negative() {
                Some("price is negative")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(PricingError::InvalidBand {
                    id: band.id.clone(),
                    reason: reason.to_string(),
                });
            }
        }
        for issue in self.contiguity_issues() {
            tracing::warn!(?issue, "Weight bands are not contiguous");
        }
        Ok(())
    }
}
