//! Validity window of a quote.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_VALID_DAYS: u32 = 30;
pub const MAX_VALID_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidityError {
    #[error("valid_days must be between 1 and 365, got {0}")]
    OutOfRange(u32),
}

/// Issue date and lifetime of a quote.
///
/// Deserializing goes through [`QuoteValidity::new`], so a stored lifetime
/// outside `1..=365` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuoteValidity")]
pub struct QuoteValidity {
    pub quote_date: NaiveDate,
    pub valid_days: u32,
}

#[derive(Deserialize)]
struct RawQuoteValidity {
    quote_date: NaiveDate,
    valid_days: u32,
}

impl TryFrom<RawQuoteValidity> for QuoteValidity {
    type Error = ValidityError;

    fn try_from(raw: RawQuoteValidity) -> Result<Self, Self::Error> {
        QuoteValidity::new(raw.quote_date, raw.valid_days)
    }
}

impl QuoteValidity {
    pub fn new(quote_date: NaiveDate, valid_days: u32) -> Result<Self, ValidityError> {
        if !(1..=MAX_VALID_DAYS).contains(&valid_days) {
            return Err(ValidityError::OutOfRange(valid_days));
        }
        Ok(QuoteValidity {
            quote_date,
            valid_days,
        })
    }

    pub fn with_default_days(quote_date: NaiveDate) -> Self {
        QuoteValidity {
            quote_date,
            valid_days: DEFAULT_VALID_DAYS,
        }
    }

    pub fn expire_date(&self) -> NaiveDate {
        self.quote_date + Duration::days(i64::from(self.valid_days))
    }

    /// A quote is still valid on its expiry date.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        date > self.expire_date()
    }

    /// Same lifetime, reissued on `date` (quote duplication).
    pub fn reissued_on(&self, date: NaiveDate) -> Self {
        QuoteValidity {
            quote_date: date,
            valid_days: self.valid_days,
        }
    }
}
