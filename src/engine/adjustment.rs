use crate::domain::{AdjustMode, Decimal};
use crate::error::PricingError;

/// A validated bulk price change.
///
/// Construction rejects a zero value, so holding one means the adjustment
/// actually changes something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchAdjustment {
    mode: AdjustMode,
    value: Decimal,
}

impl BatchAdjustment {
    /// # Errors
    /// `InvalidAdjustment` when `value` is zero.
    pub fn new(mode: AdjustMode, value: Decimal) -> Result<Self, PricingError> {
        if value.is_zero() {
            return Err(PricingError::InvalidAdjustment);
        }
        Ok(BatchAdjustment { mode, value })
    }

    pub fn percent(value: Decimal) -> Result<Self, PricingError> {
        Self::new(AdjustMode::Percent, value)
    }

    pub fn amount(value: Decimal) -> Result<Self, PricingError> {
        Self::new(AdjustMode::Amount, value)
    }

    pub fn mode(&self) -> AdjustMode {
        self.mode
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Adjust one price and round it to cents.
    ///
    /// Results may go negative; `validate` rejects those at hand-off.
    ///
    /// # Errors
    /// `Overflow` when the result does not fit a `Decimal`.
    pub fn apply(&self, price: Decimal) -> Result<Decimal, PricingError> {
        let adjusted = match self.mode {
            AdjustMode::Percent => (self.value / Decimal::hundred())
                .checked_add(Decimal::one())
                .and_then(|factor| price.checked_mul(factor)),
            AdjustMode::Amount => price.checked_add(self.value),
        };
        adjusted
            .map(|value| value.round_money())
            .ok_or(PricingError::Overflow("batch adjustment"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_zero_adjustment_rejected() {
        assert_eq!(
            BatchAdjustment::new(AdjustMode::Amount, Decimal::zero()),
            Err(PricingError::InvalidAdjustment)
        );
        assert_eq!(
            BatchAdjustment::percent(d("0.00")),
            Err(PricingError::InvalidAdjustment)
        );
    }

    #[test]
    fn test_percent() {
        let up = BatchAdjustment::percent(d("10")).unwrap();
        assert_eq!(up.apply(d("100")).unwrap(), d("110"));
        assert_eq!(up.apply(d("0.05")).unwrap(), d("0.06"));

        let down = BatchAdjustment::percent(d("-10")).unwrap();
        assert_eq!(down.apply(d("30")).unwrap(), d("27"));
        assert_eq!(down.apply(d("0.15")).unwrap(), d("0.14"));
    }

    #[test]
    fn test_amount() {
        let plus = BatchAdjustment::amount(d("1")).unwrap();
        assert_eq!(plus.apply(d("2.345")).unwrap(), d("3.35"));

        let minus = BatchAdjustment::amount(d("-1")).unwrap();
        assert_eq!(minus.apply(d("5")).unwrap(), d("4"));
    }

    #[test]
    fn test_result_follows_formula_below_zero() {
        let minus = BatchAdjustment::amount(d("-1")).unwrap();
        assert_eq!(minus.apply(d("0.4")).unwrap(), d("-0.60"));
        assert_eq!(minus.apply(Decimal::zero()).unwrap(), d("-1"));

        let wipe = BatchAdjustment::percent(d("-150")).unwrap();
        assert_eq!(wipe.apply(d("10")).unwrap(), d("-5"));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let max = Decimal::new(rust_decimal::Decimal::MAX);
        let double = BatchAdjustment::percent(d("100")).unwrap();
        assert_eq!(
            double.apply(max),
            Err(PricingError::Overflow("batch adjustment"))
        );

        let plus = BatchAdjustment::amount(d("1")).unwrap();
        assert_eq!(plus.apply(max), Err(PricingError::Overflow("batch adjustment")));
    }
}
