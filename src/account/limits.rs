//! Daily rules a wallet enforces
use crate::{DAILY_DEPOSIT_LIMIT, DAILY_WITHDRAWAL_CEILING};
use rust_decimal::Decimal;

/// Daily rules applied by [`super::Wallet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// deposits accepted per calendar date
    pub daily_deposits: usize,
    /// total amount that can be withdrawn per calendar date
    pub daily_withdrawal_ceiling: Decimal,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            daily_deposits: DAILY_DEPOSIT_LIMIT,
            daily_withdrawal_ceiling: DAILY_WITHDRAWAL_CEILING,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Limits;
    use rust_decimal::Decimal;

    #[test]
    fn defaults_are_three_deposits_and_one_thousand() {
        let l = Limits::default();
        assert_eq!(l.daily_deposits, 3);
        assert_eq!(l.daily_withdrawal_ceiling, Decimal::new(1000, 0));
    }
}
