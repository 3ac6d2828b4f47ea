//! Current balance and the arithmetic of moving money in and out of it
use super::movements::MoneyMove;
use crate::errors::BalanceErr;
use rust_decimal::Decimal;

/// Represents current account balance
#[derive(Debug, Clone)]
pub struct Balance {
    available: Decimal,
}

impl Balance {
    pub fn new(available: Decimal) -> Self {
        Self { available }
    }

    /// Balance after `money` would be applied, nothing is changed.
    ///
    /// A withdraw that does not fit into the representable range counts as not covered.
    pub fn after(&self, money: &MoneyMove) -> Result<Decimal, BalanceErr> {
        match money {
            MoneyMove::Deposit(amount) => self
                .available
                .checked_add(**amount)
                .ok_or(BalanceErr::Overflow),
            MoneyMove::Withdraw(amount) => match self.available.checked_sub(**amount) {
                Some(next) if next >= Decimal::ZERO => Ok(next),
                _ => Err(BalanceErr::NotEnoughAvailableFunds {
                    available: self.available,
                }),
            },
        }
    }

    // bypasses every rule, see `UncheckedAdmin`
    pub fn overwrite(&mut self, available: Decimal) {
        self.available = available;
    }

    pub fn available(&self) -> Decimal {
        self.available
    }
}
