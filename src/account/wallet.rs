use super::balance::Balance;
use super::limits::Limits;
use super::movements::Movement;
use super::{Account, UncheckedAdmin};
use crate::{
    amount::Amount,
    clock::{Clock, SystemClock},
    errors::AccountErr,
};
use rust_decimal::Decimal;

/// Wallet balance and movement history, guarded by the daily [`Limits`]
#[derive(Debug, Clone)]
pub struct Wallet<C = SystemClock> {
    clock: C,
    limits: Limits,
    balance: Balance,
    movements: Vec<Movement>,
}

impl<C: Clock> Wallet<C> {
    /// Create new empty wallet that reads today's date from `clock`
    pub fn new(clock: C) -> Self {
        Self::with_opening_balance(clock, Decimal::ZERO)
    }

    /// Create wallet that starts with `opening` and no movements
    pub fn with_opening_balance(clock: C, opening: Decimal) -> Self {
        Self {
            clock,
            limits: Limits::default(),
            balance: Balance::new(opening),
            movements: Vec::new(),
        }
    }

    /// replace default daily limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// clock used for the daily rules
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// limits currently enforced
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Put `amount` into the wallet.
    ///
    /// Checked in order: amount is positive, today's deposit count is below the limit, the new
    /// balance is representable. On error nothing is changed.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        let amount = Amount::try_from(amount)?;
        let today = self.clock.today();

        if self.deposits_on(today) >= self.limits.daily_deposits {
            return Err(AccountErr::DailyDepositLimitExceeded {
                limit: self.limits.daily_deposits,
            });
        }

        let movement = Movement::deposit(today, amount);
        let next = self.balance.after(movement.money())?;
        self.record(movement, next);
        Ok(())
    }

    /// Take `amount` out of the wallet.
    ///
    /// Checked in order: amount is positive, balance covers it, today's withdrawals stay
    /// within the ceiling. On error nothing is changed.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        let amount = Amount::try_from(amount)?;
        let today = self.clock.today();

        let movement = Movement::withdraw(today, amount);
        let next = self.balance.after(movement.money())?;

        let remaining = self.remaining_withdrawal_on(today);
        if *amount > remaining {
            return Err(AccountErr::DailyWithdrawalLimitExceeded {
                ceiling: self.limits.daily_withdrawal_ceiling,
                remaining,
            });
        }

        self.record(movement, next);
        Ok(())
    }

    /// How much more can be withdrawn today. Negative when the history was seeded past the
    /// ceiling.
    pub fn remaining_withdrawal_today(&self) -> Decimal {
        self.remaining_withdrawal_on(self.clock.today())
    }

    fn remaining_withdrawal_on(&self, date: chrono::NaiveDate) -> Decimal {
        self.limits
            .daily_withdrawal_ceiling
            .saturating_sub(self.amount_withdrawn_on(date))
    }

    fn record(&mut self, movement: Movement, balance: Decimal) {
        self.balance.overwrite(balance);
        self.movements.push(movement);
    }
}

impl<C> Account for Wallet<C> {
    fn balance(&self) -> Decimal {
        self.balance.available()
    }

    fn movements(&self) -> &[Movement] {
        &self.movements
    }
}

impl<C> UncheckedAdmin for Wallet<C> {
    fn set_balance_unchecked(&mut self, balance: Decimal) {
        self.balance.overwrite(balance);
    }

    fn set_movements_unchecked(&mut self, movements: Vec<Movement>) {
        self.movements = movements;
    }
}
