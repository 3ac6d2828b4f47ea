//! Represents movements of money in and out of the account
use crate::amount::Amount;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One accepted deposit or withdraw, never changed after it is recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    date: NaiveDate,
    money: MoneyMove,
}

impl Movement {
    /// deposit of `amount` made on `date`
    pub fn deposit(date: NaiveDate, amount: Amount) -> Self {
        Self {
            date,
            money: MoneyMove::Deposit(amount),
        }
    }

    /// withdraw of `amount` made on `date`
    pub fn withdraw(date: NaiveDate, amount: Amount) -> Self {
        Self {
            date,
            money: MoneyMove::Withdraw(amount),
        }
    }

    /// calendar date of the movement
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// always positive, direction is given by [`Movement::is_deposit`]
    pub fn amount(&self) -> Decimal {
        match self.money {
            MoneyMove::Deposit(amount) | MoneyMove::Withdraw(amount) => amount.into(),
        }
    }

    /// `true` when the movement increased the balance
    pub fn is_deposit(&self) -> bool {
        matches!(self.money, MoneyMove::Deposit(_))
    }

    /// deposit made on `date`
    pub fn was_deposited_on(&self, date: NaiveDate) -> bool {
        self.is_deposit() && self.date == date
    }

    /// withdraw made on `date`
    pub fn was_withdrawn_on(&self, date: NaiveDate) -> bool {
        !self.is_deposit() && self.date == date
    }

    /// the money that moved
    pub fn money(&self) -> &MoneyMove {
        &self.money
    }
}

/// Money movement represent withdraw or deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyMove {
    /// increase balance
    Deposit(Amount),
    /// decrease balance
    Withdraw(Amount),
}
