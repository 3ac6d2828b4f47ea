//! Account traits and structs
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub(crate) mod balance;
pub(crate) mod limits;
pub(crate) mod movements;
pub(crate) mod wallet;

pub use limits::Limits;
pub use movements::{MoneyMove, Movement};
pub use wallet::Wallet;

/// Represent read only view of balance and movement history
pub trait Account {
    /// current balance
    fn balance(&self) -> Decimal;
    /// every accepted movement, oldest first
    fn movements(&self) -> &[Movement];

    /// total amount withdrawn on `date`, saturates at [`Decimal::MAX`]
    fn amount_withdrawn_on(&self, date: NaiveDate) -> Decimal {
        self.movements()
            .iter()
            .filter(|m| m.was_withdrawn_on(date))
            .map(Movement::amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// number of deposits made on `date`
    fn deposits_on(&self, date: NaiveDate) -> usize {
        self.movements()
            .iter()
            .filter(|m| m.was_deposited_on(date))
            .count()
    }

    /// deposits minus withdraws over the whole history.
    ///
    /// Every step saturates at the [`Decimal`] bounds, only a seeded history can reach them.
    fn net_movements(&self) -> Decimal {
        self.movements().iter().fold(Decimal::ZERO, |net, m| {
            if m.is_deposit() {
                net.saturating_add(m.amount())
            } else {
                net.saturating_sub(m.amount())
            }
        })
    }
}

/// Privileged operations that skip every rule of [`Wallet::deposit`] and [`Wallet::withdraw`].
///
/// After any of these the balance no longer has to match the movement history.
/// Meant for seeding test fixtures and migrations only.
pub trait UncheckedAdmin {
    /// overwrite balance without recording a movement
    fn set_balance_unchecked(&mut self, balance: Decimal);
    /// replace the whole movement history, balance stays as it is
    fn set_movements_unchecked(&mut self, movements: Vec<Movement>);
}
