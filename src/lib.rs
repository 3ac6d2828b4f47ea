//! Wallet ledger: one account, its movements and the daily rules guarding them.

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod clock;
pub mod csv;
pub mod errors;
pub mod replay;

use rust_decimal::Decimal;

/// Maximum number of deposits accepted on one calendar date
pub const DAILY_DEPOSIT_LIMIT: usize = 3;
/// Maximum total amount that can be withdrawn on one calendar date
pub const DAILY_WITHDRAWAL_CEILING: Decimal = Decimal::ONE_THOUSAND;
