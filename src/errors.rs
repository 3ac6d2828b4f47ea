//! Possible errors

use crate::amount::NonPositiveAmountErr;
use rust_decimal::Decimal;
use thiserror::Error;

/// Group errors for account balance
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceErr {
    #[error("not enough funds available for this operation, balance: {available}")]
    NotEnoughAvailableFunds { available: Decimal },
    /// new balance is larger than [`Decimal::MAX`]
    #[error("balance would exceed the largest representable amount")]
    Overflow,
}

/// Every reason an account can refuse a deposit or a withdraw.
///
/// A refused operation never changes the account.
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountErr {
    #[error("amount was not positive")]
    NonPositiveAmount(#[from] NonPositiveAmountErr),
    #[error("already made {limit} deposits today")]
    DailyDepositLimitExceeded { limit: usize },
    #[error("insufficient balance")]
    InsufficientBalance(BalanceErr),
    #[error("cannot withdraw more than {ceiling} per day, remaining today: {remaining}")]
    DailyWithdrawalLimitExceeded { ceiling: Decimal, remaining: Decimal },
    /// deposit would push the balance past [`Decimal::MAX`]
    #[error("balance overflow")]
    BalanceOverflow,
}

impl From<BalanceErr> for AccountErr {
    fn from(e: BalanceErr) -> Self {
        match e {
            BalanceErr::Overflow => AccountErr::BalanceOverflow,
            e @ BalanceErr::NotEnoughAvailableFunds { .. } => AccountErr::InsufficientBalance(e),
        }
    }
}
