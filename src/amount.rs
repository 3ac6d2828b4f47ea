//! Protect against zero or negative amounts for deposits and withdraws.

use std::{borrow::Borrow, ops::Deref};

use rust_decimal::Decimal;
use thiserror::Error;

/// Represent strictly positive amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    /// Create amount from integer mantissa and scale, `Amount::new(1050, 2)` is `10.50`.
    ///
    /// `scale` above 28 is not representable and is reported as [`AmountErr::Scale`].
    pub fn new(num: u64, scale: u32) -> Result<Amount, AmountErr> {
        let value = Decimal::try_from_i128_with_scale(num.into(), scale)
            .map_err(|_| AmountErr::Scale(scale))?;
        Ok(value.try_into()?)
    }
}

/// Errors of [`Amount::new`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmountErr {
    /// zero mantissa
    #[error(transparent)]
    NonPositive(#[from] NonPositiveAmountErr),
    /// scale is larger than 28
    #[error("scale {0} is out of range")]
    Scale(u32),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}: amount must be a positive value")]
/// represent error when operation want to move zero or negative amount of money
pub struct NonPositiveAmountErr(pub Decimal);

impl TryFrom<Decimal> for Amount {
    type Error = NonPositiveAmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(NonPositiveAmountErr(value))
        }
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}
