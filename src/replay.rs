//! Apply a stream of dated operations to one wallet.
//!
//! Every operation moves the wallet clock to its own date first, so daily rules are evaluated
//! against the date written in the input and not against the machine date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::sync::mpsc::Receiver;

use crate::{
    account::{Account, Wallet},
    clock::ManualClock,
    csv::{MovementType, RawOperation, StatementLine},
    errors::AccountErr,
};

/// Result of [`replay`]
#[derive(Debug)]
pub struct ReplayOutcome {
    /// wallet after the last operation
    pub wallet: Wallet<ManualClock>,
    /// one line per accepted operation, in input order
    pub statement: Vec<StatementLine>,
    /// number of operations the wallet refused
    pub rejected: usize,
}

/// Apply one operation to `wallet` as if it happened on its own date
pub fn apply_operation(
    wallet: &mut Wallet<ManualClock>,
    op: &RawOperation,
) -> Result<(), AccountErr> {
    wallet.clock().set(op.date);
    match op.r#type {
        MovementType::Deposit => wallet.deposit(op.amount),
        MovementType::Withdrawal => wallet.withdraw(op.amount),
    }
}

/// Consume every operation from `input` against a wallet opened with `opening` balance.
///
/// Refused operations are logged and skipped, the wallet stays as it was before them.
pub async fn replay(mut input: Receiver<RawOperation>, opening: Decimal) -> ReplayOutcome {
    let mut wallet = Wallet::with_opening_balance(ManualClock::new(NaiveDate::MIN), opening);
    let mut statement = Vec::new();
    let mut rejected = 0;

    while let Some(op) = input.recv().await {
        match apply_operation(&mut wallet, &op) {
            Ok(()) => {
                // accepted operation always appends exactly one movement
                if let Some(movement) = wallet.movements().last() {
                    log::debug!("accepted {op:?}, balance: {}", wallet.balance());
                    statement.push(StatementLine::new(movement, wallet.balance()));
                }
            }
            Err(e) => {
                log::warn!("rejected {:?} {} on {}: {e}", op.r#type, op.amount, op.date);
                rejected += 1;
            }
        }
    }

    ReplayOutcome {
        wallet,
        statement,
        rejected,
    }
}
