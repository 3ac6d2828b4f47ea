//! csv input/output format and functions

use chrono::NaiveDate;
use csv_async::{AsyncWriterBuilder, Terminator};
use futures::TryStreamExt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::Movement;

use tokio::{
    io::{AsyncRead, AsyncWrite},
    sync::mpsc::Sender,
};
use tokio_stream::{Stream, StreamExt};

// Allowed movement types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum MovementType {
    Deposit,
    Withdrawal,
}

/// One requested operation, amount is not validated yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct RawOperation {
    pub date: NaiveDate,
    pub r#type: MovementType,
    pub amount: Decimal,
}

/// take a reader and continuously deserialize operations from it into `sender`
pub async fn deserialize_operations_from_csv_reader<R: AsyncRead + Unpin + Send>(
    input: R,
    sender: Sender<RawOperation>,
) -> anyhow::Result<()> {
    let mut builder = csv_async::AsyncReaderBuilder::new();
    builder.trim(csv_async::Trim::All);

    let mut rdr = builder.create_deserializer(input);

    let _headers = rdr.headers().await?;

    let mut records = rdr.deserialize::<RawOperation>();
    while let Some(record) = TryStreamExt::try_next(&mut records).await? {
        sender.send(record).await?;
    }

    Ok(())
}

/// accepted movement together with balance right after it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct StatementLine {
    pub date: NaiveDate,
    pub r#type: MovementType,
    pub amount: Decimal,
    pub balance: Decimal,
}

impl StatementLine {
    /// describe `movement` that left the account at `balance`
    pub fn new(movement: &Movement, balance: Decimal) -> Self {
        let r#type = if movement.is_deposit() {
            MovementType::Deposit
        } else {
            MovementType::Withdrawal
        };
        Self {
            date: movement.date(),
            r#type,
            amount: movement.amount(),
            balance,
        }
    }
}

/// read lines from `in_stream` and save them into `wr`. Headers will be included
/// automatically. Terminator is `\r\n`
pub async fn write_statement(
    in_stream: impl Stream<Item = StatementLine> + Unpin,
    wr: impl AsyncWrite + Unpin,
) -> anyhow::Result<()> {
    let mut in_stream = in_stream;

    let mut builder = AsyncWriterBuilder::new();
    builder.terminator(Terminator::CRLF);

    let mut wr = builder.create_serializer(wr);

    while let Some(line) = in_stream.next().await {
        wr.serialize(line).await?;
    }

    wr.flush().await?;
    Ok(())
}
