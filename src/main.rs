//! # monedero
//! Application replays wallet operations from input csv file and prints the statement of
//! accepted movements to output. Refused operations are reported on stderr.
//!
//! ## Usage
//! `monedero <operations.csv> [opening_balance]`
//!
//! ## Input format
//! csv with columns `date`, `type`, `amount`
//!
//! ```csv
//! date,type,amount
//! 2024-03-01,deposit,1500
//! 2024-03-01,withdrawal,200.50
//! ```

#![deny(missing_docs)]

use anyhow::Context;
use monedero::{
    account::Account,
    csv::{self, RawOperation},
    replay,
};
use rust_decimal::Decimal;
use simple_logger::SimpleLogger;
use std::env;
use tokio::{
    io::{stdout, BufReader},
    spawn,
    sync::mpsc::{channel, Sender},
};

async fn read_ops_from_file(filename: String, sender: Sender<RawOperation>) -> anyhow::Result<()> {
    let f = tokio::fs::File::open(filename)
        .await
        .context("access input file")?;

    let bf = BufReader::new(f);
    csv::deserialize_operations_from_csv_reader(bf, sender)
        .await
        .context("improper content of file")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()?;

    // CLI handle
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        return Err(anyhow::Error::msg(
            "expected path to csv file and optional opening balance",
        ));
    }
    let opening = match args.get(2) {
        Some(raw) => raw
            .parse::<Decimal>()
            .context("opening balance is not a decimal number")?,
        None => Decimal::ZERO,
    };
    log::debug!("replaying {} with opening balance {opening}", args[1]);

    // read data from csv file
    let (tx_raw_ops, rx_raw_ops) = channel(8192);
    let task_read_csv = spawn(read_ops_from_file(args[1].clone(), tx_raw_ops));

    // single consumer owns the wallet
    let outcome = replay::replay(rx_raw_ops, opening).await;
    task_read_csv.await??;

    log::info!(
        "accepted {} operations, rejected {}, final balance {}",
        outcome.statement.len(),
        outcome.rejected,
        outcome.wallet.balance()
    );

    csv::write_statement(tokio_stream::iter(outcome.statement), stdout())
        .await
        .context("failed to save output")?;

    Ok(())
}
