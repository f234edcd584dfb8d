use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use balance_transfer_engine::config::{Config, USAGE};
use balance_transfer_engine::engine::AsyncEngine;
use balance_transfer_engine::notifications::TracingNotificationSink;
use balance_transfer_engine::storage::AccountStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    let storage = Arc::new(AccountStorage::new());
    let engine = AsyncEngine::new(storage.clone(), Arc::new(TracingNotificationSink))
        .with_workers(config.workers);

    let timer = Instant::now();
    let summary = engine.run(&config.accounts_path, &config.transfers_path).await?;
    let duration = timer.elapsed();

    info!("Processed {} transfers on {} workers in: {duration:?}", summary.total(), config.workers);
    info!(
        completed = summary.completed,
        insufficient_balance = summary.insufficient_balance,
        not_found = summary.not_found,
        invalid = summary.invalid,
        overflow = summary.overflow,
        "Transfer summary"
    );

    if let Some(total) = storage.total_balance() {
        info!("Total balance across {} accounts: {total}", storage.len());
    }

    write_results_to_stdout(&storage)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Because we are doing stdout redirection, we will need to utilize stderr to display logging
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(storage: &AccountStorage) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "account,balance")?;

    for (account_id, balance) in storage.snapshot() {
        writeln!(output, "{account_id},{balance}")?;
    }

    output.flush()?;

    Ok(())
}
