use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use lms::console::controller::Console;
use lms::core::controller::AppState;
use lms::core::domain::Configuration;
use lms::persistence::flat_file::FlatFileStore;
use lms::utils::logs::setup_tracing;

const MAX_BORROW_PERIOD_DAYS: i64 = 3650;
const MAX_FINE_PER_DAY: i64 = 1_000_000;

/// Library catalog manager: books, members, loans and overdue fines.
#[derive(Parser, Debug)]
#[command(name = "library", version, about)]
struct Cli {
    /// Directory holding books.csv, members.csv and loans.csv
    #[arg(long, env = "LMS_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Days a book may be kept before fines start
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(0..=MAX_BORROW_PERIOD_DAYS))]
    borrow_period_days: i64,

    /// Fine charged for each overdue day
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i64).range(0..=MAX_FINE_PER_DAY))]
    fine_per_day: i64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn configuration(&self) -> Configuration {
        let mut config = Configuration::new(self.data_dir.clone());
        config.borrow_period_days = self.borrow_period_days;
        config.fine_per_day = self.fine_per_day;
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let config = cli.configuration();
    let store = FlatFileStore::new(&config).load().await
        .with_context(|| format!("failed to load library data from {}", config.data_dir.display()))?;

    let state = AppState::new(config, store);
    let mut console = Console::new(state, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    console.run().await.context("library session failed")?;
    Ok(())
}
