//! MerchLab CLI — validate and summary commands.
//!
//! Commands:
//! - `validate` — check a transaction CSV's header and parse every row
//! - `summary` — compute and print the ranked merchant growth table

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use merchlab_core::{
    apply_selection, compute_summary, load_transactions, FilterConfig, RankDirection,
    RankingConfig, Transaction,
};

#[derive(Parser)]
#[command(
    name = "merchlab",
    about = "MerchLab CLI — merchant growth metrics from transaction CSVs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a transaction CSV's header and parse every row.
    Validate {
        /// Path to the transaction CSV.
        data: PathBuf,
    },
    /// Compute and print the ranked merchant growth table.
    Summary {
        /// Path to the transaction CSV.
        data: PathBuf,

        /// Filter start date (YYYY-MM-DD). Defaults to the earliest
        /// transaction date in the file.
        #[arg(long)]
        start: Option<String>,

        /// Filter end date (YYYY-MM-DD). Defaults to the latest transaction
        /// date in the file.
        #[arg(long)]
        end: Option<String>,

        /// Keep only these categories (repeatable).
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Keep only these cities (repeatable).
        #[arg(long = "city")]
        cities: Vec<String>,

        /// Keep only these account statuses (repeatable).
        #[arg(long = "status")]
        statuses: Vec<String>,

        /// Rank from the bottom (lowest average QoQ growth first).
        #[arg(long, default_value_t = false)]
        bottom: bool,

        /// Number of merchants to show.
        #[arg(long, default_value_t = 10)]
        n: usize,

        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { data } => run_validate(&data),
        Commands::Summary {
            data,
            start,
            end,
            categories,
            cities,
            statuses,
            bottom,
            n,
            format,
        } => run_summary(
            &data, start, end, categories, cities, statuses, bottom, n, format,
        ),
    }
}

fn run_validate(data: &PathBuf) -> Result<()> {
    let transactions = load_transactions(data)
        .with_context(|| format!("validation failed for {}", data.display()))?;

    let merchants: HashSet<&str> = transactions
        .iter()
        .map(|tx| tx.merchant_id.as_str())
        .collect();

    println!("OK: {}", data.display());
    println!("Rows:      {}", transactions.len());
    println!("Merchants: {}", merchants.len());
    if let Some((min, max)) = date_range(&transactions) {
        println!("Dates:     {min} to {max}");
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_summary(
    data: &PathBuf,
    start: Option<String>,
    end: Option<String>,
    categories: Vec<String>,
    cities: Vec<String>,
    statuses: Vec<String>,
    bottom: bool,
    n: usize,
    format: OutputFormat,
) -> Result<()> {
    if n == 0 {
        bail!("--n must be at least 1");
    }

    let transactions =
        load_transactions(data).with_context(|| format!("failed to load {}", data.display()))?;

    let observed = date_range(&transactions);
    let start_date = match start {
        Some(s) => parse_date(&s)?,
        None => observed.map(|(min, _)| min).unwrap_or_default(),
    };
    let end_date = match end {
        Some(s) => parse_date(&s)?,
        None => observed.map(|(_, max)| max).unwrap_or_default(),
    };
    if end_date < start_date {
        bail!("--end {end_date} precedes --start {start_date}");
    }

    let filter = FilterConfig {
        start_date,
        end_date,
        categories,
        cities,
        statuses,
    };
    let ranking = RankingConfig {
        direction: if bottom {
            RankDirection::Bottom
        } else {
            RankDirection::Top
        },
        count: n,
    };

    let rows = compute_summary(&transactions, &filter, &ranking);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => print_table(&rows, &filter, &ranking),
    }
    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

fn date_range(transactions: &[Transaction]) -> Option<(NaiveDate, NaiveDate)> {
    let min = transactions.iter().map(|tx| tx.timestamp.date()).min()?;
    let max = transactions.iter().map(|tx| tx.timestamp.date()).max()?;
    Some((min, max))
}

fn print_table(
    rows: &[merchlab_core::MerchantSummary],
    filter: &FilterConfig,
    ranking: &RankingConfig,
) {
    println!(
        "{} {} merchants by avg QoQ growth, {} to {}",
        ranking.direction.label(),
        ranking.count,
        filter.start_date,
        filter.end_date
    );

    if rows.is_empty() {
        println!("(no merchants in range)");
        return;
    }

    // No chart here, so nothing is ever selected.
    let styled = apply_selection(rows, &HashSet::new());

    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10}",
        "Merchant", "Avg MoM", "Avg QoQ", "Avg YoY", "CAGR"
    );
    println!("{}", "-".repeat(56));
    for row in &styled {
        println!(
            "{:<12} {:>10} {:>10} {:>10} {:>10}",
            row.merchant_id.text, row.avg_mom.text, row.avg_qoq.text, row.avg_yoy.text,
            row.cagr.text
        );
    }
}
