use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use crate::api::{self, ApiResponse, Components};
use crate::config::ScrapeConfig;
use crate::log::ActivityLogger;
use crate::tools::adapter::select_adapter;
use crate::tools::export::{rows_from_records, to_csv};
use crate::tools::paginate::{ScrapeOutcome, Termination};
use crate::tools::types::ReviewRecord;

pub const EMPTY_RESULT_MESSAGE: &str =
    "No reviews found or site blocked the request. Try another URL or lower max reviews.";

#[derive(Parser)]
#[command(name = "revscrape", version, about = "Scrape product reviews into one canonical record stream")]
pub struct Cli {
    /// Verbosity (-v debug, -vv trace); RUST_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape reviews from a product or review page URL
    Scrape(ScrapeArgs),
    /// Show which adapter a URL maps to, without fetching
    Adapter { url: String },
    /// Show the activity log, most recent first
    Logs(LogsArgs),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
}

#[derive(Args)]
struct ScrapeArgs {
    url: String,
    /// Maximum number of reviews to collect
    #[arg(long = "max", default_value_t = 300)]
    max: usize,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Only print the first N reviews (totals still cover all of them)
    #[arg(long)]
    sample: Option<usize>,
    /// JSON config file (defaults to the per-user config dir)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop after fewer pages (never more than 25)
    #[arg(long)]
    page_limit: Option<u32>,
    #[arg(long)]
    delay_ms: Option<u64>,
    #[arg(long)]
    timeout_ms: Option<u64>,
    /// Seed for reproducible identity rotation
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct LogsArgs {
    #[arg(long)]
    domain: Option<String>,
    #[arg(long)]
    errors: bool,
}

#[derive(Serialize)]
struct ScrapeReport<'a> {
    url: &'a str,
    adapter: &'static str,
    termination: Termination,
    pages_fetched: u32,
    total: usize,
    reviews: &'a [ReviewRecord],
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Scrape(args) => scrape_cmd(args),
        Command::Adapter { url } => {
            print_json(&ApiResponse::ok(api::describe_adapter(&url)))?;
            Ok(())
        }
        Command::Logs(LogsArgs { domain, errors }) => {
            let logger = ActivityLogger::new()?;
            print_json(&ApiResponse::ok(logger.read_logs(domain.as_deref(), errors)?))?;
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    // Diagnostics go to stderr so stdout stays machine-readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn scrape_cmd(args: ScrapeArgs) -> anyhow::Result<()> {
    let mut config = ScrapeConfig::load(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    let components = Components::from_config(&config)?;
    let outcome = crate::runtime::block_on(api::scrape_with_components(&args.url, args.max, &components));

    if outcome.is_empty() {
        let msg = format!("{EMPTY_RESULT_MESSAGE} ({})", outcome.termination);
        return match args.format {
            Format::Json => print_json(&ApiResponse::<()>::err(msg)),
            Format::Csv => {
                eprintln!("{msg}");
                Ok(())
            }
        };
    }

    let shown = sample(&outcome, args.sample);
    match args.format {
        Format::Json => print_json(&ApiResponse::ok(ScrapeReport {
            url: &args.url,
            adapter: select_adapter(&args.url).name(),
            termination: outcome.termination,
            pages_fetched: outcome.pages_fetched,
            total: outcome.records.len(),
            reviews: shown,
        })),
        Format::Csv => {
            print!("{}", to_csv(&rows_from_records(shown))?);
            Ok(())
        }
    }
}

fn apply_overrides(config: &mut ScrapeConfig, args: &ScrapeArgs) {
    if let Some(v) = args.page_limit {
        config.page_limit = v;
    }
    if let Some(v) = args.delay_ms {
        config.politeness_delay_ms = v;
    }
    if let Some(v) = args.timeout_ms {
        config.timeout_ms = v;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
}

fn sample(outcome: &ScrapeOutcome, n: Option<usize>) -> &[ReviewRecord] {
    let records = outcome.records.as_slice();
    match n {
        Some(n) => &records[..n.min(records.len())],
        None => records,
    }
}

fn print_json<T: Serialize>(val: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}
