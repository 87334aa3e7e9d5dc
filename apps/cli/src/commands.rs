//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use catalogforge_core::{PipelineConfig, PipelineReport, ProgressReporter, run_pipeline};
use catalogforge_kb::KnowledgeBase;
use catalogforge_shared::{
    AppConfig, RawProductRecord, TransformDefaults, init_config, load_config, load_config_from,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// CatalogForge — turn scraped product records into an import-ready catalog.
#[derive(Parser)]
#[command(
    name = "catalogforge",
    version,
    about = "Normalize and enrich scraped storefront product records.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run the pipeline: raw records in, enriched catalog out.
    Run {
        /// Path to the raw-records JSON document.
        #[arg(short, long)]
        input: PathBuf,

        /// Path for the enriched catalog JSON document.
        #[arg(short, long)]
        output: PathBuf,

        /// Explicit config file (defaults to ~/.catalogforge/catalogforge.toml).
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "catalogforge=info",
        1 => "catalogforge=debug",
        _ => "catalogforge=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run {
            input,
            output,
            config,
        } => cmd_run(&input, &output, config.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

fn cmd_run(input: &Path, output: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let records = read_raw_records(input)?;
    info!(records = records.len(), input = %input.display(), "loaded raw records");

    let pipeline_config = PipelineConfig {
        defaults: TransformDefaults::from(&config),
        kb: KnowledgeBase::curated(),
    };

    let reporter = CliProgress::new();
    let report = run_pipeline(&pipeline_config, &records, &reporter);

    write_products(output, &report)?;
    print_summary(&report, output);

    Ok(())
}

/// Read and parse the raw-records document.
fn read_raw_records(path: &Path) -> Result<Vec<RawProductRecord>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| eyre!("cannot read input '{}': {e}", path.display()))?;

    let records: Vec<RawProductRecord> = serde_json::from_str(&content)
        .map_err(|e| eyre!("cannot parse input '{}': {e}", path.display()))?;

    Ok(records)
}

/// Write the enriched catalog document (pretty-printed JSON array).
fn write_products(path: &Path, report: &PipelineReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                eyre!("cannot create output directory '{}': {e}", parent.display())
            })?;
        }
    }

    let json = serde_json::to_string_pretty(&report.products)?;
    std::fs::write(path, json)
        .map_err(|e| eyre!("cannot write output '{}': {e}", path.display()))?;

    Ok(())
}

/// Print the run summary: per-product lines, totals, and any failures.
fn print_summary(report: &PipelineReport, output: &Path) {
    println!();
    println!("  Catalog run complete");
    println!("  ------------------------------------------------");

    for product in &report.products {
        let amounts: Vec<i64> = product
            .variants
            .iter()
            .filter_map(|v| v.prices.first().map(|p| p.amount))
            .collect();

        let price_range = match (amounts.iter().min(), amounts.iter().max()) {
            (Some(min), Some(max)) if min == max => format!("${:.2}", *min as f64 / 100.0),
            (Some(min), Some(max)) => {
                format!("${:.2} - ${:.2}", *min as f64 / 100.0, *max as f64 / 100.0)
            }
            _ => "-".to_string(),
        };

        let categories: Vec<&str> = product.categories.iter().map(String::as_str).collect();

        println!("  {}:", product.title);
        println!("    Handle:     {}", product.handle);
        println!("    Variants:   {}", product.variants.len());
        println!("    Price:      {price_range}");
        println!("    Categories: {}", categories.join(", "));
    }

    if !report.failures.is_empty() {
        println!();
        println!("  Dropped records:");
        for failure in &report.failures {
            println!("    {} — {}", failure.identifier, failure.reason);
        }
    }

    println!();
    println!("  Products:  {}", report.products.len());
    println!("  Variants:  {}", report.total_variants());
    println!("  Dropped:   {}", report.failures.len());
    println!("  Output:    {}", output.display());
    println!("  Time:      {:.1}s", report.elapsed.as_secs_f64());
    println!();
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn record_processed(&self, identifier: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Processing [{current}/{total}] {identifier}"));
    }

    fn done(&self, _report: &PipelineReport) {
        self.spinner.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
