// CLI module - User-facing command-line interface

pub mod output;

use crate::config::{
    default_max_pages, default_max_retries, default_timeout, ExportConfig, DEFAULT_BASE_URL,
    DEFAULT_OUTPUT,
};
use crate::error::{ExportError, Result};
use crate::export;
use clap::{Args, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// divio-logs - Export environment logs from the Divio Cloud API
#[derive(Parser)]
#[command(name = "divio-logs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Read all settings from a TOML or JSON file instead of arguments
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with_all = ["from_ts", "to_ts", "env_slug", "app_uuid", "api_token"]
    )]
    config: Option<PathBuf>,

    /// Start of the range, YYYY-MM-DDThh:mm
    #[arg(required_unless_present = "config")]
    from_ts: Option<String>,

    /// End of the range, YYYY-MM-DDThh:mm
    #[arg(required_unless_present = "config")]
    to_ts: Option<String>,

    /// Environment slug, for example "live" or "test"
    #[arg(required_unless_present = "config")]
    env_slug: Option<String>,

    /// Application UUID
    #[arg(required_unless_present = "config")]
    app_uuid: Option<String>,

    /// API token
    #[arg(required_unless_present = "config")]
    api_token: Option<String>,

    #[command(flatten)]
    options: ExportOptions,
}

/// Settings that only apply when the run parameters come from arguments
#[derive(Args)]
struct ExportOptions {
    /// File to write the entries to (truncated on every run)
    #[arg(short, long, default_value = DEFAULT_OUTPUT, conflicts_with = "config")]
    output: PathBuf,

    /// API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL, conflicts_with = "config")]
    base_url: String,

    /// Abort after fetching this many pages
    #[arg(long, default_value_t = default_max_pages(), conflicts_with = "config")]
    max_pages: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = default_timeout(), conflicts_with = "config")]
    timeout: u64,

    /// Retries for transient network failures
    #[arg(long, default_value_t = default_max_retries(), conflicts_with = "config")]
    retries: u32,

    /// Do not echo entries to stdout
    #[arg(short, long, conflicts_with = "config")]
    quiet: bool,
}

impl Cli {
    /// Run the CLI application
    pub async fn run() -> Result<()> {
        let cli = Cli::parse();
        init_tracing(cli.verbose);
        cli.execute().await
    }

    /// Execute the parsed command
    async fn execute(&self) -> Result<()> {
        let config = self.build_config()?;
        let summary = export::run(&config).await?;
        output::print_summary(&summary);
        Ok(())
    }

    /// Build an export configuration from the CLI arguments
    fn build_config(&self) -> Result<ExportConfig> {
        if let Some(path) = &self.config {
            let config = ExportConfig::from_file(path)?;
            output::print_info(&format!(
                "Exporting '{}' logs from {} to {}",
                config.env_slug, config.from_ts, config.to_ts
            ));
            return Ok(config);
        }

        let mut config = ExportConfig::new(
            required(&self.from_ts, "from_ts")?,
            required(&self.to_ts, "to_ts")?,
            required(&self.env_slug, "env_slug")?,
            required(&self.app_uuid, "app_uuid")?,
            required(&self.api_token, "api_token")?,
        );
        config.output = self.options.output.clone();
        config.base_url = self.options.base_url.clone();
        config.max_pages = self.options.max_pages;
        config.timeout_secs = self.options.timeout;
        config.max_retries = self.options.retries;
        config.quiet = self.options.quiet;
        config.validate()?;
        Ok(config)
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| ExportError::MissingConfigField(field.to_string()))
}

/// Install a stderr subscriber; stdout is reserved for exported entries
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hyper=off,reqwest=warn,{}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
