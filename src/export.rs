// Export pipeline: resolve environment, walk log pages, write entries

use crate::api::{resolve_environment, ApiClient};
use crate::config::ExportConfig;
use crate::error::Result;
use crate::logs::{format_entry, LogPaginator, LogWriter};
use std::path::PathBuf;
use tracing::info;

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// UUID the environment slug resolved to
    pub env_uuid: String,
    /// Number of pages fetched
    pub pages: usize,
    /// Number of entries written
    pub records: usize,
    /// File the entries were written to
    pub output: PathBuf,
}

/// Totals returned by [`export_logs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    pub pages: usize,
    pub records: usize,
}

/// Fetch every page of logs for `env_uuid` in `[from_ts, to_ts]` and write them.
///
/// Pages are walked from the most recent one backwards; the records of each
/// page are written oldest first. The writer is flushed after every page so a
/// failure leaves all completed pages on disk.
pub async fn export_logs(
    client: &ApiClient,
    env_uuid: &str,
    from_ts: &str,
    to_ts: &str,
    writer: &mut LogWriter,
    max_pages: usize,
) -> Result<PageStats> {
    let start_url = client.logs_url(env_uuid, from_ts, to_ts)?;
    let mut paginator = LogPaginator::new(client, start_url.as_str(), max_pages);
    let mut records = 0;

    while let Some(page) = paginator.next_page().await? {
        for record in page.results.iter().rev() {
            writer.write_entry(&format_entry(record)).await?;
            records += 1;
        }
        writer.flush().await?;
    }

    Ok(PageStats {
        pages: paginator.pages_fetched(),
        records,
    })
}

/// Run a complete export as described by `config`.
///
/// The output file is only created once the environment has been resolved,
/// so a bad slug leaves any earlier export untouched.
pub async fn run(config: &ExportConfig) -> Result<ExportSummary> {
    config.validate()?;

    let client = ApiClient::from_config(config)?;
    let env_uuid = resolve_environment(&client, &config.app_uuid, &config.env_slug).await?;

    let mut writer = LogWriter::create(&config.output, !config.quiet).await?;
    let stats = export_logs(
        &client,
        &env_uuid,
        &config.from_ts,
        &config.to_ts,
        &mut writer,
        config.max_pages,
    )
    .await?;
    writer.flush().await?;

    info!(
        "Exported {} records from {} pages to {}",
        stats.records,
        stats.pages,
        writer.path().display()
    );

    Ok(ExportSummary {
        env_uuid,
        pages: stats.pages,
        records: stats.records,
        output: writer.path().to_path_buf(),
    })
}
