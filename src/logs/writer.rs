use crate::error::{ExportError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs::File as TokioFile;
use tokio::io::AsyncWriteExt;

/// LogWriter writes exported entries to the output file and echoes them to stdout
pub struct LogWriter {
    /// Path to the output file
    path: PathBuf,
    /// Async file handle, held open for the whole export
    file: TokioFile,
    /// Where entries are echoed, usually stdout
    console: Option<Box<dyn Write + Send>>,
    /// Number of entries written so far
    lines: usize,
}

impl LogWriter {
    /// Create the output file, truncating any previous export
    ///
    /// # Arguments
    /// * `path` - File the entries are written to
    /// * `echo` - Print each entry to stdout as well
    ///
    /// # Returns
    /// * `Ok(LogWriter)` - Successfully created the output file
    /// * `Err(ExportError)` - Failed to create the file
    pub async fn create(path: &Path, echo: bool) -> Result<Self> {
        let console: Option<Box<dyn Write + Send>> = if echo {
            Some(Box::new(std::io::stdout()))
        } else {
            None
        };
        Self::with_console(path, console).await
    }

    /// Create the output file and echo entries to `console` instead of stdout
    pub async fn with_console(path: &Path, console: Option<Box<dyn Write + Send>>) -> Result<Self> {
        let file = TokioFile::create(path).await.map_err(|e| {
            ExportError::LogFileError(format!("{}: {}", path.display(), e))
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            console,
            lines: 0,
        })
    }

    /// Write one formatted entry
    pub async fn write_entry(&mut self, entry: &str) -> Result<()> {
        // A closed stdout (e.g. piped into `head`) surfaces as an error here
        if let Some(console) = self.console.as_mut() {
            console.write_all(entry.as_bytes())?;
        }

        self.file.write_all(entry.as_bytes()).await?;
        self.lines += 1;

        Ok(())
    }

    /// Flush pending writes so that everything written so far is on disk
    pub async fn flush(&mut self) -> Result<()> {
        if let Some(console) = self.console.as_mut() {
            console.flush()?;
        }
        self.file.flush().await?;
        Ok(())
    }

    /// Get the path to the output file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the number of entries written
    pub fn lines(&self) -> usize {
        self.lines
    }
}
