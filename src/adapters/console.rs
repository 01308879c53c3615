use crate::core::{RankedResult, ResultView};
use crate::render::{render, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

/// Prints rendered results to a writer, stdout by default.
pub struct ConsoleView {
    format: OutputFormat,
    prefix: String,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleView {
    pub fn new(format: OutputFormat, prefix: impl Into<String>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            format,
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    pub fn stdout(format: OutputFormat, prefix: impl Into<String>) -> Self {
        Self::new(format, prefix, Box::new(std::io::stdout()))
    }

    fn write(&self, text: &str) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl ResultView for ConsoleView {
    async fn show(&self, query: &str, results: &[RankedResult]) -> Result<()> {
        tracing::debug!("Showing {} results for {:?}", results.len(), query);
        let mut rendered = render(self.format, results, &self.prefix)?;
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        self.write(&rendered)
    }

    async fn dismiss(&self) -> Result<()> {
        tracing::debug!("Results dismissed");
        Ok(())
    }
}
