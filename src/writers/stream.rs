//! Writer for any byte stream: stdout, stderr, files

use crate::core::{LogEntry, Result, Writer, WriterCore, WriterOptions};
#[cfg(feature = "console")]
use colored::Colorize;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes one formatted line per accepted entry
///
/// # Example
///
/// ```no_run
/// use rust_log_bridge::prelude::*;
///
/// let writer = StreamWriter::open("/var/log/app.log")?
///     .with_formatter(JsonFormatter::new());
/// let logger = Logger::builder().writer(writer).build();
/// logger.info("service started")?;
/// # Ok::<(), LoggerError>(())
/// ```
pub struct StreamWriter {
    core: WriterCore,
    stream: Box<dyn Write + Send>,
    name: &'static str,
    #[cfg(feature = "console")]
    use_colors: bool,
}

impl StreamWriter {
    pub fn new(stream: impl Write + Send + 'static) -> Self {
        Self::named(Box::new(stream), "stream")
    }

    pub fn with_options(stream: impl Write + Send + 'static, options: WriterOptions) -> Result<Self> {
        let mut writer = Self::new(stream);
        writer.core = WriterCore::from_options("StreamWriter", options)?;
        Ok(writer)
    }

    pub fn stdout() -> Self {
        Self::named(Box::new(io::stdout()), "stdout")
    }

    pub fn stderr() -> Self {
        Self::named(Box::new(io::stderr()), "stderr")
    }

    /// Append to `path`, creating it if missing
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::named(Box::new(BufWriter::new(file)), "file"))
    }

    fn named(stream: Box<dyn Write + Send>, name: &'static str) -> Self {
        Self {
            core: WriterCore::new(),
            stream,
            name,
            #[cfg(feature = "console")]
            use_colors: false,
        }
    }

    #[must_use]
    pub fn with_formatter<F: crate::core::Formatter + 'static>(mut self, formatter: F) -> Self {
        self.core.set_formatter(Box::new(formatter));
        self
    }

    /// Colour each line by severity
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[cfg(feature = "console")]
    fn render(&self, entry: &LogEntry) -> String {
        let line = self.core.format(entry);
        if self.use_colors {
            line.color(entry.level().color_code()).to_string()
        } else {
            line
        }
    }

    #[cfg(not(feature = "console"))]
    fn render(&self, entry: &LogEntry) -> String {
        self.core.format(entry)
    }
}

impl Writer for StreamWriter {
    fn core(&self) -> &WriterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WriterCore {
        &mut self.core
    }

    fn write(&mut self, entry: &LogEntry) -> Result<()> {
        if !self.core.accepts(entry) {
            return Ok(());
        }

        let mut line = self.render(entry);
        line.push('\n');
        self.stream.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stream.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }
}

impl Drop for StreamWriter {
    fn drop(&mut self) {
        let _ = self.stream.flush();
    }
}
