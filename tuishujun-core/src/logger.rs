//! Tracing setup shared by the `run` and `lookup` subcommands.
//!
//! Every event goes to an append-mode log file. The long-running bot also tees to stdout; one-shot
//! commands that print their result to stdout keep logs in the file only.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::Writer,
    fmt::time::FormatTime,
    fmt::writer::{BoxMakeWriter, MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Where log lines are written besides the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Log file plus stdout.
    FileAndStdout,
    /// Log file only; stdout is left to the command's own output.
    FileOnly,
}

/// `YYYY-MM-DD HH:MM:SS` in local time.
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Opens `path` for appending, creating it and any missing parent directories.
pub fn open_log_file(path: impl AsRef<Path>) -> io::Result<Arc<File>> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Arc::new(file))
}

/// Installs the global subscriber.
///
/// Lines read `YYYY-MM-DD HH:MM:SS LEVEL target: message key=value ...`, without ANSI colors.
/// The filter comes from `RUST_LOG` and defaults to `info`, so load `.env` before calling this.
pub fn init_tracing(log_file_path: &str, output: LogOutput) -> anyhow::Result<()> {
    let file = open_log_file(log_file_path)?;

    let writer = match output {
        LogOutput::FileAndStdout => BoxMakeWriter::new(io::stdout.and(file)),
        LogOutput::FileOnly => BoxMakeWriter::new(file),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_timer(LocalTimestamp)
        .with_target(true)
        .with_thread_ids(false)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
