//! Tracing setup: stderr and the log file share the same fmt layer (level, target, all fields).
//! Stdout stays reserved for rendered views and prompts.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Installs the global tracing subscriber.
///
/// Output is teed to stderr and `log_file_path` (opened in append mode; the
/// parent directory is created if needed). Level comes from `RUST_LOG`,
/// defaulting to `info`. Load `.env` before calling this or `RUST_LOG` from
/// that file is ignored.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    let file = Arc::new(file);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    use tracing_subscriber::fmt::writer::MakeWriterExt;
    let writer = io::stderr.and(file);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("storefront.log");
        let path_str = path.to_str().unwrap();

        init_tracing(path_str).unwrap();
        tracing::warn!("logger ready");

        let logged = std::fs::read_to_string(&path).unwrap();
        assert!(logged.contains("logger ready"));
        assert!(logged.contains("WARN"));
        assert!(init_tracing(path_str).is_err());
    }
}
