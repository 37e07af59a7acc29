// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Installs the global `tracing` subscriber: a console layer (text or JSON)
//! and, with the `file-logging` feature, a JSON file in a timestamped run
//! folder:
//!
//! ```text
//! ./logs/
//!   └── run_20250101_120000/
//!       └── train-length.log
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::parse_debug_flags;
use crate::config::{LogFormat, LoggingOptions};

/// Name of the per-run log file
pub const LOG_FILE_NAME: &str = "train-length.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps background log writers alive; logs are flushed when it drops
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
    log_file: Option<PathBuf>,
    started_at: DateTime<Utc>,
}

impl LoggingGuard {
    /// Path of the run log file, if file logging is active
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

fn env_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).with_context(|| format!("Invalid log filter: {}", directives))
}

/// Install the global subscriber
///
/// # Errors
///
/// Fails if the filter directives do not parse, the log directory cannot be
/// created, or a global subscriber is already installed.
pub fn init_logging(options: &LoggingOptions) -> Result<LoggingGuard> {
    let directives = options.filter_directives();
    let started_at = Utc::now();
    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console_layer: BoxedLayer = match options.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_filter(env_filter(&directives)?)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_filter(env_filter(&directives)?)
            .boxed(),
    };
    layers.push(console_layer);

    #[cfg(feature = "file-logging")]
    let (file_guard, log_file) = match &options.log_dir {
        Some(base_log_dir) => {
            let run_folder =
                base_log_dir.join(format!("run_{}", started_at.format("%Y%m%d_%H%M%S")));
            std::fs::create_dir_all(&run_folder).with_context(|| {
                format!("Failed to create log directory: {}", run_folder.display())
            })?;

            let appender = tracing_appender::rolling::never(&run_folder, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            layers.push(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(env_filter(&directives)?)
                    .boxed(),
            );
            (Some(guard), Some(run_folder.join(LOG_FILE_NAME)))
        }
        None => (None, None),
    };

    #[cfg(not(feature = "file-logging"))]
    let log_file: Option<PathBuf> = None;

    Registry::default()
        .with(layers)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    if !cfg!(feature = "file-logging") {
        if let Some(dir) = &options.log_dir {
            tracing::warn!(
                "[OBSERVABILITY] log_dir {} ignored: built without file-logging",
                dir.display()
            );
        }
    }

    tracing::debug!(
        "[OBSERVABILITY] Logging initialised (filter: {}, format: {})",
        directives,
        options.format
    );

    Ok(LoggingGuard {
        #[cfg(feature = "file-logging")]
        _file_guard: file_guard,
        log_file,
        started_at,
    })
}

/// Console logging at `info`, debug flags taken from arguments and environment
pub fn init_logging_default() -> Result<LoggingGuard> {
    init_logging(&LoggingOptions {
        debug_flags: parse_debug_flags(),
        ..LoggingOptions::default()
    })
}
