use anyhow::Result;
use movielog_config::LoggingConfig;
use std::io;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Pick the filter directive: `-q` wins, then `-v`/`-vv`, then the configured level
fn filter_directive(verbose_level: u8, quiet: bool, configured: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose_level {
        0 => configured.to_string(),
        // -v: debug but keep hyper's connection chatter down
        1 => "debug,hyper=info,hyper_util=info".to_string(),
        _ => "trace".to_string(),
    }
}

/// `movielog.log` rotates as `movielog.<date>`
fn rotation_prefix(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .filter(|stem| !stem.is_empty())
        .unwrap_or(file_name)
}

pub fn init_logging(verbose_level: u8, quiet: bool, settings: &LoggingConfig) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new(filter_directive(verbose_level, quiet, &settings.level))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose_level, quiet, &settings.level)))
    };

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or(settings.json);

    let registry = Registry::default().with(filter);

    match settings.file.as_deref() {
        Some(log_path) => {
            let file_appender = rolling_appender(log_path)?;
            if json {
                registry
                    .with(
                        fmt::layer()
                            .json()
                            .with_timer(ChronoUtc::rfc_3339())
                            .with_writer(file_appender),
                    )
                    .init();
            } else {
                registry
                    .with(
                        fmt::layer()
                            .with_timer(ChronoUtc::rfc_3339())
                            .with_ansi(false)
                            .with_writer(file_appender),
                    )
                    .init();
            }
        }
        None => {
            if json {
                registry
                    .with(
                        fmt::layer()
                            .json()
                            .with_timer(ChronoUtc::rfc_3339())
                            .with_writer(io::stderr),
                    )
                    .init();
            } else {
                registry
                    .with(
                        fmt::layer()
                            .with_timer(ChronoUtc::rfc_3339())
                            .with_writer(io::stderr),
                    )
                    .init();
            }
        }
    }

    Ok(())
}

fn rolling_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let log_dir = log_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Log file path has no parent directory"))?;
    std::fs::create_dir_all(log_dir)?;

    let log_filename = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename: {}", log_path.display()))?;

    Ok(RollingFileAppender::new(
        Rotation::DAILY,
        log_dir,
        rotation_prefix(log_filename),
    ))
}
