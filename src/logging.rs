use crate::config::LogConfig;
use anyhow::{Context, Result};
use env_logger::{Env, Target, WriteStyle};
use std::fs::{self, OpenOptions};

pub enum LogTarget {
    Stderr,
    /// The configured log file. Used while the terminal UI owns the screen.
    File,
}

/// Installs the global logger. `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LogConfig, target: LogTarget) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(config.level.as_str()));

    if let LogTarget::File = target {
        let path = config.file_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never);
    }

    builder.try_init()?;
    Ok(())
}
