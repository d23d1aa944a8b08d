use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// The alternate screen owns the terminal, so log records go to a file.
pub fn init_file_logger(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok();
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    Ok(())
}

/// Forward an in-app console line to the log facade, keyed on its `[LEVEL]` prefix.
pub fn forward_console_line(line: &str) {
    if let Some(rest) = line.strip_prefix("[WARN]") {
        log::warn!("{}", rest.trim_start());
    } else if let Some(rest) = line.strip_prefix("[ERROR]") {
        log::error!("{}", rest.trim_start());
    } else if let Some(rest) = line.strip_prefix("[INFO]") {
        log::info!("{}", rest.trim_start());
    } else {
        log::debug!("{line}");
    }
}
