use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Number of lines kept in memory for the status bar and log panel
const MEMORY_CAPACITY: usize = 200;

/// Shared logger that keeps recent lines in memory for display
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MEMORY_CAPACITY {
                let overflow = logs.len() - MEMORY_CAPACITY;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Most recent entry, if any
    pub fn latest(&self) -> Option<String> {
        self.logs.lock().ok().and_then(|logs| logs.last().cloned())
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the log file under the platform data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}

/// Install the global `log` backend.
///
/// Records at or above the configured level always reach `memory`. When
/// logging is enabled they are also appended to the log file, whose path is
/// returned.
pub fn init(config: &LoggingConfig, memory: &Logger) -> Result<Option<PathBuf>> {
    let level = config.level_filter()?;
    let memory = memory.clone();

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .chain(fern::Output::call(move |record| {
            memory.log(format!("{} {}", record.level(), record.args()));
        }));

    let mut log_path = None;
    if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
        log_path = Some(path);
    }

    dispatch.apply().context("Failed to install logger")?;
    Ok(log_path)
}
