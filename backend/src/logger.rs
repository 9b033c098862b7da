use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Log levels representing increasing verbosity.
///
/// # Behavior
/// Setting a log level enables that level and all less verbose levels below it.
/// The levels are ordered from least to most verbose:
///
/// - **Silent (0)**: No logging output
/// - **Error (1)**: Only error messages
/// - **Warn (2)**: Warning and error messages
/// - **Info (3)**: Informational, warning, and error messages (default)
/// - **Debug (4)**: All messages including debug output (most verbose)
///
/// The level can be set via the `LOG_LEVEL` environment variable or at runtime
/// using `set_log_level()` or `Logger::set_level()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Silent = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl Level {
    /// Parse a log level from a string (case insensitive)
    ///
    /// Valid values: "silent", "error", "warn", "info", "debug"
    /// Returns None if the string doesn't match a valid level.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" => Some(Level::Silent),
            "error" => Some(Level::Error),
            "warn" => Some(Level::Warn),
            "info" => Some(Level::Info),
            "debug" => Some(Level::Debug),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Silent => "Silent",
            Level::Error => "Error",
            Level::Warn => "Warn",
            Level::Info => "Info",
            Level::Debug => "Debug",
        }
    }
}

pub struct Logger {
    log_file: Option<PathBuf>,
    enable_print_log: bool,
    level: Arc<Mutex<Level>>,
}

impl Logger {
    pub fn new() -> Self {
        // SEDRA_LOG_FILE: append messages to this file as well
        let log_file = std::env::var("SEDRA_LOG_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let enable_print_log = std::env::var("ENABLE_PRINT_LOG")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(true);

        // Read LOG_LEVEL from environment variable, default to Info
        let level = std::env::var("LOG_LEVEL")
            .ok()
            .and_then(|v| Level::from_str(&v))
            .unwrap_or(Level::Info);

        Logger {
            log_file,
            enable_print_log,
            level: Arc::new(Mutex::new(level)),
        }
    }

    pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("debug"));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        Ok(())
    }

    fn write_to_file(&self, message: &str) -> Result<(), Box<dyn std::error::Error>> {
        let Some(log_file) = &self.log_file else {
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3fZ");
        let log_line = format!("[{}] {}\n", timestamp, message);

        file.write_all(log_line.as_bytes())?;

        Ok(())
    }

    fn enabled(&self, at: Level) -> bool {
        self.level.lock().map(|l| *l >= at).unwrap_or(true)
    }

    /// Log a debug message (most verbose level).
    /// Only logs if the current level is set to Debug.
    pub fn debug(&self, msg: &str) {
        if !self.enabled(Level::Debug) {
            return;
        }

        if self.enable_print_log {
            tracing::debug!("{}", msg);
        }

        if let Err(e) = self.write_to_file(&format!("DEBUG: {}", msg)) {
            eprintln!("Failed to write to log file: {}", e);
        }
    }

    /// Log an informational message.
    /// Logs if the current level is Info or Debug.
    pub fn info(&self, msg: &str) {
        if !self.enabled(Level::Info) {
            return;
        }

        if self.enable_print_log {
            tracing::info!("{}", msg);
        }

        if let Err(e) = self.write_to_file(&format!("INFO: {}", msg)) {
            eprintln!("Failed to write to log file: {}", e);
        }
    }

    /// Log a warning message.
    /// Logs if the current level is Warn, Info, or Debug.
    pub fn warn(&self, msg: &str) {
        if !self.enabled(Level::Warn) {
            return;
        }

        if self.enable_print_log {
            tracing::warn!("{}", msg);
        }

        if let Err(e) = self.write_to_file(&format!("WARN: {}", msg)) {
            eprintln!("Failed to write to log file: {}", e);
        }
    }

    /// Log an error message.
    /// Logs at every level except Silent.
    pub fn error(&self, msg: &str) {
        if !self.enabled(Level::Error) {
            return;
        }

        if self.enable_print_log {
            tracing::error!("{}", msg);
        }

        if let Err(e) = self.write_to_file(&format!("ERROR: {}", msg)) {
            eprintln!("Failed to write to log file: {}", e);
        }
    }

    /// Get the current log level.
    ///
    /// If the lock cannot be acquired, returns Level::Info.
    pub fn get_level(&self) -> Level {
        self.level.lock().map(|l| *l).unwrap_or(Level::Info)
    }

    pub fn set_level(&self, new_level: Level) {
        if let Ok(mut level) = self.level.lock() {
            *level = new_level;
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

// Global logger instance using OnceLock for thread-safe initialization
pub static LOGGER: OnceLock<Logger> = OnceLock::new();
static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

fn with_logger<F, R>(f: F) -> R
where
    F: FnOnce(&Logger) -> R,
{
    // Initialize tracing once, globally. A subscriber installed by the
    // caller (e.g. in tests) takes precedence.
    TRACING_INITIALIZED.get_or_init(|| {
        let _ = Logger::init_tracing();
    });

    f(LOGGER.get_or_init(Logger::new))
}

// Public API functions
pub fn info(msg: &str) {
    with_logger(|logger| logger.info(msg));
}

pub fn warn(msg: &str) {
    with_logger(|logger| logger.warn(msg));
}

pub fn error(msg: &str) {
    with_logger(|logger| logger.error(msg));
}

pub fn debug(msg: &str) {
    with_logger(|logger| logger.debug(msg));
}

pub fn get_log_level() -> Level {
    with_logger(|logger| logger.get_level())
}

/// Set the log level.
///
/// - Level::Silent: No logging
/// - Level::Error: Only errors
/// - Level::Warn: Warnings and errors
/// - Level::Info: Info, warnings, and errors (default)
/// - Level::Debug: All messages (most verbose)
pub fn set_log_level(level: Level) {
    with_logger(|logger| logger.set_level(level));
}

/// Set the log level from a string (case insensitive).
///
/// Returns true if successful, false if the string is not a valid level.
///
/// # Example
/// ```ignore
/// use sedra_backend::logger::set_log_level_str;
///
/// set_log_level_str("debug"); // Enable all logging
/// set_log_level_str("error"); // Only log errors
/// ```
pub fn set_log_level_str(level_str: &str) -> bool {
    if let Some(level) = Level::from_str(level_str) {
        set_log_level(level);
        true
    } else {
        false
    }
}

pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let millis = duration.subsec_millis();

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}
