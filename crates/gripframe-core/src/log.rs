//! Gesture trace log.
//!
//! A run writes to a fresh `gripframe.log` (truncated at startup) under
//! `~/.config/gripframe/logs` or the directory set in `[logging]`. Lines
//! carry the time since startup and a level. [`log_event!`] records are
//! `name key=value ...` so a trace can be grepped by state or outcome.
//!
//! Until [`init`] or [`install`] succeeds every macro is a no-op, so
//! library code logs unconditionally.

use std::fmt;
use std::fs::{self, File};
use std::io::{LineWriter, Write};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use serde::{Deserialize, Serialize};

pub const LOG_FILE_NAME: &str = "gripframe.log";

static SINK: OnceLock<Mutex<Sink>> = OnceLock::new();

/// The `[logging]` config section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    /// Lines below this level are dropped.
    pub level: Level,
    /// Where `gripframe.log` goes; `<config dir>/logs` when unset.
    pub dir: Option<PathBuf>,
}

/// Severity of a log line.
///
/// Parsing is lenient: unknown names become `Info` instead of failing
/// the whole config file.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<String> for Level {
    fn from(name: String) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "debug" | "trace" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

struct Sink {
    out: Box<dyn Write + Send>,
    min_level: Level,
    started: Instant,
}

/// Opens the log file described by `config` and routes output to it.
///
/// Returns the file path, or `None` when logging is disabled, the file
/// cannot be created, or a sink is already installed.
pub fn init(config: &LogConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }
    let dir = match &config.dir {
        Some(dir) => dir.clone(),
        None => crate::config::config_dir()?.join("logs"),
    };
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE_NAME);
    let file = File::create(&path).ok()?;

    install(Box::new(LineWriter::new(file)), config.level).then_some(path)
}

/// Routes log output to `out`. Only the first installed sink is used;
/// returns false if one was already in place.
pub fn install(out: Box<dyn Write + Send>, min_level: Level) -> bool {
    SINK.set(Mutex::new(Sink {
        out,
        min_level,
        started: Instant::now(),
    }))
    .is_ok()
}

/// Writes one line if a sink is installed and `level` passes its filter.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(sink) = SINK.get() else {
        return;
    };
    let Ok(mut sink) = sink.lock() else {
        return;
    };
    if level < sink.min_level {
        return;
    }
    let elapsed = sink.started.elapsed().as_secs_f64();
    let _ = writeln!(sink.out, "{elapsed:9.3} {level:<5} {args}");
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Writes a debug record `name key=value ...`; values use `Display`.
///
/// ```
/// gripframe_core::log_event!("gesture_start", state = "top", x = 4);
/// ```
#[macro_export]
macro_rules! log_event {
    ($name:literal $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::log::write(
            $crate::log::Level::Debug,
            format_args!(concat!($name $(, " ", stringify!($key), "={}")*) $(, $value)*),
        )
    };
}
