// src/log.rs
//! Logging handle passed explicitly into each component.
//!
//! The process entry point decides where lines go (`TracingLog` once a
//! subscriber is installed); library code only sees `&dyn Log`.
use std::cell::RefCell;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARNING",
            Level::Error => "ERROR",
        };
        f.write_str(s)
    }
}

pub trait Log {
    fn write(&self, level: Level, msg: &str);
}

/// Forwards to `tracing`; the binary installs the subscriber.
pub struct TracingLog;

impl Log for TracingLog {
    fn write(&self, level: Level, msg: &str) {
        match level {
            Level::Debug => tracing::debug!("{msg}"),
            Level::Info => tracing::info!("{msg}"),
            Level::Warn => tracing::warn!("{msg}"),
            Level::Error => tracing::error!("{msg}"),
        }
    }
}

/// Discards everything.
pub struct NullLog;
impl Log for NullLog {
    fn write(&self, _level: Level, _msg: &str) {}
}

/// Keeps lines in memory. Single-threaded, like the rest of a run.
#[derive(Default)]
pub struct MemoryLog {
    lines: RefCell<Vec<(Level, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self { Self::default() }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.lines.borrow().iter().filter(|(l, _)| *l == level).count()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lines.borrow().iter().any(|(l, m)| *l == level && m.contains(needle))
    }
}

impl Log for MemoryLog {
    fn write(&self, level: Level, msg: &str) {
        self.lines.borrow_mut().push((level, msg.to_string()));
    }
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($log:expr, $($arg:tt)*) => {
        $crate::log::Log::write($log, $crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Info-level logging
#[macro_export]
macro_rules! logi {
    ($log:expr, $($arg:tt)*) => {
        $crate::log::Log::write($log, $crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($log:expr, $($arg:tt)*) => {
        $crate::log::Log::write($log, $crate::log::Level::Warn, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($log:expr, $($arg:tt)*) => {
        $crate::log::Log::write($log, $crate::log::Level::Error, &format!($($arg)*))
    };
}
