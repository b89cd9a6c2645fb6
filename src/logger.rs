//! Level-gated diagnostics written to stderr.
//!
//! Stdout belongs to the command loop, so diagnostics never go there.

use std::collections::HashMap;
use std::io::Write;
use std::time::{Duration, Instant};

pub const LEVEL_OFF: u8 = 0;
pub const LEVEL_INFO: u8 = 3;
pub const LEVEL_DEBUG: u8 = 6;
pub const LEVEL_TRACE: u8 = 10;

#[derive(Debug, Clone, Default)]
pub struct Logger {
    /// 10 is everything and 0 is nothing
    level: u8,

    timers: HashMap<String, Instant>,
}

impl Logger {
    pub fn new(level: u8) -> Self {
        Logger {
            level: level.min(LEVEL_TRACE),
            timers: HashMap::new(),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(LEVEL_TRACE);
    }

    pub fn enabled(&self, level: u8) -> bool {
        level != LEVEL_OFF && level <= self.level
    }

    pub fn log(&self, level: u8, msg: &str) {
        if self.enabled(level) {
            let _ = writeln!(std::io::stderr().lock(), "[{}] {}", level, msg);
        }
    }

    /// Like `log`, but the message is only built when it will be printed.
    pub fn log_lazy(&self, level: u8, msg: impl FnOnce() -> String) {
        if self.enabled(level) {
            self.log(level, &msg());
        }
    }

    pub fn time_start(&mut self, name: &str) {
        self.timers.insert(name.to_string(), Instant::now());
    }

    /// Stop the named timer, log its elapsed time and return it.
    /// Unknown names are logged and yield `None`.
    pub fn time_end(&mut self, level: u8, name: &str) -> Option<Duration> {
        match self.timers.remove(name) {
            Some(start) => {
                let elapsed = start.elapsed();
                self.log_lazy(level, || {
                    format!("{}: {}.{:03}s", name, elapsed.as_secs(), elapsed.subsec_millis())
                });
                Some(elapsed)
            }
            None => {
                self.log(level, &format!("timer {} was never started", name));
                None
            }
        }
    }
}
