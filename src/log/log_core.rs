//! Log system core implementation
//!
//! All logging state lives in one `LogCore` so tests can create private
//! instances while production code goes through the global one.

use super::config::MAX_LOG_ENTRIES;
use super::entry::LogEntry;
use super::level::LogLevel;
use crate::sync::SpinLock;
use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

/// Fixed ring of entries; the oldest unread entry is overwritten when full.
struct LogRing {
    entries: [LogEntry; MAX_LOG_ENTRIES],
    /// Index of the oldest unread entry
    head: usize,
    /// Number of unread entries
    len: usize,
    /// Sequence number of the next entry
    next_seq: usize,
    /// Entries overwritten before being read
    dropped: usize,
}

impl LogRing {
    const fn new() -> Self {
        const EMPTY: LogEntry = LogEntry::empty();
        Self {
            entries: [EMPTY; MAX_LOG_ENTRIES],
            head: 0,
            len: 0,
            next_seq: 1,
            dropped: 0,
        }
    }

    fn push(&mut self, level: LogLevel, args: fmt::Arguments<'_>) -> LogEntry {
        let entry = LogEntry::from_args(self.next_seq, level, args);
        self.next_seq += 1;

        if self.len == MAX_LOG_ENTRIES {
            self.head = (self.head + 1) % MAX_LOG_ENTRIES;
            self.len -= 1;
            self.dropped += 1;
        }
        let slot = (self.head + self.len) % MAX_LOG_ENTRIES;
        self.entries[slot] = entry.clone();
        self.len += 1;

        entry
    }

    fn pop(&mut self) -> Option<LogEntry> {
        if self.len == 0 {
            return None;
        }
        let entry = self.entries[self.head].clone();
        self.head = (self.head + 1) % MAX_LOG_ENTRIES;
        self.len -= 1;
        Some(entry)
    }
}

/// Core logging system
///
/// Holds the ring buffer, the two level thresholds and the console sink.
pub struct LogCore {
    ring: SpinLock<LogRing>,
    /// Global log level threshold (controls recording)
    global_level: AtomicU8,
    /// Console output level threshold (controls immediate printing)
    console_level: AtomicU8,
    console_sink: SpinLock<Option<fn(&LogEntry)>>,
}

impl LogCore {
    /// Creates a log with the given thresholds and no console sink.
    ///
    /// `const` so the global instance is a plain `static`.
    pub const fn new(global_level: LogLevel, console_level: LogLevel) -> Self {
        Self {
            ring: SpinLock::new(LogRing::new()),
            global_level: AtomicU8::new(global_level as u8),
            console_level: AtomicU8::new(console_level as u8),
            console_sink: SpinLock::new(None),
        }
    }

    /// Records one message if `level` passes the global threshold.
    ///
    /// The sink is called after the ring lock is released, so a sink may log.
    pub fn _log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.is_level_enabled(level) {
            return;
        }

        let entry = self.ring.lock().push(level, args);

        if self.is_console_level(level) {
            let sink = *self.console_sink.lock();
            if let Some(sink) = sink {
                sink(&entry);
            }
        }
    }

    /// Pops the oldest unread entry.
    pub fn _read_log(&self) -> Option<LogEntry> {
        self.ring.lock().pop()
    }

    /// Number of unread entries
    pub fn _log_len(&self) -> usize {
        self.ring.lock().len
    }

    /// Entries lost to overflow
    pub fn _log_dropped_count(&self) -> usize {
        self.ring.lock().dropped
    }

    /// Sets the global log level threshold
    pub fn _set_global_level(&self, level: LogLevel) {
        self.global_level.store(level as u8, Ordering::Release);
    }

    /// Gets the current global log level
    pub fn _get_global_level(&self) -> LogLevel {
        LogLevel::from_u8(self.global_level.load(Ordering::Acquire))
    }

    /// Sets the console output level threshold
    pub fn _set_console_level(&self, level: LogLevel) {
        self.console_level.store(level as u8, Ordering::Release);
    }

    /// Gets the current console output level
    pub fn _get_console_level(&self) -> LogLevel {
        LogLevel::from_u8(self.console_level.load(Ordering::Acquire))
    }

    /// Replaces the console sink.
    pub fn _set_console_sink(&self, sink: Option<fn(&LogEntry)>) {
        *self.console_sink.lock() = sink;
    }

    /// Checks if a log level is enabled (global filter)
    #[inline(always)]
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.global_level.load(Ordering::Acquire)
    }

    #[inline(always)]
    fn is_console_level(&self, level: LogLevel) -> bool {
        level as u8 <= self.console_level.load(Ordering::Acquire)
    }
}
