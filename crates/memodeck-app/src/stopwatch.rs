//! Elapsed-time stopwatch.
//!
//! A start/stop/reset counter driven by a repeating one-second tick. Time is
//! passed in explicitly as a [`Duration`] since session start so the same
//! logic runs against the wall clock and against virtual time in tests.
//!
//! The tick handle exists exactly while the stopwatch runs: `running` is
//! derived from it rather than stored next to it.

use std::time::Duration;

/// Interval between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Scheduled repeating tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TickHandle {
    next_due: Duration,
    period: Duration,
}

/// Stopwatch state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwatch {
    elapsed_seconds: u64,
    tick: Option<TickHandle>,
    period: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Stopped stopwatch at zero with the default one-second period.
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// Stopped stopwatch ticking every `period` once started.
    pub fn with_period(period: Duration) -> Self {
        Self { elapsed_seconds: 0, tick: None, period }
    }

    /// Counter value.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Whether the repeating tick is active.
    pub fn is_running(&self) -> bool {
        self.tick.is_some()
    }

    /// Deadline of the next tick. `None` when stopped.
    pub fn next_due(&self) -> Option<Duration> {
        self.tick.map(|t| t.next_due)
    }

    /// Start ticking. No-op if already running.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.tick.is_some() {
            return false;
        }
        self.tick = Some(TickHandle { next_due: now + self.period, period: self.period });
        true
    }

    /// Cancel the tick, keeping the counter. No-op if already stopped.
    pub fn stop(&mut self) -> bool {
        self.tick.take().is_some()
    }

    /// Stop if running and zero the counter.
    pub fn reset(&mut self) {
        self.stop();
        self.elapsed_seconds = 0;
    }

    /// Body of the repeating tick: count one second while running.
    pub fn tick(&mut self) {
        if self.is_running() {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        }
    }

    /// Fire every tick due at or before `now`.
    ///
    /// Returns the number of ticks fired. Several may fire at once when the
    /// caller was late, so the counter tracks wall time rather than polls.
    pub fn advance(&mut self, now: Duration) -> u64 {
        let mut fired = 0;
        while let Some(handle) = self.tick.as_mut() {
            if handle.next_due > now {
                break;
            }
            handle.next_due += handle.period;
            self.tick();
            fired += 1;
        }
        fired
    }
}

/// Format seconds as zero-padded `HH:MM:SS`. Hours keep counting past 24.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
