//! Presenter tuning knobs.

use std::time::Duration;

/// Gesture thresholds and timer periods.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenterConfig {
    /// Minimum horizontal pointer travel, exclusive, for a swipe.
    pub swipe_threshold: u16,
    /// Minimum absolute horizontal wheel delta, exclusive, for navigation.
    pub wheel_threshold: f64,
    /// Quiet period before a wheel burst fires.
    pub wheel_debounce: Duration,
    /// Stopwatch tick period.
    pub tick_period: Duration,
    /// Longest the runtime waits for input when no timer is pending.
    pub idle_poll: Duration,
    /// Wheel delta reported per terminal scroll notch.
    pub wheel_step: f64,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50,
            wheel_threshold: 30.0,
            wheel_debounce: Duration::from_millis(50),
            tick_period: crate::stopwatch::TICK_PERIOD,
            idle_poll: Duration::from_millis(250),
            wheel_step: 40.0,
        }
    }
}
