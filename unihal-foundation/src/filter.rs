// UniHAL - unihal-foundation
// Module: Filter - input signal conditioning
//
// Copyright (c) 2025 The UniHAL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Debounce and slew-rate conditioning for raw input signals.
//!
//! Both helpers take the current [`Instant`] as an argument instead of
//! reading a clock themselves. The control loop already has the timestamp
//! in hand, and explicit time keeps these fully deterministic under test.

use crate::time::Instant;

/// Debounce filter for a noisy digital signal (a button, a limit switch).
///
/// A change of the raw signal only propagates to the reported state after
/// the signal has disagreed with it for a configured confirmation window.
/// Rising and falling edges have independent windows; a window of zero
/// propagates that edge immediately.
///
/// Once a change has been flagged, a short blip back to the stable state
/// does not restart the window: the change is confirmed against the
/// instant it was first seen. Only after the window has fully elapsed
/// without confirmation is the flag discarded.
///
/// # Examples
///
/// ```
/// use unihal_foundation::filter::DelayedSwitch;
/// use unihal_foundation::time::Instant;
///
/// let mut button = DelayedSwitch::new(false);
/// button.set_enable_time(50);
///
/// let t0 = Instant::from_ticks(0);
/// assert!(!button.sample(true, t0));        // change flagged, not yet confirmed
/// assert!(!button.sample(true, t0 + 30));
/// assert!(button.sample(true, t0 + 51));    // window elapsed
/// ```
#[derive(Debug, Clone)]
pub struct DelayedSwitch {
    state: bool,
    last_raw: bool,
    enable_time: u16,
    disable_time: u16,
    change_at: Instant,
    change_pending: bool,
}

impl DelayedSwitch {
    /// Creates a switch reporting `initial` until the signal says
    /// otherwise.
    #[must_use]
    pub const fn new(initial: bool) -> Self {
        Self {
            state: initial,
            last_raw: initial,
            enable_time: 0,
            disable_time: 0,
            change_at: Instant::from_ticks(0),
            change_pending: false,
        }
    }

    /// Sets the confirmation window for a low-to-high transition, in ms.
    pub fn set_enable_time(&mut self, millis: u16) {
        self.enable_time = millis;
    }

    /// Sets the confirmation window for a high-to-low transition, in ms.
    pub fn set_disable_time(&mut self, millis: u16) {
        self.disable_time = millis;
    }

    /// Returns the debounced state as of the last sample.
    #[must_use]
    pub const fn state(&self) -> bool {
        self.state
    }

    /// Feeds one raw sample taken at `now` and returns the debounced
    /// state.
    pub fn sample(&mut self, raw: bool, now: Instant) -> bool {
        self.last_raw = raw;
        // The window that applies is the one leaving the current state.
        let window = u32::from(if self.state {
            self.disable_time
        } else {
            self.enable_time
        });

        if raw == self.state {
            // Signal agrees with the stable state; a pending change that
            // never confirmed within its window was noise.
            if self.change_pending && now.duration_since(self.change_at) >= window {
                self.change_pending = false;
            }
        } else if self.change_pending {
            if now.duration_since(self.change_at) >= window {
                self.state = raw;
                self.change_pending = false;
            }
        } else if window == 0 {
            self.state = raw;
        } else {
            self.change_at = now;
            self.change_pending = true;
        }

        self.state
    }

    /// Re-evaluates the last raw sample at `now` and returns the
    /// debounced state.
    ///
    /// Useful when the raw signal is level-driven and the loop wants the
    /// state between edges.
    pub fn poll(&mut self, now: Instant) -> bool {
        let raw = self.last_raw;
        self.sample(raw, now)
    }

    /// Resets the switch to `state`, discarding any pending change. The
    /// configured windows are kept.
    pub fn reset(&mut self, state: bool) {
        self.state = state;
        self.last_raw = state;
        self.change_pending = false;
    }
}

impl Default for DelayedSwitch {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Rate limiter that follows a target `f32` linearly.
///
/// Good for filtering analog setpoints: the output moves toward the most
/// recent target at no more than the configured rise/fall rate (units per
/// second) and never overshoots it.
///
/// The first sample after construction establishes the time base and
/// applies no movement.
#[derive(Debug, Clone)]
pub struct SlewLimiter {
    value: f32,
    target: f32,
    rise_rate: f32,
    fall_rate: f32,
    last_update: Instant,
    primed: bool,
}

impl SlewLimiter {
    /// Creates a limiter resting at `preset`, with the given maximum rise
    /// and fall rates in units per second.
    #[must_use]
    pub const fn new(preset: f32, rise_rate: f32, fall_rate: f32) -> Self {
        Self {
            value: preset,
            target: preset,
            rise_rate,
            fall_rate,
            last_update: Instant::from_ticks(0),
            primed: false,
        }
    }

    /// Sets a new target and advances the output toward it, based on the
    /// time elapsed since the previous update. Returns the new output.
    pub fn set(&mut self, target: f32, now: Instant) -> f32 {
        self.target = target;

        let elapsed_ms = if self.primed {
            now.duration_since(self.last_update)
        } else {
            self.primed = true;
            0
        };
        self.last_update = now;
        let dt = elapsed_ms as f32 / 1000.0;

        if target > self.value {
            let step = self.rise_rate * dt;
            let difference = target - self.value;
            self.value = if step >= difference {
                target
            } else {
                self.value + step
            };
        } else if target < self.value {
            let step = self.fall_rate * dt;
            let difference = self.value - target;
            self.value = if step >= difference {
                target
            } else {
                self.value - step
            };
        }

        self.value
    }

    /// Advances the output toward the last target and returns it.
    pub fn value(&mut self, now: Instant) -> f32 {
        let target = self.target;
        self.set(target, now)
    }

    /// Sets the maximum rise rate in units per second.
    pub fn set_rise_rate(&mut self, units_per_second: f32) {
        self.rise_rate = units_per_second;
    }

    /// Sets the maximum fall rate in units per second.
    pub fn set_fall_rate(&mut self, units_per_second: f32) {
        self.fall_rate = units_per_second;
    }
}
