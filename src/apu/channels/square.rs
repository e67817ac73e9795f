//! Square wave channel implementation

use crate::apu::components::{Envelope, LengthCounter, Sweep, Timer};
use crate::apu::constants::{DUTY_PATTERNS, SQUARE_MIN_PERIOD};

/// Square wave channel (used for both Square 1 and Square 2)
#[derive(Debug, Clone)]
pub struct SquareChannel {
    /// Enabled flag (from $4015)
    pub(crate) enabled: bool,
    /// Duty cycle (0-3)
    pub(crate) duty: u8,
    /// Duty cycle sequence position (0-7)
    pub(crate) duty_position: u8,
    /// Envelope register
    pub(crate) envelope: Envelope,
    /// Sweep unit
    pub(crate) sweep: Sweep,
    /// Length counter
    pub(crate) length_counter: LengthCounter,
    /// Timer
    pub(crate) timer: Timer,
    /// Last computed amplitude
    pub(crate) sample: u8,
}

impl SquareChannel {
    /// Create a new, silent square channel
    pub fn new() -> Self {
        Self {
            enabled: false,
            duty: 0,
            duty_position: 0,
            envelope: Envelope::new(),
            sweep: Sweep::new(),
            length_counter: LengthCounter::new(),
            timer: Timer::new(),
            sample: 0,
        }
    }

    /// Write to register 0 (duty cycle, length disable and envelope)
    pub fn write_register_0(&mut self, data: u8) {
        self.duty = (data >> 6) & 0x03;
        self.length_counter.set_halt((data & 0x20) != 0);
        self.envelope.write_control(data);
    }

    /// Write to register 1 (sweep unit)
    pub fn write_register_1(&mut self, data: u8) {
        self.sweep.write_control(data);
    }

    /// Write to register 2 (timer low byte)
    pub fn write_register_2(&mut self, data: u8) {
        self.timer.set_low(data);
    }

    /// Write to register 3 (length counter load and timer high)
    pub fn write_register_3(&mut self, data: u8) {
        self.timer.set_high(data);
        self.length_counter.load(data >> 3);
    }

    /// Set the enabled flag (from $4015)
    ///
    /// Disabling clears the length counter and the held sample, so the
    /// channel mixes as silence while it is not clocked.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.length_counter.clear();
            self.sample = 0;
        }
    }

    /// Check whether the channel should be clocked this cycle
    ///
    /// Periods below 8 are ultrasonic and leave the channel frozen.
    pub fn is_clocked(&self) -> bool {
        self.enabled && self.timer.period >= SQUARE_MIN_PERIOD
    }

    /// Check if the length counter still allows sound
    pub fn is_active(&self) -> bool {
        self.length_counter.is_active()
    }

    /// Clock the channel, updating its output sample
    pub fn clock(&mut self) {
        if !self.length_counter.is_active() {
            self.sample = 0;
            return;
        }

        self.envelope.force_max();

        if self.timer.clock() {
            self.duty_position = (self.duty_position + 1) & 0x07;
        }

        self.sample = if DUTY_PATTERNS[self.duty as usize][self.duty_position as usize] == 1 {
            self.envelope.volume()
        } else {
            0
        };
    }

    /// Clock the length counter (called on half frames)
    ///
    /// The length-disable bit only stops the countdown when `honor_halt` is set.
    pub fn clock_length_counter(&mut self, honor_halt: bool) {
        self.length_counter.clock(honor_halt);
    }

    /// Clock the sweep divider (called on half frames)
    pub fn clock_sweep_divider(&mut self) {
        self.sweep.clock_divider();
    }

    /// Apply the sweep adjustment to the timer period
    pub fn clock_sweep(&mut self) {
        if let Some(new_period) = self.sweep.clock(self.timer.period) {
            self.timer.set_period_direct(new_period);
        }
    }

    /// Get the last computed output sample (0 or volume)
    pub fn output(&self) -> u8 {
        self.sample
    }

    /// Get the duty sequence position (0-7)
    pub fn duty_position(&self) -> u8 {
        self.duty_position
    }

    /// Get the timer period (0-2047)
    pub fn timer_period(&self) -> u16 {
        self.timer.period
    }

    /// Get the remaining length counter ticks
    pub fn length(&self) -> u8 {
        self.length_counter.counter
    }

    /// Check the enabled flag
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for SquareChannel {
    fn default() -> Self {
        Self::new()
    }
}
