//! Triangle wave channel implementation

use crate::apu::components::{LengthCounter, Timer};
use crate::apu::constants::{MAX_VOLUME, TRIANGLE_SEQUENCE};

/// Triangle wave channel for bass and melody sounds
#[derive(Debug, Clone)]
pub struct TriangleChannel {
    /// Enabled flag (from $4015)
    pub(crate) enabled: bool,
    /// Linear counter reload value (0-127)
    pub(crate) linear_reload: u8,
    /// Control flag, halts linear counter decay when set
    pub(crate) control: bool,
    /// Length counter
    pub(crate) length_counter: LengthCounter,
    /// Timer period holder
    pub(crate) timer: Timer,
    /// Sequencer position (0-31)
    pub(crate) sequence_position: u8,
    /// Last computed amplitude
    pub(crate) sample: u8,
}

impl Default for TriangleChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleChannel {
    /// Create a new triangle channel
    pub fn new() -> Self {
        Self {
            enabled: false,
            linear_reload: 0,
            control: false,
            length_counter: LengthCounter::new(),
            timer: Timer::new(),
            sequence_position: 0,
            sample: 0,
        }
    }

    /// Write to register 0 ($4008 - linear counter setup)
    pub fn write_register_0(&mut self, data: u8) {
        self.control = (data & 0x80) != 0;
        self.linear_reload = data & 0x7F;
    }

    /// Write to register 2 ($400A - timer low byte)
    pub fn write_register_2(&mut self, data: u8) {
        self.timer.set_low(data);
    }

    /// Write to register 3 ($400B - length counter load and timer high)
    ///
    /// Bits 7-3 become the length counter as-is, without the table lookup.
    pub fn write_register_3(&mut self, data: u8) {
        self.timer.set_high(data);
        self.length_counter.load_direct(data >> 3);
    }

    /// Set the enabled flag (from $4015)
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.length_counter.clear();
            self.sample = 0;
        }
    }

    /// Check if the length counter is non-zero
    pub fn is_active(&self) -> bool {
        self.length_counter.is_active()
    }

    /// Clock the sequencer (called once per cycle)
    pub fn clock(&mut self) {
        if !self.enabled || self.timer.period == 0 {
            return;
        }

        let value = TRIANGLE_SEQUENCE[self.sequence_position as usize];
        self.sample = if value > MAX_VOLUME { 31 - value } else { value };

        self.sequence_position = (self.sequence_position + 1) % 32;
    }

    /// Get the last computed output sample (0-15)
    pub fn output(&self) -> u8 {
        self.sample
    }

    /// Get the sequencer position (0-31)
    pub fn sequence_position(&self) -> u8 {
        self.sequence_position
    }

    /// Get the timer period (0-2047)
    pub fn timer_period(&self) -> u16 {
        self.timer.period
    }

    /// Get the remaining length counter ticks
    pub fn length(&self) -> u8 {
        self.length_counter.counter
    }

    /// Get the linear counter reload value
    pub fn linear_reload(&self) -> u8 {
        self.linear_reload
    }

    /// Check the control flag
    pub fn control(&self) -> bool {
        self.control
    }

    /// Check the enabled flag
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}
