//! Length counter for controlling note duration

use crate::apu::constants::LENGTH_COUNTER_TABLE;

/// Length counter for controlling note duration
#[derive(Debug, Clone)]
pub struct LengthCounter {
    /// Counter value
    pub(crate) counter: u8,
    /// Halt flag (length-disable bit of the control register)
    pub(crate) halt: bool,
}

impl LengthCounter {
    pub fn new() -> Self {
        Self {
            counter: 0,
            halt: false,
        }
    }

    /// Clock the length counter (called by frame sequencer)
    ///
    /// The halt flag is consulted only when `honor_halt` is set.
    pub fn clock(&mut self, honor_halt: bool) {
        if honor_halt && self.halt {
            return;
        }
        if self.counter > 0 {
            self.counter -= 1;
        }
    }

    /// Load a new counter value from the length counter table
    pub fn load(&mut self, index: u8) {
        self.counter = LENGTH_COUNTER_TABLE[(index & 0x1F) as usize];
    }

    /// Load a raw counter value, bypassing the table
    pub fn load_direct(&mut self, value: u8) {
        self.counter = value;
    }

    /// Silence the counter (channel disabled through $4015)
    pub fn clear(&mut self) {
        self.counter = 0;
    }

    /// Check if the length counter is non-zero
    pub fn is_active(&self) -> bool {
        self.counter > 0
    }

    /// Set the halt flag
    pub fn set_halt(&mut self, halt: bool) {
        self.halt = halt;
    }
}

impl Default for LengthCounter {
    fn default() -> Self {
        Self::new()
    }
}
