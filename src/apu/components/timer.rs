//! Timer for controlling the frequency of waveforms

use crate::apu::constants::TIMER_MAX;

/// Clock divider driving a square channel's duty sequencer
#[derive(Debug, Clone)]
pub struct Timer {
    /// Period (11-bit value)
    pub(crate) period: u16,
    /// Current counter value
    pub(crate) counter: u16,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            period: 0,
            counter: 0,
        }
    }

    /// Clock the timer
    ///
    /// Reloads with `(period + 1) * 2` when the counter has run out, then
    /// counts down by one. Returns true on reload.
    pub fn clock(&mut self) -> bool {
        let expired = self.counter == 0;
        if expired {
            self.counter = self.reload_value();
        }
        self.counter -= 1;
        expired
    }

    /// Value loaded into the counter when it expires
    pub fn reload_value(&self) -> u16 {
        (self.period + 1) * 2
    }

    /// Replace the low 8 bits of the period
    pub fn set_low(&mut self, low: u8) {
        self.period = (self.period & 0x700) | low as u16;
    }

    /// Replace the high 3 bits of the period
    pub fn set_high(&mut self, high: u8) {
        self.period = (self.period & 0x0FF) | ((high as u16 & 0x07) << 8);
    }

    /// Set the period directly
    pub fn set_period_direct(&mut self, period: u16) {
        self.period = period & TIMER_MAX;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
