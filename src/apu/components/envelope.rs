//! Envelope register for square channel volume
//!
//! Only the fixed-volume path is modelled: decay is not emulated, so the
//! register either holds a raw volume or is forced to full scale while
//! the channel sounds.

use crate::apu::constants::MAX_VOLUME;

/// Envelope register
#[derive(Debug, Clone)]
pub struct Envelope {
    /// Raw envelope value written through the control register
    pub(crate) level: u8,
    /// Envelope-disable flag (control register bit 4)
    pub(crate) disabled: bool,
}

impl Envelope {
    pub fn new() -> Self {
        Self {
            level: 0,
            disabled: false,
        }
    }

    /// Write to the envelope portion of the control register
    ///
    /// Bits 3-0 hold the level and bit 5 is folded in as bit 4 of the
    /// raw value.
    pub fn write_control(&mut self, data: u8) {
        self.disabled = (data & 0x10) != 0;
        self.level = (data & 0x0F) | ((data >> 1) & 0x10);
    }

    /// Apply the fixed-volume path (called on every clock of a sounding channel)
    pub fn force_max(&mut self) {
        if self.disabled {
            self.level = MAX_VOLUME;
        }
    }

    /// Get the output volume (0-15)
    pub fn volume(&self) -> u8 {
        self.level.min(MAX_VOLUME)
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}
