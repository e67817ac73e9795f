//! Sweep unit for pitch bending

use crate::apu::constants::TIMER_MAX;

/// Sweep unit for pitch bending
#[derive(Debug, Clone)]
pub struct Sweep {
    /// Enabled flag
    pub(crate) enabled: bool,
    /// Countdown loaded with period + 1 (1-8), clocked on half frames
    pub(crate) divider: u8,
    /// Negate flag (pitch bend direction)
    pub(crate) negate: bool,
    /// Shift amount
    pub(crate) shift: u8,
}

impl Sweep {
    pub fn new() -> Self {
        Self {
            enabled: false,
            divider: 0,
            negate: false,
            shift: 0,
        }
    }

    /// Write to the sweep control register
    ///
    /// Bit 7: enable, bits 6-4: period, bit 3: negate, bits 2-0: shift
    pub fn write_control(&mut self, data: u8) {
        self.enabled = (data & 0x80) != 0;
        self.divider = ((data >> 4) & 0x07) + 1;
        self.negate = (data & 0x08) != 0;
        self.shift = data & 0x07;
    }

    /// Clock the divider (called on half frames)
    pub fn clock_divider(&mut self) {
        self.divider = self.divider.saturating_sub(1);
    }

    /// Check whether the sweep may adjust the period on this tick
    pub fn is_active(&self) -> bool {
        self.enabled && self.divider > 0
    }

    /// Calculate the target period for the sweep
    pub fn calculate_target_period(&self, current_period: u16) -> u16 {
        let change = current_period >> self.shift;
        if self.negate {
            current_period.saturating_sub(change)
        } else {
            current_period + change
        }
    }

    /// Clock the sweep adjustment (called by frame sequencer)
    /// Returns Some(new_period) if the period should be updated
    pub fn clock(&self, current_period: u16) -> Option<u16> {
        if !self.is_active() {
            return None;
        }

        let target = self.calculate_target_period(current_period);
        // Targets outside the 11-bit timer leave the period untouched
        (target <= TIMER_MAX).then_some(target)
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self::new()
    }
}
