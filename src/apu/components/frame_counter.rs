//! Frame sequencer for the APU
//!
//! The frame sequencer is a countdown that paces the square channels'
//! length counters and sweep units. It is stepped by the host at a low
//! rate (~240 Hz) and operates in two modes:
//! - 4-step mode: counts down from 4
//! - 5-step mode: counts down from 5, the first tick after a reset is idle
//!
//! On each tick the counter value selects what happens:
//! - value 4: half frame (length counters and sweep dividers clocked)
//! - value below 5: sweep adjustment applied

use serde::{Deserialize, Serialize};

use crate::apu::constants::{FIVE_STEP_LENGTH, FOUR_STEP_LENGTH, HALF_FRAME_STEP};

/// Frame sequencer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMode {
    /// 4-step mode (power-up default)
    FourStep,
    /// 5-step mode
    FiveStep,
}

impl FrameMode {
    /// Counter value loaded when this mode is selected
    pub fn length(self) -> u8 {
        match self {
            FrameMode::FourStep => FOUR_STEP_LENGTH,
            FrameMode::FiveStep => FIVE_STEP_LENGTH,
        }
    }
}

/// What happens when the counter runs down to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencerWrap {
    /// Reload the mode's step count, repeating the sequence
    #[default]
    Reload,
    /// Stay at zero: every later tick adjusts sweeps, none is a half frame
    Hold,
}

/// Work produced by one sequencer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTick {
    /// Clock length counters and sweep dividers
    pub half_frame: bool,
    /// Apply sweep adjustments
    pub sweep: bool,
}

/// Frame sequencer state machine
#[derive(Debug, Clone)]
pub struct FrameSequencer {
    /// Current mode (4-step or 5-step)
    mode: FrameMode,
    /// Countdown value
    counter: u8,
    /// Behavior once the countdown reaches zero
    wrap: SequencerWrap,
}

impl FrameSequencer {
    /// Create a new frame sequencer in 4-step mode
    pub fn new(wrap: SequencerWrap) -> Self {
        Self {
            mode: FrameMode::FourStep,
            counter: FOUR_STEP_LENGTH,
            wrap,
        }
    }

    /// Reset to the power-up state, keeping the wrap policy
    pub fn reset(&mut self) {
        self.mode = FrameMode::FourStep;
        self.counter = FOUR_STEP_LENGTH;
    }

    /// Write to the frame counter control register ($4017)
    ///
    /// Bit 7: Mode (0 = 4-step, 1 = 5-step)
    pub fn write_control(&mut self, value: u8) {
        self.mode = if (value & 0x80) != 0 {
            FrameMode::FiveStep
        } else {
            FrameMode::FourStep
        };
        self.counter = self.mode.length();
    }

    /// Advance the sequencer by one tick
    pub fn tick(&mut self) -> FrameTick {
        let tick = FrameTick {
            half_frame: self.counter == HALF_FRAME_STEP,
            sweep: self.counter < FIVE_STEP_LENGTH,
        };

        self.counter = self.counter.saturating_sub(1);
        if self.counter == 0 && self.wrap == SequencerWrap::Reload {
            self.counter = self.mode.length();
        }

        tick
    }

    /// Get the current mode
    pub fn mode(&self) -> FrameMode {
        self.mode
    }

    /// Get the current countdown value
    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Get the wrap policy
    pub fn wrap(&self) -> SequencerWrap {
        self.wrap
    }
}

impl Default for FrameSequencer {
    fn default() -> Self {
        Self::new(SequencerWrap::default())
    }
}
