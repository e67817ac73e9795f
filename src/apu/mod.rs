//! APU module - Audio Processing Unit implementation
//!
//! The `Apu` owns both square channels, the triangle channel, the frame
//! sequencer and the producer end of the output stream. It has no thread of
//! its own: the host emulator drives it through register accesses
//! ([`MemoryMappedDevice`](crate::bus::MemoryMappedDevice)), `step_cycle`,
//! `step_frame` and `push_sample`, all from a single thread.

pub mod channels;
pub mod components;
pub mod constants;
pub mod registers;

#[cfg(test)]
mod tests;

pub use channels::{SquareChannel, TriangleChannel};
pub use components::{FrameMode, FrameSequencer, FrameTick, SequencerWrap};
pub use registers::ApuRegister;

use crate::audio::{sample_stream, Mixer, SampleSink, SampleStream};
use crate::config::ApuConfig;

/// APU structure representing the Audio Processing Unit state
#[derive(Debug)]
pub struct Apu {
    /// Square channel 1
    pub(crate) square1: SquareChannel,
    /// Square channel 2
    pub(crate) square2: SquareChannel,
    /// Triangle channel
    pub(crate) triangle: TriangleChannel,
    /// Noise enable flag (stored, channel not emulated)
    pub(crate) noise_enabled: bool,
    /// DMC enable flag (stored, channel not emulated)
    pub(crate) dmc_enabled: bool,
    /// Frame sequencer
    pub(crate) frame_sequencer: FrameSequencer,
    /// Whether the square length-disable bit halts length counters
    length_halt: bool,
    /// Output mixer
    mixer: Mixer,
    /// Producer end of the output stream
    sink: SampleSink,
    /// Consumer handle, held until `take_stream()` hands it out
    stream: Option<SampleStream>,
    /// Samples emitted since creation
    samples_pushed: u64,
}

impl Apu {
    /// Create a new APU with the default configuration
    pub fn new() -> Self {
        Self::with_config(&ApuConfig::default())
    }

    /// Create a new APU from a configuration
    pub fn with_config(config: &ApuConfig) -> Self {
        let (sink, stream) = sample_stream(config.stream.capacity);

        log::debug!(
            "APU created: stream capacity {}, sequencer wrap {:?}, length halt {}, mix {:?}",
            sink.capacity(),
            config.sequencer.wrap,
            config.sequencer.length_halt,
            config.mixer.mode
        );

        Apu {
            square1: SquareChannel::new(),
            square2: SquareChannel::new(),
            triangle: TriangleChannel::new(),
            noise_enabled: false,
            dmc_enabled: false,
            frame_sequencer: FrameSequencer::new(config.sequencer.wrap),
            length_halt: config.sequencer.length_halt,
            mixer: Mixer::new(config.mixer.mode),
            sink,
            stream: Some(stream),
            samples_pushed: 0,
        }
    }

    /// Reset all channel state to power-up values
    ///
    /// The output stream and configuration are kept; queued samples stay
    /// queued.
    pub fn reset(&mut self) {
        self.square1 = SquareChannel::new();
        self.square2 = SquareChannel::new();
        self.triangle = TriangleChannel::new();
        self.noise_enabled = false;
        self.dmc_enabled = false;
        self.frame_sequencer.reset();
        log::debug!("APU reset");
    }

    /// Hand out the output sample stream
    ///
    /// Returns the handle once; later calls return None. Until it is taken
    /// the APU holds it, so pushes queue up (and block once full). After the
    /// taker drops it, pushes are dropped.
    pub fn take_stream(&mut self) -> Option<SampleStream> {
        self.stream.take()
    }

    /// Get the output stream capacity
    pub fn stream_capacity(&self) -> usize {
        self.sink.capacity()
    }

    /// Clock the oscillators (called once per CPU cycle)
    pub fn step_cycle(&mut self) {
        if self.square1.is_clocked() {
            self.square1.clock();
        }
        if self.square2.is_clocked() {
            self.square2.clock();
        }
        self.triangle.clock();
    }

    /// Advance the frame sequencer by one tick
    pub fn step_frame(&mut self) {
        let tick = self.frame_sequencer.tick();

        if tick.half_frame {
            for square in [&mut self.square1, &mut self.square2] {
                square.clock_length_counter(self.length_halt);
                square.clock_sweep_divider();
            }
        }

        if tick.sweep {
            self.square1.clock_sweep();
            self.square2.clock_sweep();
        }
    }

    /// Mix the current channel outputs into one sample
    pub fn mix(&self) -> i16 {
        self.mixer.mix(
            self.square1.output(),
            self.square2.output(),
            self.triangle.output(),
        )
    }

    /// Mix and emit one sample (called at the audio sample rate)
    ///
    /// Blocks while the output stream is full.
    pub fn push_sample(&mut self) {
        let sample = self.mix();
        if self.sink.push(sample) {
            self.samples_pushed += 1;
        } else {
            log::warn!("APU sample stream disconnected, dropping sample");
        }
    }

    /// $4015 write: channel enable flags
    ///
    /// Disabling a channel clears its length counter.
    pub(crate) fn write_control_flags(&mut self, data: u8) {
        self.square1.set_enabled((data & 0x01) != 0);
        self.square2.set_enabled((data & 0x02) != 0);
        self.triangle.set_enabled((data & 0x04) != 0);
        self.noise_enabled = (data & 0x08) != 0;
        self.dmc_enabled = (data & 0x10) != 0;
        log::debug!("APU channel enables = {:05b}", data & 0x1F);
    }

    /// $4015 read: length counter status
    ///
    /// Bit 0: square 1, bit 1: square 2, bit 3: triangle
    pub(crate) fn read_status(&self) -> u8 {
        let mut status = 0;
        if self.square1.is_active() {
            status |= 0x01;
        }
        if self.square2.is_active() {
            status |= 0x02;
        }
        if self.triangle.is_active() {
            status |= 0x08;
        }
        status
    }

    /// $4017 write: frame sequencer mode
    pub(crate) fn write_frame_mode(&mut self, data: u8) {
        self.frame_sequencer.write_control(data);
        log::debug!("APU frame sequencer mode {:?}", self.frame_sequencer.mode());
    }

    /// Get square channel 1
    pub fn square1(&self) -> &SquareChannel {
        &self.square1
    }

    /// Get square channel 2
    pub fn square2(&self) -> &SquareChannel {
        &self.square2
    }

    /// Get the triangle channel
    pub fn triangle(&self) -> &TriangleChannel {
        &self.triangle
    }

    /// Get the frame sequencer
    pub fn frame_sequencer(&self) -> &FrameSequencer {
        &self.frame_sequencer
    }

    /// Get the frame sequencer countdown value
    pub fn frame_counter(&self) -> u8 {
        self.frame_sequencer.counter()
    }

    /// Check the noise enable flag
    pub fn noise_enabled(&self) -> bool {
        self.noise_enabled
    }

    /// Check the DMC enable flag
    pub fn dmc_enabled(&self) -> bool {
        self.dmc_enabled
    }

    /// Check whether the length-disable bit halts length counters
    pub fn length_halt(&self) -> bool {
        self.length_halt
    }

    /// Get the mixer
    pub fn mixer(&self) -> &Mixer {
        &self.mixer
    }

    /// Get the number of samples emitted
    pub fn samples_pushed(&self) -> u64 {
        self.samples_pushed
    }
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}
