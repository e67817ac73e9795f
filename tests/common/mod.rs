// Common test utilities for APU integration tests
//
// Helpers that drive an `Apu` the way a host emulator would: register
// writes through the bus trait, then cycle and frame stepping.

#![allow(dead_code)]

use nes_apu::{Apu, MemoryMappedDevice, SampleStream};

/// $4015 channel enable / status register
pub const STATUS: u16 = 0x4015;

/// $4017 frame sequencer mode register
pub const FRAME: u16 = 0x4017;

/// Base address of each square channel's four registers
pub const SQUARE1_BASE: u16 = 0x4000;
pub const SQUARE2_BASE: u16 = 0x4004;

/// Write the four registers of a square channel in order
pub fn write_square(apu: &mut Apu, base: u16, control: u8, sweep: u8, low: u8, high: u8) {
    apu.write(base, control);
    apu.write(base + 1, sweep);
    apu.write(base + 2, low);
    apu.write(base + 3, high);
}

/// Run `count` CPU cycles
pub fn run_cycles(apu: &mut Apu, count: usize) {
    for _ in 0..count {
        apu.step_cycle();
    }
}

/// Run `count` frame sequencer ticks
pub fn run_frames(apu: &mut Apu, count: usize) {
    for _ in 0..count {
        apu.step_frame();
    }
}

/// Push `count` samples and collect them back from the stream
///
/// `count` must not exceed the stream capacity, or this blocks forever.
pub fn capture_samples(apu: &mut Apu, stream: &SampleStream, count: usize) -> Vec<i16> {
    for _ in 0..count {
        apu.push_sample();
    }
    stream.try_iter().collect()
}
