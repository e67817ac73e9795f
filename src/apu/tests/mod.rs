//! APU unit tests
//!
//! Tests that drive the whole `Apu` through its register interface,
//! organized by functionality.

use super::*;
use crate::bus::MemoryMappedDevice;

// ========================================
// Test Constants (APU Register Addresses)
// ========================================

pub(crate) const SQ1_CONTROL: u16 = 0x4000;
pub(crate) const SQ1_SWEEP: u16 = 0x4001;
pub(crate) const SQ1_LOW: u16 = 0x4002;
pub(crate) const SQ1_HIGH: u16 = 0x4003;
pub(crate) const SQ2_CONTROL: u16 = 0x4004;
pub(crate) const SQ2_SWEEP: u16 = 0x4005;
pub(crate) const SQ2_LOW: u16 = 0x4006;
pub(crate) const SQ2_HIGH: u16 = 0x4007;
pub(crate) const TRI_CONTROL: u16 = 0x4008;
pub(crate) const TRI_LOW: u16 = 0x400A;
pub(crate) const TRI_HIGH: u16 = 0x400B;
pub(crate) const STATUS: u16 = 0x4015;
pub(crate) const FRAME: u16 = 0x4017;

// ========================================
// Test Helper Functions
// ========================================

/// Enable square 1 at full fixed volume with the given period and length index
pub(crate) fn setup_square1(apu: &mut Apu, period: u16, length_index: u8) {
    apu.write(STATUS, 0x01);
    apu.write(SQ1_CONTROL, 0x3F);
    apu.write(SQ1_SWEEP, 0x00);
    apu.write(SQ1_LOW, period as u8);
    apu.write(SQ1_HIGH, (length_index << 3) | ((period >> 8) as u8 & 0x07));
}

// ========================================
// Test Modules
// ========================================
