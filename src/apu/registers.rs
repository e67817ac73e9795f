//! APU register decoding
//!
//! Addresses are masked to their low byte, so the registers alias across
//! every page the bus forwards. Offsets without a register decode to `None`:
//! writes to them are dropped and reads return 0.

use crate::apu::constants::*;
use crate::apu::Apu;
use crate::bus::MemoryMappedDevice;

/// CPU-visible APU registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApuRegister {
    /// $4000 - duty, length disable, envelope
    Square1Control,
    /// $4001 - sweep unit
    Square1Sweep,
    /// $4002 - timer low byte
    Square1TimerLow,
    /// $4003 - timer high bits and length load
    Square1TimerHigh,
    /// $4004
    Square2Control,
    /// $4005
    Square2Sweep,
    /// $4006
    Square2TimerLow,
    /// $4007
    Square2TimerHigh,
    /// $4008 - control flag and linear counter reload
    TriangleControl,
    /// $400A
    TriangleTimerLow,
    /// $400B
    TriangleTimerHigh,
    /// $4015 - channel enables (write) / status (read)
    Status,
    /// $4017 - frame sequencer mode
    FrameCounter,
}

impl ApuRegister {
    /// Decode a bus address into a register
    pub fn decode(addr: u16) -> Option<Self> {
        let register = match (addr & 0xFF) as u8 {
            SQUARE1_CONTROL => ApuRegister::Square1Control,
            SQUARE1_SWEEP => ApuRegister::Square1Sweep,
            SQUARE1_TIMER_LOW => ApuRegister::Square1TimerLow,
            SQUARE1_TIMER_HIGH => ApuRegister::Square1TimerHigh,
            SQUARE2_CONTROL => ApuRegister::Square2Control,
            SQUARE2_SWEEP => ApuRegister::Square2Sweep,
            SQUARE2_TIMER_LOW => ApuRegister::Square2TimerLow,
            SQUARE2_TIMER_HIGH => ApuRegister::Square2TimerHigh,
            TRIANGLE_CONTROL => ApuRegister::TriangleControl,
            TRIANGLE_TIMER_LOW => ApuRegister::TriangleTimerLow,
            TRIANGLE_TIMER_HIGH => ApuRegister::TriangleTimerHigh,
            STATUS => ApuRegister::Status,
            FRAME_COUNTER => ApuRegister::FrameCounter,
            _ => return None,
        };
        Some(register)
    }
}

impl MemoryMappedDevice for Apu {
    fn read(&mut self, addr: u16) -> u8 {
        match ApuRegister::decode(addr) {
            Some(ApuRegister::Status) => self.read_status(),
            _ => 0,
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        let Some(register) = ApuRegister::decode(addr) else {
            log::trace!("APU write to unmapped ${:04X} = ${:02X}", addr, data);
            return;
        };

        log::trace!("APU write {:?} = ${:02X}", register, data);

        match register {
            ApuRegister::Square1Control => self.square1.write_register_0(data),
            ApuRegister::Square1Sweep => self.square1.write_register_1(data),
            ApuRegister::Square1TimerLow => self.square1.write_register_2(data),
            ApuRegister::Square1TimerHigh => self.square1.write_register_3(data),
            ApuRegister::Square2Control => self.square2.write_register_0(data),
            ApuRegister::Square2Sweep => self.square2.write_register_1(data),
            ApuRegister::Square2TimerLow => self.square2.write_register_2(data),
            ApuRegister::Square2TimerHigh => self.square2.write_register_3(data),
            ApuRegister::TriangleControl => self.triangle.write_register_0(data),
            ApuRegister::TriangleTimerLow => self.triangle.write_register_2(data),
            ApuRegister::TriangleTimerHigh => self.triangle.write_register_3(data),
            ApuRegister::Status => self.write_control_flags(data),
            ApuRegister::FrameCounter => self.write_frame_mode(data),
        }
    }
}
