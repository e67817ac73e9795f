// Bus interface - Memory-mapped device access
//
// The host CPU emulator owns the address bus. Every device on it, including
// the APU, exposes its registers through `MemoryMappedDevice`; the bus routes
// accesses in the APU window to the device and the device decodes them.

/// Start of the APU register window ($4000-$4017)
pub const APU_REGISTER_START: u16 = 0x4000;

/// End of the APU register window (inclusive)
pub const APU_REGISTER_END: u16 = 0x4017;

/// Check whether an address falls inside the APU register window
pub fn is_apu_register(addr: u16) -> bool {
    (APU_REGISTER_START..=APU_REGISTER_END).contains(&addr)
}

/// Trait for memory-mapped devices
///
/// This trait allows different components to be mapped into the CPU's address space.
pub trait MemoryMappedDevice {
    /// Read a byte from the device
    ///
    /// Some devices have side effects on read, so this method takes &mut self.
    ///
    /// # Arguments
    /// * `addr` - The address to read from (device-specific addressing)
    ///
    /// # Returns
    /// The byte value at the specified address
    fn read(&mut self, addr: u16) -> u8;

    /// Write a byte to the device
    ///
    /// # Arguments
    /// * `addr` - The address to write to (device-specific addressing)
    /// * `data` - The byte value to write
    fn write(&mut self, addr: u16, data: u8);
}
