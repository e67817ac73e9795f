// NES APU Library
// Pulse and triangle synthesis core with a bounded sample stream

// Public modules
pub mod apu;
pub mod audio;
pub mod bus;
pub mod config;
pub mod error;

// Re-export main types for convenience
pub use apu::{Apu, ApuRegister, FrameMode, SequencerWrap, SquareChannel, TriangleChannel};
pub use audio::{sample_stream, MixMode, Mixer, SampleSink, SampleStream};
pub use bus::MemoryMappedDevice;
pub use config::ApuConfig;
pub use error::ConfigError;
