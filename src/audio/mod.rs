// Audio module - APU sample mixing and output streaming
//
// This module provides:
// - Non-linear APU mixing into signed 16-bit samples
// - A bounded, blocking sample stream between the emulator and the audio backend
//
// # Usage
//
// ```no_run
// use nes_apu::apu::Apu;
// use std::thread;
//
// let mut apu = Apu::new();
// let stream = apu.take_stream().expect("stream already taken");
//
// // Audio backend drains at playback rate
// thread::spawn(move || {
//     while let Some(sample) = stream.recv() {
//         // ... hand `sample` to the device ...
//         let _ = sample;
//     }
// });
//
// // In emulator loop, once per audio tick:
// apu.push_sample();
// ```

pub mod mixer;
pub mod stream;

pub use mixer::{MixMode, Mixer};
pub use stream::{sample_stream, SampleSink, SampleStream};
