// APU Benchmarks
// Performance benchmarks for oscillator clocking, sequencing and mixing

use criterion::{criterion_group, criterion_main, Criterion};
use nes_apu::audio::mixer::mix_pulse;
use nes_apu::{Apu, ApuConfig, MemoryMappedDevice, MixMode, Mixer};
use std::hint::black_box;

/// Set up an APU with both squares and the triangle sounding
fn sounding_apu() -> Apu {
    let mut apu = Apu::new();
    apu.write(0x4015, 0x07);
    apu.write(0x4000, 0xBF);
    apu.write(0x4002, 0xFD);
    apu.write(0x4003, 0x08);
    apu.write(0x4004, 0x7F);
    apu.write(0x4006, 0x7E);
    apu.write(0x4007, 0x08);
    apu.write(0x4008, 0x81);
    apu.write(0x400A, 0x40);
    apu.write(0x400B, 0x08);
    apu
}

/// Benchmark per-cycle oscillator clocking
fn bench_step_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("apu_step");

    group.bench_function("step_cycle", |b| {
        let mut apu = sounding_apu();
        b.iter(|| {
            apu.step_cycle();
            black_box(apu.square1().output());
        });
    });

    // One NTSC frame worth of CPU cycles
    group.bench_function("step_cycle_frame", |b| {
        let mut apu = sounding_apu();
        b.iter(|| {
            for _ in 0..29780 {
                apu.step_cycle();
            }
            black_box(apu.square2().output());
        });
    });

    group.bench_function("step_frame", |b| {
        let mut apu = sounding_apu();
        apu.write(0x4001, 0xF9);
        b.iter(|| {
            apu.step_frame();
            black_box(apu.frame_counter());
        });
    });

    group.finish();
}

/// Benchmark register decoding
fn bench_register_writes(c: &mut Criterion) {
    c.bench_function("register_write_sweep", |b| {
        let mut apu = Apu::new();
        b.iter(|| {
            for addr in 0x4000u16..=0x4017 {
                apu.write(black_box(addr), black_box(0x5A));
            }
        });
    });
}

/// Benchmark the mixer and sample stream
fn bench_mixing(c: &mut Criterion) {
    let mut group = c.benchmark_group("apu_mix");

    group.bench_function("mix_pulse", |b| {
        b.iter(|| mix_pulse(black_box(9), black_box(12)));
    });

    group.bench_function("mix_pulse_and_triangle", |b| {
        let mixer = Mixer::new(MixMode::PulseAndTriangle);
        b.iter(|| mixer.mix(black_box(9), black_box(12), black_box(7)));
    });

    group.bench_function("push_sample_drained", |b| {
        let mut config = ApuConfig::default();
        config.stream.capacity = 1024;
        let mut apu = Apu::with_config(&config);
        let stream = apu.take_stream().expect("fresh APU owns its stream");
        b.iter(|| {
            apu.push_sample();
            black_box(stream.try_recv());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_step_cycle,
    bench_register_writes,
    bench_mixing
);
criterion_main!(benches);
