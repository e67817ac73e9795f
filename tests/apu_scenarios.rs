// APU end-to-end scenarios
//
// These tests drive the APU only through its public surface: register
// accesses over the bus trait, cycle/frame stepping, and the sample stream.

mod common;

use common::*;
use nes_apu::{Apu, ApuConfig, MemoryMappedDevice, Mixer, SequencerWrap};
use std::thread;
use std::time::Duration;

#[test]
fn scenario_duty_advances_after_timer_reload() {
    let mut apu = Apu::new();

    write_square(&mut apu, SQUARE1_BASE, 0x3F, 0x00, 0x00, 0x08);
    apu.write(STATUS, 0x01);

    assert_eq!(apu.square1().duty_position(), 0);
    assert_eq!(apu.square1().length(), 254);

    // A zero period is below the ultrasonic threshold: nothing is clocked
    run_cycles(&mut apu, 64);
    assert_eq!(apu.square1().duty_position(), 0);

    // With an audible period the first reload moves the duty step to 1
    apu.write(0x4002, 0x08);
    run_cycles(&mut apu, 1);
    assert_eq!(apu.square1().duty_position(), 1);

    // ...and it stays there until the (8 + 1) * 2 cycle reload runs out
    run_cycles(&mut apu, 17);
    assert_eq!(apu.square1().duty_position(), 1);
    run_cycles(&mut apu, 1);
    assert_eq!(apu.square1().duty_position(), 2);
}

#[test]
fn scenario_length_counter_runs_out() {
    let mut apu = Apu::new();
    let stream = apu.take_stream().unwrap();
    apu.write(STATUS, 0x01);
    // Length disable set: it does not halt the countdown by default
    write_square(&mut apu, SQUARE1_BASE, 0xBF, 0x00, 0x20, 0xF8);

    assert_eq!(apu.square1().length(), 30);
    assert_eq!(apu.read(STATUS) & 0x01, 0x01);

    run_cycles(&mut apu, 1);
    assert_eq!(apu.square1().output(), 15);

    // 30 half frames, each 4-step frame has one tick with the counter at 4
    for _ in 0..30 {
        assert_eq!(apu.frame_counter(), 4);
        run_frames(&mut apu, 4);
    }
    assert_eq!(apu.square1().length(), 0);
    assert_eq!(apu.read(STATUS) & 0x01, 0x00);

    run_cycles(&mut apu, 200);
    assert_eq!(apu.square1().output(), 0);
    assert!(capture_samples(&mut apu, &stream, 10).iter().all(|&s| s == 0));
}

#[test]
fn scenario_frame_mode_select() {
    let mut apu = Apu::new();

    apu.write(FRAME, 0x80);
    assert_eq!(apu.frame_counter(), 5);

    apu.write(FRAME, 0x00);
    assert_eq!(apu.frame_counter(), 4);
}

#[test]
fn scenario_disable_silences_channel() {
    let mut apu = Apu::new();
    let stream = apu.take_stream().unwrap();
    apu.write(STATUS, 0x03);
    write_square(&mut apu, SQUARE1_BASE, 0xBF, 0x00, 0x40, 0x08);
    write_square(&mut apu, SQUARE2_BASE, 0xBF, 0x00, 0x40, 0x08);

    run_cycles(&mut apu, 1);
    assert_eq!(capture_samples(&mut apu, &stream, 1), vec![12671]);

    apu.write(STATUS, 0x02);
    assert_eq!(apu.square1().length(), 0);
    assert_eq!(apu.read(STATUS), 0x02);

    // Only square 2 is left in the mix while square 1 stays off
    let square2_alone = Mixer::default().mix(0, 15, 0);
    run_cycles(&mut apu, 1);
    assert_eq!(apu.square1().output(), 0);
    assert_eq!(apu.square2().output(), 15);
    assert_eq!(capture_samples(&mut apu, &stream, 1), vec![square2_alone]);
}

#[test]
fn scenario_sweep_slides_pitch_down() {
    let mut apu = Apu::new();
    apu.write(STATUS, 0x01);
    // Sweep enabled, divider 8, negate, shift 1
    write_square(&mut apu, SQUARE1_BASE, 0x1F, 0xF9, 0x00, 0xFC);
    assert_eq!(apu.square1().timer_period(), 0x400);

    run_frames(&mut apu, 4);
    assert_eq!(apu.square1().timer_period(), 0x400 >> 4);
}

#[test]
fn scenario_hold_wrap_from_config() {
    let config = ApuConfig::from_toml_str("[sequencer]\nwrap = \"hold\"\n").unwrap();
    let mut apu = Apu::with_config(&config);
    assert_eq!(apu.frame_sequencer().wrap(), SequencerWrap::Hold);

    apu.write(STATUS, 0x01);
    write_square(&mut apu, SQUARE1_BASE, 0x1F, 0x00, 0x40, 0xF8);

    run_frames(&mut apu, 100);
    assert_eq!(apu.frame_counter(), 0);
    assert_eq!(apu.square1().length(), 29);
}

#[test]
fn scenario_audio_thread_drains_stream() {
    let mut config = ApuConfig::default();
    config.stream.capacity = 8;
    let mut apu = Apu::with_config(&config);

    apu.write(STATUS, 0x01);
    write_square(&mut apu, SQUARE1_BASE, 0xBF, 0x00, 0x10, 0x08);

    let stream = apu.take_stream().unwrap();
    let backend = thread::spawn(move || {
        let mut received = Vec::new();
        while let Some(sample) = stream.recv_timeout(Duration::from_millis(200)) {
            received.push(sample);
        }
        received
    });

    // Far more samples than the queue holds: the producer is paced by the consumer
    let mut produced = Vec::new();
    for _ in 0..500 {
        run_cycles(&mut apu, 4);
        produced.push(apu.mix());
        apu.push_sample();
    }

    let received = backend.join().unwrap();
    assert_eq!(received, produced);
    assert_eq!(apu.samples_pushed(), 500);
}
