//! APU constants and lookup tables

/// Length counter lookup table
/// Maps the 5-bit length counter load value to the actual counter value
pub const LENGTH_COUNTER_TABLE: [u8; 32] = [
    10, 254, 20, 2, 40, 4, 80, 6, 160, 8, 60, 10, 14, 12, 26, 14, 12, 16, 24, 18, 48, 20, 96, 22,
    192, 24, 72, 26, 16, 28, 32, 30,
];

/// Duty cycle patterns for square channels
/// Each pattern is 8 steps, representing one full cycle of the square wave
pub const DUTY_PATTERNS: [[u8; 8]; 4] = [
    [0, 1, 0, 0, 0, 0, 0, 0], // 12.5% duty cycle
    [0, 1, 1, 0, 0, 0, 0, 0], // 25% duty cycle
    [0, 1, 1, 1, 1, 0, 0, 0], // 50% duty cycle
    [1, 0, 0, 1, 1, 1, 1, 1], // 75% duty cycle (inverted 25%)
];

/// Triangle wave sequence for the triangle channel
/// Starts mid-ramp: 8 up to 15, 15 down to 0, then 0 back up to 7
pub const TRIANGLE_SEQUENCE: [u8; 32] = [
    8, 9, 10, 11, 12, 13, 14, 15, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 0, 1, 2, 3,
    4, 5, 6, 7,
];

/// Highest amplitude a channel can output
pub const MAX_VOLUME: u8 = 15;

/// Largest value the 11-bit channel timers can hold
pub const TIMER_MAX: u16 = 0x7FF;

/// Square timers below this period are ultrasonic and never clocked
pub const SQUARE_MIN_PERIOD: u16 = 8;

/// Frame sequencer step counts
pub const FOUR_STEP_LENGTH: u8 = 4;
pub const FIVE_STEP_LENGTH: u8 = 5;

/// Frame sequencer value at which length counters and sweep dividers are clocked
pub const HALF_FRAME_STEP: u8 = 4;

/// Default capacity of the output sample stream
pub const DEFAULT_STREAM_CAPACITY: usize = 100;

// Register offsets within the $4000-$40FF window
pub const SQUARE1_CONTROL: u8 = 0x00;
pub const SQUARE1_SWEEP: u8 = 0x01;
pub const SQUARE1_TIMER_LOW: u8 = 0x02;
pub const SQUARE1_TIMER_HIGH: u8 = 0x03;
pub const SQUARE2_CONTROL: u8 = 0x04;
pub const SQUARE2_SWEEP: u8 = 0x05;
pub const SQUARE2_TIMER_LOW: u8 = 0x06;
pub const SQUARE2_TIMER_HIGH: u8 = 0x07;
pub const TRIANGLE_CONTROL: u8 = 0x08;
pub const TRIANGLE_TIMER_LOW: u8 = 0x0A;
pub const TRIANGLE_TIMER_HIGH: u8 = 0x0B;
pub const STATUS: u8 = 0x15;
pub const FRAME_COUNTER: u8 = 0x17;
