// Audio mixer - Implements the APU non-linear mixing formula
//
// The NES combines its channels through a resistor network whose output is
// not a simple sum. The pulse pair is approximated by a rational function of
// the summed amplitudes; this core emits the result as signed 16-bit PCM.

use serde::{Deserialize, Serialize};

/// Output gain applied after the non-linear stage
const OUTPUT_GAIN: f64 = 0.98411;

/// Scale from the mixer's [0.0, ~1.0] range to 16-bit amplitudes
const OUTPUT_SCALE: f64 = 50000.0;

/// Which channels feed the final mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixMode {
    /// Only the two square channels are mixed
    #[default]
    PulseOnly,
    /// The triangle channel is added through the TND network term
    PulseAndTriangle,
}

/// APU mixer implementing the non-linear mixing formula
///
/// ```text
/// pulse_out = 95.52 / (8128 / (square1 + square2) + 100)
/// tnd_out   = 159.79 / (1 / (triangle / 8227) + 100)
/// output    = trunc((pulse_out [+ tnd_out]) * 0.98411 * 50000)
/// ```
///
/// Zero inputs short-circuit each term to 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mixer {
    mode: MixMode,
}

impl Mixer {
    /// Create a new mixer for the given mode
    pub fn new(mode: MixMode) -> Self {
        Self { mode }
    }

    /// Get the mixing mode
    pub fn mode(&self) -> MixMode {
        self.mode
    }

    /// Mix the channel amplitudes into one output sample
    ///
    /// # Arguments
    ///
    /// * `square1` - Square channel 1 output (0-15)
    /// * `square2` - Square channel 2 output (0-15)
    /// * `triangle` - Triangle channel output (0-15), ignored in `PulseOnly`
    pub fn mix(&self, square1: u8, square2: u8, triangle: u8) -> i16 {
        let mut level = mix_pulse(square1, square2);

        if self.mode == MixMode::PulseAndTriangle {
            level += mix_triangle(triangle);
        }

        scale(level)
    }
}

/// Mix the square channels using the non-linear pulse formula
///
/// Returns the analog level in range [0.0, ~0.26]
pub fn mix_pulse(square1: u8, square2: u8) -> f64 {
    let pulse_sum = square1 as f64 + square2 as f64;

    if pulse_sum == 0.0 {
        return 0.0;
    }

    95.52 / (8128.0 / pulse_sum + 100.0)
}

/// Triangle contribution through the TND network (noise and DMC silent)
pub fn mix_triangle(triangle: u8) -> f64 {
    if triangle == 0 {
        return 0.0;
    }

    let tnd_sum = triangle as f64 / 8227.0;
    159.79 / (1.0 / tnd_sum + 100.0)
}

/// Scale an analog level to a 16-bit sample, truncating toward zero
fn scale(level: f64) -> i16 {
    let mut v = level;
    v *= OUTPUT_GAIN;
    v *= OUTPUT_SCALE;
    v as i16
}
