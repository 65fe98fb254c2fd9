//! Chart series samplers
//!
//! Samples a named function over a numeric range at N points, with optional
//! additive noise. The `binary` sampler is stateful within one call: it
//! holds a 0/1 level and flips with a fixed probability per sample, so the
//! series shows runs like a digital signal rather than per-sample noise.

use rand::Rng;

use super::Point2;

/// Probability that the binary sampler flips its level at a sample.
const BINARY_FLIP: f64 = 0.2;

/// Clamp bound for the tangent sampler.
const TAN_LIMIT: f64 = 3.0;

/// Named chart sampling functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveFn {
    Sin,
    Cos,
    Tan,
    Square,
    Sqrt,
    Linear,
    Random,
    Binary,
}

impl WaveFn {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sin" => Some(WaveFn::Sin),
            "cos" => Some(WaveFn::Cos),
            "tan" => Some(WaveFn::Tan),
            "square" => Some(WaveFn::Square),
            "sqrt" => Some(WaveFn::Sqrt),
            "linear" => Some(WaveFn::Linear),
            "random" => Some(WaveFn::Random),
            "binary" => Some(WaveFn::Binary),
            _ => None,
        }
    }
}

/// Sample `func` over `[from, to]` at `samples` evenly spaced points.
///
/// Degenerate ranges are widened and sample counts clamped to at least two;
/// every emitted value is finite.
pub fn sample_series(
    func: WaveFn,
    from: f64,
    to: f64,
    samples: usize,
    noise: f64,
    rng: &mut impl Rng,
) -> Vec<Point2> {
    let samples = samples.max(2);
    let from = if from.is_finite() { from } else { 0.0 };
    let to = if to.is_finite() && to > from { to } else { from + 1.0 };
    let step = (to - from) / (samples - 1) as f64;

    // Sticky level for the binary process, local to this invocation
    let mut level = if matches!(func, WaveFn::Binary) && rng.gen_bool(0.5) {
        1.0
    } else {
        0.0
    };

    (0..samples)
        .map(|i| {
            let x = from + step * i as f64;
            let mut y = match func {
                WaveFn::Sin => x.sin(),
                WaveFn::Cos => x.cos(),
                WaveFn::Tan => x.tan().clamp(-TAN_LIMIT, TAN_LIMIT),
                WaveFn::Square => x * x,
                WaveFn::Sqrt => x.abs().sqrt(),
                WaveFn::Linear => x,
                WaveFn::Random => rng.gen::<f64>(),
                WaveFn::Binary => {
                    if rng.gen_bool(BINARY_FLIP) {
                        level = 1.0 - level;
                    }
                    level
                }
            };
            if noise > 0.0 {
                y += rng.gen_range(-noise..=noise);
            }
            if !y.is_finite() {
                y = 0.0;
            }
            Point2::new(x, y)
        })
        .collect()
}
