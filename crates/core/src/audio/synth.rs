//! Synthetic test signals: sines, tiled templates, seeded noise.
//!
//! Integer-sample generators used by the CLI `synth` command and by tests
//! that need a signal with a known period.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One cycle of a sine wave as integer samples.
pub fn sine_cycle(period: usize, amplitude: f64) -> Vec<i32> {
    (0..period)
        .map(|i| {
            (amplitude * (std::f64::consts::TAU * i as f64 / period as f64).sin()).round() as i32
        })
        .collect()
}

/// A sine wave of `frequency` Hz lasting `duration_s` seconds.
pub fn sine(frequency: f64, sample_rate: u32, amplitude: f64, duration_s: f64) -> Vec<i32> {
    let n_samples = (duration_s * sample_rate as f64) as usize;
    (0..n_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (amplitude * (std::f64::consts::TAU * frequency * t).sin()).round() as i32
        })
        .collect()
}

/// Tile `template` end to end `copies` times, with silence on either side.
///
/// Every copy is bit-identical, so the result repeats exactly with period
/// `template.len()`.
pub fn repeated_template(
    template: &[i32],
    copies: usize,
    lead_silence: usize,
    trail_silence: usize,
) -> Vec<i32> {
    let mut out = Vec::with_capacity(lead_silence + copies * template.len() + trail_silence);
    out.extend(std::iter::repeat(0).take(lead_silence));
    for _ in 0..copies {
        out.extend_from_slice(template);
    }
    out.extend(std::iter::repeat(0).take(trail_silence));
    out
}

/// Add uniform white noise of peak `level` to the samples in place.
///
/// Seeded for reproducibility; `None` seeds from entropy.
pub fn add_noise(samples: &mut [i32], level: f64, seed: Option<u64>) {
    if level <= 0.0 {
        return;
    }
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    for sample in samples.iter_mut() {
        let noise = rng.gen_range(-level..level);
        *sample = sample.saturating_add(noise.round() as i32);
    }
}
