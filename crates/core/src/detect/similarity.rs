//! Curve similarity: zero-padded squared difference and the threshold
//! equivalence test.

use crate::detect::curve::Curve;

/// Default threshold for [`is_same_curve`]: curves are "the same" when the
/// energy-normalized squared difference is strictly below this.
pub const CURVE_ERROR_THRESHOLD: f64 = 0.01;

/// Sum of squared per-sample differences between two curves.
///
/// The loop runs over `max(len1, len2)`; indices beyond a curve's own
/// length read as zero, so a longer curve is compared against a zero-padded
/// shorter one. If exactly one curve is valid the result is that curve's
/// own energy (its distance from an all-zero curve); if neither is valid
/// the curves are maximally dissimilar.
pub fn squared_difference(c1: &Curve, c2: &Curve) -> u128 {
    match (c1.is_valid(), c2.is_valid()) {
        (true, true) => {
            let a = c1.samples();
            let b = c2.samples();
            let len = a.len().max(b.len());
            let mut sum = 0u128;
            for i in 0..len {
                let x = a.get(i).copied().unwrap_or(0) as i64;
                let y = b.get(i).copied().unwrap_or(0) as i64;
                let d = x - y;
                sum += (d * d) as u128;
            }
            sum
        }
        (true, false) => c1.energy(),
        (false, true) => c2.energy(),
        (false, false) => u128::MAX,
    }
}

/// Whether two curves are similar enough to be considered the same curve.
///
/// The squared difference is normalized by the larger of the two energies.
/// A zero reference energy (both curves silent or invalid) never divides
/// and never compares equal: curves with no signal are treated as maximally
/// different rather than trivially identical.
pub fn is_same_curve(c1: &Curve, c2: &Curve, threshold: f64) -> bool {
    let ref_energy = c1.energy().max(c2.energy());
    if ref_energy == 0 {
        return false;
    }
    let error = squared_difference(c1, c2) as f64 / ref_energy as f64;
    error < threshold
}
