//! Finite-difference derivatives and the inflection-point predicate.
//!
//! Derivatives are taken over a fixed stride of `delta` samples rather than
//! adjacent samples, which makes them far less sensitive to single-sample
//! noise. Inflection points (sign changes of the second derivative) are the
//! segmentation boundaries between curves.

/// First derivative of the sample sequence at `pos`, over a stride of
/// `delta` samples: `(seq[pos + delta] - seq[pos]) / delta`.
///
/// Panics if `pos + delta` is out of bounds; the caller must only ask for
/// positions with enough margin.
pub fn derivative(seq: &[i32], pos: usize, delta: usize) -> f64 {
    assert!(delta >= 1, "derivative stride must be at least 1");
    assert!(
        pos + delta < seq.len(),
        "derivative at {} needs {} samples of right margin (len {})",
        pos,
        delta,
        seq.len()
    );
    (seq[pos + delta] - seq[pos]) as f64 / delta as f64
}

/// Second derivative at `pos`: the difference between the forward derivative
/// at `pos` and the one at `pos - delta`, again over the stride.
///
/// Panics if `pos < delta` or `pos + delta` is out of bounds.
pub fn second_derivative(seq: &[i32], pos: usize, delta: usize) -> f64 {
    assert!(
        pos >= delta,
        "second derivative at {} needs {} samples of left margin",
        pos,
        delta
    );
    (derivative(seq, pos, delta) - derivative(seq, pos - delta, delta)) / delta as f64
}

/// Whether the second derivative changes sign between `pos` and `pos + 1`.
///
/// The boundary policy is inclusive on the "from" side only:
/// `(sd0 <= 0 && sd1 > 0) || (sd0 >= 0 && sd1 < 0)`. An exact zero counts as
/// the departure point of both branches, so a genuine sign change passing
/// through zero fires exactly once and a zero that does not change sign
/// never fires twice. Callers must not tighten or loosen this.
///
/// Requires `pos >= delta` and `pos + 1 + delta < seq.len()`.
pub fn is_inflection(seq: &[i32], pos: usize, delta: usize) -> bool {
    let sd0 = second_derivative(seq, pos, delta);
    let sd1 = second_derivative(seq, pos + 1, delta);

    (sd0 <= 0.0 && sd1 > 0.0) || (sd0 >= 0.0 && sd1 < 0.0)
}
