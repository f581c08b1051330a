//! Curves: the inter-inflection segments the signal is cut into.
//!
//! A [`Curve`] is a borrowed view into the caller's sample sequence plus a
//! cached energy (sum of squared samples). It never owns samples. When a
//! curve has to outlive the ring history that holds it — the tracked
//! waveform keeps its member curves across ring overwrites — it is copied
//! out as a [`CurveSnapshot`].

/// Sum of squared sample values over a segment.
///
/// Accumulates in `u128`: a full-scale `i32` square is close to 2^62, so a
/// 64-bit accumulator could overflow over a few hundred samples.
pub fn signal_energy(data: &[i32]) -> u128 {
    data.iter()
        .map(|&s| (s as i64 * s as i64) as u128)
        .sum()
}

/// One inter-inflection segment of the signal.
///
/// Invalid (blank) curves have an empty view and zero energy; comparisons
/// treat them as maximally dissimilar and never touch their data. The
/// energy is computed once at construction and is always consistent with
/// the view — the bounds of a curve are never changed in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct Curve<'a> {
    data: &'a [i32],
    energy: u128,
}

impl<'a> Curve<'a> {
    /// An uninitialized/blank curve: no data, zero energy, invalid.
    pub fn blank() -> Self {
        Curve { data: &[], energy: 0 }
    }

    /// Build a curve anchored at `start` spanning `length` samples of `seq`.
    ///
    /// A zero-length or out-of-range segment yields a blank curve; that is a
    /// normal edge state (the first/last partial segment of a stream), not
    /// an error. The view is clamped to the end of the sequence.
    pub fn new(seq: &'a [i32], start: usize, length: usize) -> Self {
        if length == 0 || start >= seq.len() {
            return Curve::blank();
        }
        let end = (start + length).min(seq.len());
        let data = &seq[start..end];
        Curve {
            data,
            energy: signal_energy(data),
        }
    }

    pub fn samples(&self) -> &'a [i32] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True iff the curve has backing data.
    pub fn is_valid(&self) -> bool {
        !self.data.is_empty()
    }

    pub fn energy(&self) -> u128 {
        self.energy
    }

    /// Copy the curve out of the borrowed sequence.
    pub fn to_snapshot(&self) -> CurveSnapshot {
        CurveSnapshot {
            data: self.data.to_vec(),
            energy: self.energy,
        }
    }
}

/// An owned value copy of a curve, safe to keep after the ring (or the
/// backing sample sequence) has moved on.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSnapshot {
    data: Vec<i32>,
    energy: u128,
}

impl CurveSnapshot {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the snapshot back as a [`Curve`] for comparisons.
    pub fn as_curve(&self) -> Curve<'_> {
        Curve {
            data: &self.data,
            energy: self.energy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_curve_is_invalid() {
        let c = Curve::blank();
        assert!(!c.is_valid());
        assert_eq!(c.len(), 0);
        assert_eq!(c.energy(), 0);
    }

    #[test]
    fn test_zero_length_is_blank() {
        let seq = vec![1, 2, 3];
        let c = Curve::new(&seq, 1, 0);
        assert!(!c.is_valid());
        assert_eq!(c.energy(), 0);
    }

    #[test]
    fn test_start_past_end_is_blank() {
        let seq = vec![1, 2, 3];
        let c = Curve::new(&seq, 5, 2);
        assert!(!c.is_valid());
    }

    #[test]
    fn test_energy_computed_at_construction() {
        let seq = vec![3, -4, 0, 2];
        let c = Curve::new(&seq, 0, 4);
        assert!(c.is_valid());
        assert_eq!(c.energy(), 9 + 16 + 4);
    }

    #[test]
    fn test_length_clamped_to_sequence() {
        let seq = vec![1, 1, 1, 1];
        let c = Curve::new(&seq, 2, 10);
        assert_eq!(c.len(), 2);
        assert_eq!(c.energy(), 2);
    }

    #[test]
    fn test_energy_no_overflow_full_scale() {
        // 500 full-scale samples: squares near 2^62 each, sum > 2^70
        let seq = vec![i32::MIN; 500];
        let c = Curve::new(&seq, 0, 500);
        let square = (i32::MIN as i64 * i32::MIN as i64) as u128;
        assert_eq!(c.energy(), square * 500);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let seq = vec![5, -7, 9];
        let c = Curve::new(&seq, 0, 3);
        let snap = c.to_snapshot();
        assert_eq!(snap.len(), 3);
        let back = snap.as_curve();
        assert_eq!(back.samples(), c.samples());
        assert_eq!(back.energy(), c.energy());
    }
}
