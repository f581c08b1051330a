//! Cycle search: find the shortest block of consecutive curves that exactly
//! repeats the block immediately preceding it.
//!
//! The search walks candidate offsets `d = 1, 2, 3, …` in order, so the
//! first fully verified period is also the smallest — a longer period is
//! never reported while a shorter valid one exists.

use crate::detect::ring::CurveRing;
use crate::detect::similarity::is_same_curve;

/// Result of a cycle search anchored at one curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A repeating cycle of this many curves ends at the anchor.
    Cycle(usize),
    /// A repeating cycle was found but exceeds the configured maximum
    /// waveform length; callers must discard it.
    TooLong(usize),
    /// Every candidate period was exhausted without a match.
    NoCycle,
}

/// Search backward from `anchor` for the smallest period `d` such that the
/// `d`-long block of curves ending at `anchor` is identical (under
/// [`is_same_curve`]) to the block immediately preceding it.
///
/// For each candidate offset the anchor curve is compared to its partner
/// `d` slots back; on a hit, both pointers walk backward in lock-step and
/// every pair along the way must match, down to and including the pair at
/// the partner index itself. Verifying a period `d` therefore reads `2d + 1`
/// curves of history. Blank slots never match anything, so a ring that has
/// not yet filled simply exhausts.
///
/// Periods longer than `max_period` are reported as [`CycleOutcome::TooLong`]
/// rather than silently accepted: a cycle that long is assumed to be
/// coincidence or degenerate input, not a usable waveform.
pub fn find_cycle(
    ring: &CurveRing,
    anchor: usize,
    max_period: usize,
    threshold: f64,
) -> CycleOutcome {
    let cap = ring.capacity();
    let i = anchor % cap;

    for d in 1..cap {
        let j = ring.back(i, d);
        if !is_same_curve(ring.get(i), ring.get(j), threshold) {
            continue;
        }

        let mut confirmed = true;
        for step in 1..=d {
            let m = ring.back(i, step);
            let n = ring.back(j, step);
            if !is_same_curve(ring.get(m), ring.get(n), threshold) {
                confirmed = false;
                break;
            }
        }

        if confirmed {
            return if d > max_period {
                CycleOutcome::TooLong(d)
            } else {
                CycleOutcome::Cycle(d)
            };
        }
    }

    CycleOutcome::NoCycle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::curve::Curve;
    use crate::detect::similarity::CURVE_ERROR_THRESHOLD;

    // Three mutually dissimilar shapes with identical energy
    const A: [i32; 8] = [1000, 1000, 1000, 1000, 1000, 1000, 1000, 1000];
    const B: [i32; 8] = [-1000, -1000, -1000, -1000, -1000, -1000, -1000, -1000];
    const C: [i32; 8] = [1000, -1000, 1000, -1000, 1000, -1000, 1000, -1000];

    fn ring_from(pattern: &[&'static [i32]], capacity: usize) -> CurveRing<'static> {
        let mut ring = CurveRing::new(capacity);
        for (i, data) in pattern.iter().enumerate() {
            ring.set(i, Curve::new(data, 0, data.len()));
        }
        ring
    }

    #[test]
    fn test_simple_repeat_found() {
        // B A B A B: verifying period 2 at anchor 4 walks history down to
        // index 0 (2d + 1 curves)
        let ring = ring_from(&[&B, &A, &B, &A, &B], 12);
        let outcome = find_cycle(&ring, 4, 15, CURVE_ERROR_THRESHOLD);
        assert_eq!(outcome, CycleOutcome::Cycle(2));
    }

    #[test]
    fn test_shortest_period_wins() {
        // A 3-curve pattern repeated three times also verifies as a
        // 6-curve cycle; the search must report 3, never 6.
        let ring = ring_from(&[&A, &B, &C, &A, &B, &C, &A, &B, &C], 16);
        let outcome = find_cycle(&ring, 8, 15, CURVE_ERROR_THRESHOLD);
        assert_eq!(outcome, CycleOutcome::Cycle(3));
    }

    #[test]
    fn test_over_length_reported_too_long() {
        let ring = ring_from(&[&A, &B, &C, &A, &B, &C, &A, &B, &C], 16);
        let outcome = find_cycle(&ring, 8, 2, CURVE_ERROR_THRESHOLD);
        assert_eq!(outcome, CycleOutcome::TooLong(3));
    }

    #[test]
    fn test_no_cycle_on_distinct_curves() {
        let ring = ring_from(&[&A, &B, &C], 8);
        assert_eq!(
            find_cycle(&ring, 2, 15, CURVE_ERROR_THRESHOLD),
            CycleOutcome::NoCycle
        );
    }

    #[test]
    fn test_blank_ring_exhausts() {
        let ring = CurveRing::new(8);
        assert_eq!(
            find_cycle(&ring, 0, 15, CURVE_ERROR_THRESHOLD),
            CycleOutcome::NoCycle
        );
    }

    #[test]
    fn test_partial_repeat_rejected() {
        // Anchor matches its partner but an intermediate pair differs
        let ring = ring_from(&[&A, &A, &C, &B, &A, &C, &A], 12);
        let outcome = find_cycle(&ring, 6, 15, CURVE_ERROR_THRESHOLD);
        assert_ne!(outcome, CycleOutcome::Cycle(2));
    }

    #[test]
    fn test_wraparound_cycle() {
        // Pattern written through the wrap point of a small ring
        let mut ring = CurveRing::new(6);
        let pattern: [&'static [i32]; 9] = [&A, &B, &A, &B, &A, &B, &A, &B, &A];
        for (i, data) in pattern.iter().enumerate() {
            ring.set(i, Curve::new(data, 0, data.len()));
        }
        // Indices 6..8 overwrote slots 0..2; anchor at slot 8 % 6 == 2
        let outcome = find_cycle(&ring, 8, 15, CURVE_ERROR_THRESHOLD);
        assert_eq!(outcome, CycleOutcome::Cycle(2));
    }

    #[test]
    fn test_idempotent_on_unchanged_ring() {
        let ring = ring_from(&[&A, &B, &C, &A, &B, &C, &A, &B, &C], 16);
        let first = find_cycle(&ring, 8, 15, CURVE_ERROR_THRESHOLD);
        for _ in 0..5 {
            assert_eq!(find_cycle(&ring, 8, 15, CURVE_ERROR_THRESHOLD), first);
        }
    }
}
