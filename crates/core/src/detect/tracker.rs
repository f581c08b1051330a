//! Waveform tracking: hold the currently believed periodic unit and match
//! incoming curves against it.
//!
//! The tracker is either empty (no waveform yet) or tracking. Tracking
//! state is replaced wholesale: a fresh cycle from [`find_cycle`] installs
//! a new waveform, and a mismatch empties the tracker until the next
//! search succeeds. While the signal keeps matching, the waveform is
//! periodically re-anchored to its most recent occurrence so that slow
//! drift in the source does not accumulate into a mismatch.

use crate::detect::curve::{Curve, CurveSnapshot};
use crate::detect::cycle::{find_cycle, CycleOutcome};
use crate::detect::ring::CurveRing;
use crate::detect::similarity::is_same_curve;

/// The tracked periodic unit: an ordered run of curve snapshots plus a
/// cursor marking the next expected curve.
///
/// Snapshots are value copies, not references into the ring — the ring may
/// overwrite its slots long before the waveform is retired.
#[derive(Debug, Clone, Default)]
pub struct Waveform {
    curves: Vec<CurveSnapshot>,
    total_samples: usize,
    cursor: usize,
}

impl Waveform {
    /// A blank waveform: no pattern found yet.
    pub fn blank() -> Self {
        Waveform::default()
    }

    pub fn is_valid(&self) -> bool {
        !self.curves.is_empty()
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Total sample length of one cycle (sum of member curve lengths).
    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Outcome of [`WaveformTracker::find_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    /// A new waveform was installed and is now being tracked.
    Found {
        curve_count: usize,
        sample_count: usize,
    },
    /// A repeating cycle exists but is longer than the configured maximum;
    /// it was discarded and the tracker is empty.
    TooLong { curve_count: usize },
    /// No repeating cycle in the ring; the tracker is empty.
    NotFound,
}

/// Stateful matcher driving the "does the next curve still fit" protocol.
pub struct WaveformTracker {
    waveform: Waveform,
    max_curves: usize,
    threshold: f64,
}

impl WaveformTracker {
    pub fn new(max_curves: usize, threshold: f64) -> Self {
        WaveformTracker {
            waveform: Waveform::blank(),
            max_curves,
            threshold,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.waveform.is_valid()
    }

    pub fn waveform(&self) -> &Waveform {
        &self.waveform
    }

    /// Compare `curve` against the curve at the cursor and advance the
    /// cursor by one.
    ///
    /// This is a mutating query: the cursor moves on every compared call,
    /// matched or not, so the caller sees exactly one advance per incoming
    /// curve and can detect the end of the cycle via
    /// [`is_end_of_waveform`](Self::is_end_of_waveform). Returns false
    /// without comparing when the tracker is empty or the cursor is
    /// already past the last curve.
    pub fn fits(&mut self, curve: &Curve) -> bool {
        if !self.waveform.is_valid() || self.waveform.cursor >= self.waveform.curves.len() {
            return false;
        }
        let expected = &self.waveform.curves[self.waveform.cursor];
        let matched = is_same_curve(curve, &expected.as_curve(), self.threshold);
        self.waveform.cursor += 1;
        matched
    }

    /// True iff the cursor has reached the end of the tracked waveform.
    pub fn is_end_of_waveform(&self) -> bool {
        self.waveform.is_valid() && self.waveform.cursor >= self.waveform.curves.len()
    }

    /// Run a cycle search anchored at `anchor` and install the result.
    ///
    /// On success the cycle's curves are value-copied out of the ring, the
    /// cursor resets to zero and the tracker starts tracking. A missing or
    /// over-length cycle leaves the tracker empty; both are normal
    /// outcomes, not errors.
    pub fn find_new(&mut self, ring: &CurveRing, anchor: usize) -> FindOutcome {
        match find_cycle(ring, anchor, self.max_curves, self.threshold) {
            CycleOutcome::Cycle(period) => {
                self.capture(ring, anchor, period);
                FindOutcome::Found {
                    curve_count: period,
                    sample_count: self.waveform.total_samples,
                }
            }
            CycleOutcome::TooLong(period) => {
                self.waveform = Waveform::blank();
                FindOutcome::TooLong {
                    curve_count: period,
                }
            }
            CycleOutcome::NoCycle => {
                self.waveform = Waveform::blank();
                FindOutcome::NotFound
            }
        }
    }

    /// Replace the waveform's curves with their most recent occurrence:
    /// the run of equally many curves ending at `anchor`.
    ///
    /// No search is re-run; the caller only invokes this when
    /// [`is_end_of_waveform`](Self::is_end_of_waveform) just became true
    /// while the signal was still matching, so the same-length cycle is
    /// known to end at `anchor`. Resets the cursor. Does nothing while
    /// empty.
    pub fn re_anchor(&mut self, ring: &CurveRing, anchor: usize) {
        let period = self.waveform.curves.len();
        if period == 0 {
            return;
        }
        self.capture(ring, anchor, period);
    }

    /// Copy the `period` curves ending at `anchor` out of the ring, in
    /// chronological order, and reset the cursor.
    fn capture(&mut self, ring: &CurveRing, anchor: usize, period: usize) {
        let mut curves = Vec::with_capacity(period);
        for offset in (0..period).rev() {
            curves.push(ring.get(ring.back(anchor, offset)).to_snapshot());
        }
        let total_samples = curves.iter().map(|c| c.len()).sum();
        self.waveform = Waveform {
            curves,
            total_samples,
            cursor: 0,
        };
    }
}
