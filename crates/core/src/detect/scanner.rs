//! The per-sample driving loop: scan a sequence for inflection points,
//! close curves into the ring history, and drive the waveform tracker.
//!
//! For each newly closed curve the protocol is: ask the tracker whether the
//! curve still fits the tracked waveform; on a mismatch run a fresh cycle
//! search; otherwise, if the cursor just reached the end of the cycle,
//! re-anchor the waveform to its latest occurrence.

use crate::config::{ConfigError, DetectorConfig};
use crate::detect::curve::Curve;
use crate::detect::derivative::is_inflection;
use crate::detect::ring::CurveRing;
use crate::detect::tracker::{FindOutcome, WaveformTracker};
use crate::types::{DetectionEvent, DetectionReport, WaveformInfo};

/// One detection pass over a borrowed sample sequence.
///
/// The scanner exclusively owns its ring history and tracker; running
/// several passes in parallel (e.g. one per channel) just means one
/// scanner each, with no shared state.
pub struct WaveformScanner<'a> {
    samples: &'a [i32],
    config: DetectorConfig,
    ring: CurveRing<'a>,
    tracker: WaveformTracker,
    events: Vec<DetectionEvent>,
    curves_closed: usize,
}

impl<'a> WaveformScanner<'a> {
    pub fn new(samples: &'a [i32], config: &DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(WaveformScanner {
            samples,
            config: config.clone(),
            ring: CurveRing::new(config.ring_capacity),
            tracker: WaveformTracker::new(
                config.waveform_max_curves,
                config.curve_error_threshold,
            ),
            events: Vec::new(),
            curves_closed: 0,
        })
    }

    /// Scan the whole sequence and report what was found.
    pub fn run(mut self) -> DetectionReport {
        let delta = self.config.delta;
        let len = self.samples.len();

        // is_inflection(pos) reads second derivatives at pos and pos + 1,
        // which need delta samples of margin on the left and delta + 1 on
        // the right.
        if len > 2 * delta + 1 {
            let mut curve_start = 0usize;
            let mut slot = 0usize;
            for pos in delta..len - delta - 1 {
                if !is_inflection(self.samples, pos, delta) {
                    continue;
                }
                let curve = self.close_curve(curve_start, pos);
                self.ring.set(slot, curve);
                self.curves_closed += 1;
                self.drive(slot, pos, curve);
                curve_start = pos;
                slot = self.ring.next(slot);
            }
            // The segment after the last inflection never closes; like the
            // lead-in before the first one, it is not a complete curve.
        }

        let final_waveform = if self.tracker.is_tracking() {
            let waveform = self.tracker.waveform();
            Some(WaveformInfo {
                curve_count: waveform.curve_count(),
                sample_count: waveform.total_samples(),
            })
        } else {
            None
        };

        DetectionReport {
            events: self.events,
            curve_count: self.curves_closed,
            sample_count: len,
            final_waveform,
        }
    }

    /// Build the curve spanning `[start, end)`. Segments longer than the
    /// configured maximum are degenerate (silence, DC stretches) and are
    /// stored as blank curves rather than truncated.
    fn close_curve(&self, start: usize, end: usize) -> Curve<'a> {
        let length = end - start;
        if length > self.config.curve_max_samples {
            log::debug!(
                "segment of {} samples at {} exceeds the {}-sample curve limit",
                length,
                start,
                self.config.curve_max_samples
            );
            return Curve::blank();
        }
        Curve::new(self.samples, start, length)
    }

    /// Apply the driving protocol for the curve just written to `slot`.
    fn drive(&mut self, slot: usize, pos: usize, curve: Curve<'a>) {
        if self.tracker.fits(&curve) {
            if self.tracker.is_end_of_waveform() {
                self.tracker.re_anchor(&self.ring, slot);
                log::debug!("waveform re-anchored at sample {}", pos);
            }
            return;
        }

        match self.tracker.find_new(&self.ring, slot) {
            FindOutcome::Found {
                curve_count,
                sample_count,
            } => {
                log::info!(
                    "new waveform at sample {}: {} curves, {} samples",
                    pos,
                    curve_count,
                    sample_count
                );
                self.events.push(DetectionEvent::WaveformFound {
                    position: pos,
                    curve_count,
                    sample_count,
                });
            }
            FindOutcome::TooLong { curve_count } => {
                log::warn!(
                    "waveform rejected at sample {}: {} curves exceeds maximum {}",
                    pos,
                    curve_count,
                    self.config.waveform_max_curves
                );
                self.events.push(DetectionEvent::WaveformRejected {
                    position: pos,
                    curve_count,
                    max_curves: self.config.waveform_max_curves,
                });
            }
            FindOutcome::NotFound => {
                log::debug!("no waveform found for curve ending at sample {}", pos);
                self.events
                    .push(DetectionEvent::NoWaveformFound { position: pos });
            }
        }
    }
}

/// Run a full detection pass with the given configuration.
pub fn detect_waveforms(
    samples: &[i32],
    config: &DetectorConfig,
) -> Result<DetectionReport, ConfigError> {
    Ok(WaveformScanner::new(samples, config)?.run())
}
