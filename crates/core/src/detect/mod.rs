//! The detection engine: segmentation, similarity, cycle search, tracking.

pub mod curve;
pub mod cycle;
pub mod derivative;
pub mod ring;
pub mod scanner;
pub mod similarity;
pub mod tracker;

pub use curve::{Curve, CurveSnapshot};
pub use cycle::{find_cycle, CycleOutcome};
pub use ring::CurveRing;
pub use scanner::{detect_waveforms, WaveformScanner};
pub use similarity::{is_same_curve, squared_difference, CURVE_ERROR_THRESHOLD};
pub use tracker::{FindOutcome, Waveform, WaveformTracker};
