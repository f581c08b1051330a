//! Detection parameters, fixed for the duration of a pass.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default stride for finite-difference derivatives, in samples.
pub const DEFAULT_DELTA: usize = 10;
/// Default maximum samples per curve; longer segments are degenerate.
pub const DEFAULT_CURVE_MAX_SAMPLES: usize = 100;
/// Default maximum curves per waveform; longer cycles are discarded.
pub const DEFAULT_WAVEFORM_MAX_CURVES: usize = 15;

/// Invalid detection parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("derivative stride must be at least 1")]
    ZeroDelta,
    #[error("maximum waveform length must be at least 1 curve")]
    ZeroMaxCurves,
    #[error("ring capacity {capacity} must be at least twice the maximum waveform length ({max_curves} curves)")]
    RingTooSmall {
        capacity: usize,
        max_curves: usize,
    },
    #[error("curve error threshold must be positive, got {0}")]
    NonPositiveThreshold(f64),
}

/// Tuning parameters for one detection pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Stride for derivative estimation, in samples
    pub delta: usize,
    /// Segments longer than this are stored as invalid curves
    pub curve_max_samples: usize,
    /// Cycles longer than this many curves are rejected
    pub waveform_max_curves: usize,
    /// Curve history size; must be at least `2 * waveform_max_curves`
    pub ring_capacity: usize,
    /// Normalized squared-difference threshold for curve equivalence
    pub curve_error_threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            curve_max_samples: DEFAULT_CURVE_MAX_SAMPLES,
            waveform_max_curves: DEFAULT_WAVEFORM_MAX_CURVES,
            ring_capacity: 2 * DEFAULT_WAVEFORM_MAX_CURVES,
            curve_error_threshold: crate::detect::similarity::CURVE_ERROR_THRESHOLD,
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delta == 0 {
            return Err(ConfigError::ZeroDelta);
        }
        if self.waveform_max_curves == 0 {
            return Err(ConfigError::ZeroMaxCurves);
        }
        if self.ring_capacity < 2 * self.waveform_max_curves {
            return Err(ConfigError::RingTooSmall {
                capacity: self.ring_capacity,
                max_curves: self.waveform_max_curves,
            });
        }
        if self.curve_error_threshold <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold(
                self.curve_error_threshold,
            ));
        }
        Ok(())
    }
}
