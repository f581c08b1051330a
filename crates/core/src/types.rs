use serde::Serialize;

/// Diagnostic event emitted while scanning a sample stream.
///
/// These are observational, not errors: a stream with no repeating
/// waveform is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DetectionEvent {
    /// A new repeating waveform was found and is now tracked.
    WaveformFound {
        /// Sample position of the curve boundary that completed the cycle
        position: usize,
        /// Curves per cycle
        curve_count: usize,
        /// Samples per cycle
        sample_count: usize,
    },
    /// No repeating cycle exists in the curve history at this boundary.
    NoWaveformFound { position: usize },
    /// A repeating cycle was found but exceeds the configured maximum
    /// waveform length and was discarded.
    WaveformRejected {
        position: usize,
        curve_count: usize,
        max_curves: usize,
    },
}

/// Cycle geometry of a tracked waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaveformInfo {
    pub curve_count: usize,
    pub sample_count: usize,
}

/// Output of one detection pass over a sample sequence.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    pub events: Vec<DetectionEvent>,
    /// Curves closed during the pass
    pub curve_count: usize,
    /// Samples in the scanned sequence
    pub sample_count: usize,
    /// Waveform still tracked when the stream ended, if any
    pub final_waveform: Option<WaveformInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_tag() {
        let event = DetectionEvent::WaveformFound {
            position: 130,
            curve_count: 2,
            sample_count: 40,
        };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["event"], "waveform_found");
        assert_eq!(json["position"], 130);
        assert_eq!(json["sample_count"], 40);
    }

    #[test]
    fn test_report_serializes() {
        let report = DetectionReport {
            events: vec![DetectionEvent::NoWaveformFound { position: 12 }],
            curve_count: 1,
            sample_count: 220,
            final_waveform: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("no_waveform_found"));
    }
}
