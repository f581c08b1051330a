//! wavecycle-core — online detection of repeating cyclic waveforms in a
//! mono sample stream.
//!
//! The signal is segmented at inflection points (sign changes of a
//! stride-smoothed second derivative) into "curves". A bounded ring of
//! recent curves is searched for the shortest block that exactly repeats
//! the block before it; that block becomes the tracked waveform, which is
//! matched against incoming curves and re-anchored to its latest
//! occurrence to follow slow drift. Intended for pitch/period detection
//! of quasi-periodic sounds where the period is not known in advance.

pub mod audio;
pub mod config;
pub mod detect;
pub mod types;
