//! Audio collaborators: WAV I/O and synthetic test signals.

pub mod io;
pub mod synth;
