//! wavecycle CLI — cyclic waveform detection on WAV files.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use wavecycle_core::audio::io::{read_wav, write_wav};
use wavecycle_core::audio::synth;
use wavecycle_core::config::DetectorConfig;
use wavecycle_core::detect::scanner::detect_waveforms;
use wavecycle_core::types::DetectionEvent;

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "wavecycle",
    about = "Detect repeating cyclic waveforms in mono audio",
    version,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a WAV file for repeating waveforms
    Analyze(AnalyzeArgs),
    /// Generate a synthetic test tone as a WAV file
    Synth(SynthArgs),
}

// ─── Analyze ─────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Scan a WAV file for repeating waveforms")]
struct AnalyzeArgs {
    /// Input WAV file
    input: PathBuf,

    /// Derivative stride in samples
    #[arg(long, default_value_t = 10)]
    delta: usize,

    /// Maximum samples per curve
    #[arg(long, default_value_t = 100)]
    max_curve_samples: usize,

    /// Maximum curves per waveform
    #[arg(long, default_value_t = 15)]
    max_curves: usize,

    /// Curve history size (at least twice --max-curves)
    #[arg(long, default_value_t = 30)]
    ring_capacity: usize,

    /// Curve equivalence threshold (normalized squared difference)
    #[arg(long, default_value_t = 0.01)]
    threshold: f64,

    /// Emit the full report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ─── Synth ───────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Generate a synthetic test tone as a WAV file")]
struct SynthArgs {
    /// Output WAV file
    output: PathBuf,

    /// Tone frequency in Hz
    #[arg(long, default_value_t = 220.0)]
    frequency: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 44_100)]
    sample_rate: u32,

    /// Peak amplitude (16-bit range)
    #[arg(long, default_value_t = 16_000.0)]
    amplitude: f64,

    /// Duration in seconds
    #[arg(long, default_value_t = 1.0)]
    duration: f64,

    /// Peak white-noise level to add (0 to disable)
    #[arg(long, default_value_t = 0.0)]
    noise: f64,

    /// RNG seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Init logging
    let log_level = match &cli.command {
        Command::Analyze(a) if a.verbose => "debug",
        Command::Synth(a) if a.verbose => "debug",
        _ => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Synth(args) => run_synth(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Analyze runner ──────────────────────────────────────────────

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    if !args.input.exists() {
        bail!("File not found: {}", args.input.display());
    }

    let (samples, sample_rate) = read_wav(&args.input)?;
    log::info!(
        "Read {}: {} samples at {} Hz ({:.2}s)",
        args.input.display(),
        samples.len(),
        sample_rate,
        samples.len() as f64 / sample_rate as f64
    );

    let config = DetectorConfig {
        delta: args.delta,
        curve_max_samples: args.max_curve_samples,
        waveform_max_curves: args.max_curves,
        ring_capacity: args.ring_capacity,
        curve_error_threshold: args.threshold,
    };

    let report = detect_waveforms(&samples, &config).context("Invalid detection parameters")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for event in &report.events {
        match event {
            DetectionEvent::WaveformFound {
                position,
                curve_count,
                sample_count,
            } => {
                println!(
                    "sample {:>8}: waveform found: {} curves, {} samples (~{:.1} Hz)",
                    position,
                    curve_count,
                    sample_count,
                    sample_rate as f64 / *sample_count as f64
                );
            }
            DetectionEvent::NoWaveformFound { position } => {
                println!("sample {:>8}: no waveform", position);
            }
            DetectionEvent::WaveformRejected {
                position,
                curve_count,
                max_curves,
            } => {
                println!(
                    "sample {:>8}: waveform rejected: {} curves exceeds maximum {}",
                    position, curve_count, max_curves
                );
            }
        }
    }

    println!(
        "Scanned {} samples, {} curves",
        report.sample_count, report.curve_count
    );
    match report.final_waveform {
        Some(info) => println!(
            "Tracking at end of stream: {} curves, {} samples (~{:.1} Hz)",
            info.curve_count,
            info.sample_count,
            sample_rate as f64 / info.sample_count as f64
        ),
        None => println!("No waveform tracked at end of stream"),
    }

    Ok(())
}

// ─── Synth runner ────────────────────────────────────────────────

fn run_synth(args: SynthArgs) -> Result<()> {
    if args.duration <= 0.0 {
        bail!("Duration must be positive");
    }
    if args.frequency <= 0.0 {
        bail!("Frequency must be positive");
    }

    let mut samples = synth::sine(
        args.frequency,
        args.sample_rate,
        args.amplitude,
        args.duration,
    );
    if args.noise > 0.0 {
        synth::add_noise(&mut samples, args.noise, args.seed);
        log::debug!("Added white noise at peak level {}", args.noise);
    }

    write_wav(&args.output, &samples, args.sample_rate)?;
    println!(
        "Wrote {}: {:.1} Hz tone, {} samples at {} Hz",
        args.output.display(),
        args.frequency,
        samples.len(),
        args.sample_rate
    );

    Ok(())
}
