//! Test signal generation command.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::signal;
use crate::wav;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a band-limited sawtooth ramp
    Saw {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "200.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "5.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "44100")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate a sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Saw {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => {
            let samples = signal::saw_ramp_down(freq, sample_rate as f32, duration, amplitude);
            wav::write_wav(&output, &samples, sample_rate)?;
            tracing::info!(path = %output.display(), freq, duration, "wrote sawtooth");
        }
        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => {
            let samples = signal::tone(freq, sample_rate as f32, duration, amplitude);
            wav::write_wav(&output, &samples, sample_rate)?;
            tracing::info!(path = %output.display(), freq, duration, "wrote sine tone");
        }
    }

    Ok(())
}
