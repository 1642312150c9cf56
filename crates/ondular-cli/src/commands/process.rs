//! Offline WAV processing through the flanger.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use ondular_core::{BlockContext, StreamSpec};
use ondular_effects::{Flanger, FlangerParams};

use crate::wav;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (multi-channel input is mixed down to mono)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (32-bit float, mono)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// LFO sweep rate in Hz
    #[arg(long, default_value = "0.1")]
    lfo_rate: f32,

    /// Copy the input through unprocessed
    #[arg(long)]
    bypass: bool,

    /// Processing block size in samples
    #[arg(long, default_value = "512")]
    block_size: usize,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let (samples, sample_rate) = wav::read_wav(&args.input)?;
    tracing::info!(
        path = %args.input.display(),
        samples = samples.len(),
        sample_rate,
        "loaded input"
    );

    let params = Arc::new(FlangerParams::new(args.lfo_rate));
    let mut flanger = Flanger::<f32>::with_params(params);
    flanger.prepare(&StreamSpec {
        sample_rate: sample_rate as f32,
        max_block_size: args.block_size,
        num_channels: 1,
    });

    let mut output = vec![0.0f32; samples.len()];
    for (inp, out) in samples
        .chunks(args.block_size)
        .zip(output.chunks_mut(args.block_size))
    {
        let mut ctx = BlockContext::new(inp, out);
        ctx.bypassed = args.bypass;
        flanger.process(&mut ctx);
    }

    wav::write_wav(&args.output, &output, sample_rate)?;
    tracing::info!(path = %args.output.display(), "wrote processed audio");

    Ok(())
}
