//! End-to-end scenarios for the prepared flanger.
//!
//! Runs a one-second 200 Hz sawtooth through the processor the way a host
//! would — block by block through `BlockContext` — and checks the audible
//! contract: active processing changes the signal, bypass does not.

use ondular_core::{BlockContext, StreamSpec};
use ondular_effects::{Flanger, FlangerParams};
use std::sync::Arc;

const SAMPLE_RATE: f32 = 44100.0;
const BLOCK_SIZE: usize = 441;

fn stream_spec() -> StreamSpec {
    StreamSpec {
        sample_rate: SAMPLE_RATE,
        max_block_size: BLOCK_SIZE,
        num_channels: 1,
    }
}

/// One second of a 200 Hz sawtooth ramp.
fn saw_one_second() -> Vec<f32> {
    (0..SAMPLE_RATE as usize)
        .map(|i| {
            let phase = (i as f32 * 200.0 / SAMPLE_RATE) % 1.0;
            1.0 - 2.0 * phase
        })
        .collect()
}

fn process_blocks(flanger: &mut Flanger<f32>, input: &[f32], bypassed: bool) -> Vec<f32> {
    let mut output = vec![0.0f32; input.len()];
    for (inp, out) in input.chunks(BLOCK_SIZE).zip(output.chunks_mut(BLOCK_SIZE)) {
        let mut ctx = BlockContext::new(inp, out);
        ctx.bypassed = bypassed;
        flanger.process(&mut ctx);
    }
    output
}

#[test]
fn test_saw_through_active_flanger_differs_from_input() {
    let mut flanger = Flanger::new();
    flanger.prepare(&stream_spec());

    let input = saw_one_second();
    let output = process_blocks(&mut flanger, &input, false);

    assert!(output.iter().all(|s| s.is_finite()));
    assert_ne!(output, input, "flanging must alter a non-silent signal");

    // Not just a couple of boundary samples — the sweep touches the
    // majority of the second.
    let differing = input.iter().zip(&output).filter(|(i, o)| i != o).count();
    assert!(
        differing > input.len() / 2,
        "only {differing} of {} samples changed",
        input.len()
    );
}

#[test]
fn test_saw_through_bypassed_flanger_is_identical() {
    let mut flanger = Flanger::new();
    flanger.prepare(&stream_spec());

    let input = saw_one_second();
    let output = process_blocks(&mut flanger, &input, true);

    assert_eq!(output, input);
}

#[test]
fn test_bypass_toggle_mid_stream() {
    let mut flanger = Flanger::new();
    flanger.prepare(&stream_spec());

    let input = saw_one_second();

    let first = process_blocks(&mut flanger, &input[..BLOCK_SIZE * 10], false);
    assert_ne!(&first[..], &input[..BLOCK_SIZE * 10]);

    // Bypassed blocks pass through even with populated delay history
    let second = process_blocks(&mut flanger, &input[..BLOCK_SIZE], true);
    assert_eq!(&second[..], &input[..BLOCK_SIZE]);
}

#[test]
fn test_owner_retunes_modulation_between_blocks() {
    let params = Arc::new(FlangerParams::new(0.1));
    let mut flanger = Flanger::<f32>::with_params(Arc::clone(&params));
    flanger.prepare(&stream_spec());

    let input = saw_one_second();
    process_blocks(&mut flanger, &input[..BLOCK_SIZE], false);

    // Simulates a UI/automation write from the owning side
    params.lfo_frequency_hz.store(5.0);
    process_blocks(&mut flanger, &input[..BLOCK_SIZE], false);

    assert_eq!(flanger.lfo_frequency(), 5.0);
}

#[test]
fn test_double_precision_build_processes_the_same_scenario() {
    let mut flanger = Flanger::<f64>::new();
    flanger.prepare(&stream_spec());

    let input: Vec<f64> = saw_one_second().into_iter().map(f64::from).collect();
    let mut output = vec![0.0f64; input.len()];
    for (inp, out) in input.chunks(BLOCK_SIZE).zip(output.chunks_mut(BLOCK_SIZE)) {
        flanger.process(&mut BlockContext::new(inp, out));
    }

    assert!(output.iter().all(|s| s.is_finite()));
    assert_ne!(output, input);
}
