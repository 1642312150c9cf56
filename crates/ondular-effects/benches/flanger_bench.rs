//! Criterion benchmarks for ondular effects
//!
//! Run with: cargo bench -p ondular-effects
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ondular_core::{BlockContext, StreamSpec};
use ondular_effects::Flanger;

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_flanger(c: &mut Criterion) {
    let mut group = c.benchmark_group("Flanger");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("process", block_size),
            &block_size,
            |b, _| {
                let mut flanger = Flanger::<f32>::new();
                flanger.prepare(&StreamSpec {
                    sample_rate: SAMPLE_RATE,
                    max_block_size: block_size,
                    num_channels: 1,
                });

                let mut output = vec![0.0f32; block_size];
                b.iter(|| {
                    flanger.process(&mut BlockContext::new(black_box(&input), &mut output));
                    black_box(output[0])
                });
            },
        );
    }

    // Bypass path cost for comparison
    let input = generate_test_signal(512);
    group.bench_function("bypass", |b| {
        let mut flanger = Flanger::<f32>::new();
        flanger.prepare(&StreamSpec {
            sample_rate: SAMPLE_RATE,
            max_block_size: 512,
            num_channels: 1,
        });

        let mut output = vec![0.0f32; 512];
        b.iter(|| {
            let mut ctx = BlockContext::new(black_box(&input), &mut output);
            ctx.bypassed = true;
            flanger.process(&mut ctx);
            black_box(output[0])
        });
    });

    group.finish();
}

criterion_group!(benches, bench_flanger);
criterion_main!(benches);
