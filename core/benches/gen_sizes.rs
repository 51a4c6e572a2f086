use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sweeper_core::*;

const SIZES: [(&str, Coord2, CellCount); 3] = [
    ("9x9", (9, 9), 10),
    ("16x16", (16, 16), 40),
    ("30x16", GameConfig::DEFAULT_SIZE, GameConfig::DEFAULT_MINES),
];

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, size, mines) in SIZES {
        let config = GameConfig::new_unchecked(size, mines);
        let first_move = (size.0 / 2, size.1 / 2);
        let mut seed = 0u64;
        group.bench_function(name, |b| {
            b.iter(|| {
                seed = seed.wrapping_add(1);
                RandomBoardGenerator::new(black_box(seed), first_move).generate(config)
            })
        });
    }
    group.finish();
}

fn first_reveal(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut seed = 0u64;
    c.bench_function("first_reveal/default", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut engine = PlayEngine::new(config, black_box(seed))?;
            engine.reveal((15, 8))
        })
    });
}

criterion_group!(benches, generate, first_reveal);
criterion_main!(benches);
