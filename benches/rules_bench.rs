//! Rules Engine Benchmarks
//!
//! Move generation, state cloning and full random games for both engines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use table_rules::games::checkers::{legal_moves_for_player, Board, Checkers, Side};
use table_rules::games::omi::{Omi, OmiConfig};
use table_rules::rules::{play_out, RulesEngine, UniformRandom};
use table_rules::GameRng;

fn bench_checkers_opening_moves(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("checkers_opening_moves", |b| {
        b.iter(|| black_box(legal_moves_for_player(&board, Side::White)))
    });
}

fn bench_checkers_state_clone(c: &mut Criterion) {
    let engine = Checkers::new();
    let mut state = engine.initial_state();
    play_out(&engine, &mut state, &UniformRandom, &mut GameRng::new(1), 40);

    c.bench_function("checkers_state_clone", |b| b.iter(|| black_box(state.clone())));
}

fn bench_checkers_random_game(c: &mut Criterion) {
    let engine = Checkers::new();

    c.bench_function("checkers_random_game", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut state = engine.initial_state();
            black_box(play_out(&engine, &mut state, &UniformRandom, &mut GameRng::new(seed), 500))
        })
    });
}

fn bench_omi_deal(c: &mut Criterion) {
    let engine = Omi::new(OmiConfig::default().with_seed(9));

    c.bench_function("omi_initial_deal", |b| b.iter(|| black_box(engine.initial_state())));
}

fn bench_omi_random_match(c: &mut Criterion) {
    c.bench_function("omi_random_match", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let engine = Omi::new(OmiConfig::default().with_seed(seed));
            let mut state = engine.initial_state();
            black_box(play_out(&engine, &mut state, &UniformRandom, &mut GameRng::new(seed), 5_000))
        })
    });
}

criterion_group!(
    benches,
    bench_checkers_opening_moves,
    bench_checkers_state_clone,
    bench_checkers_random_game,
    bench_omi_deal,
    bench_omi_random_match,
);
criterion_main!(benches);
