use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::{Deck, GameSnapshot, GameState, SimpleRng};
use tui_memory::types::{GameAction, Level};

fn started_state() -> GameState {
    let mut state = GameState::new(12345);
    state.set_username("bench");
    state.apply_action(GameAction::Start);
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = started_state();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_deck_shuffle(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("deck_shuffle_level_three", |b| {
        b.iter(|| {
            black_box(Deck::shuffled(Level::Three, &mut rng));
        })
    });
}

fn bench_select_card(c: &mut Criterion) {
    c.bench_function("select_and_resolve_pair", |b| {
        b.iter_batched(
            started_state,
            |mut state| {
                // Find a matching pair and flip both.
                let values = state.deck().values().to_vec();
                let first = 0u16;
                let partner = values
                    .iter()
                    .enumerate()
                    .skip(1)
                    .find(|(_, &v)| v == values[0])
                    .map(|(i, _)| i as u16)
                    .unwrap();
                state.select_card(first);
                state.select_card(partner);
                black_box(state.score());
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = started_state();
    let mut snapshot = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snapshot));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_deck_shuffle,
    bench_select_card,
    bench_snapshot
);
criterion_main!(benches);
