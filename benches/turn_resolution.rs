use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wizard_duel::{House, Phase, Session};

/// Play a full duel with a fixed strategy until the player falls.
fn play_duel(seed: u64) -> u32 {
    let mut session = Session::with_seed(seed);
    let _ = session.start_game("Bench", Some(House::Ravenclaw));

    while session.phase() == Phase::Playing {
        let spell = session
            .castable_spells()
            .filter(|s| s.damage.is_some())
            .max_by_key(|s| s.damage)
            .map(|s| s.name.clone());
        let _ = match spell {
            Some(name) => session.cast_spell(&name).map(|_| ()),
            None => session.restore_mana().map(|_| ()),
        };
        session.settle();
    }

    session.player().score
}

fn bench_full_duel(c: &mut Criterion) {
    c.bench_function("full_duel", |b| b.iter(|| play_duel(black_box(42))));
}

fn bench_single_turn(c: &mut Criterion) {
    c.bench_function("cast_and_settle", |b| {
        b.iter_batched(
            || {
                let mut session = Session::with_seed(7);
                let _ = session.start_game("Bench", Some(House::Hufflepuff));
                session
            },
            |mut session| {
                let _ = session.cast_spell(black_box("Stupefy"));
                session.settle()
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_full_duel, bench_single_turn);
criterion_main!(benches);
