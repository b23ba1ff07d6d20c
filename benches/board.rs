use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memory_match::board::Board;
use memory_match::core::{Difficulty, GameConfig, GameRng, ManualClock};
use memory_match::game::Game;

fn deal(c: &mut Criterion) {
    for difficulty in [Difficulty::Classic, Difficulty::Hard] {
        let (rows, cols) = difficulty.dimensions();
        c.bench_function(&format!("deal {difficulty}"), |b| {
            let mut rng = GameRng::new(42);
            b.iter(|| Board::new(black_box(rows), black_box(cols), &mut rng))
        });
    }
}

/// Perfect play on a 10x10 board, from deal to game over.
fn full_game(c: &mut Criterion) {
    c.bench_function("perfect game hard", |b| {
        b.iter(|| {
            let config = GameConfig::from_difficulty(Difficulty::Hard).with_seed(7);
            let mut game = Game::with_clock(config, ManualClock::new()).unwrap();

            let mut partner = vec![0; game.board().len()];
            let mut first_seen = vec![None; game.board().pair_count()];
            for (index, card) in game.board().iter().enumerate() {
                match first_seen[*card.id()] {
                    Some(other) => {
                        partner[index] = other;
                        partner[other] = index;
                    }
                    None => first_seen[*card.id()] = Some(index),
                }
            }

            for index in 0..partner.len() {
                if game.flip(index) {
                    game.flip(partner[index]);
                    let _ = game.resolve();
                }
            }
            black_box(game.score())
        })
    });
}

criterion_group!(benches, deal, full_game);
criterion_main!(benches);
