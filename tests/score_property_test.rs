//! Seeded random games - score invariants over many valid roll sequences

use tenpin::core::{scoring, Game};
use tenpin::types::{RollError, PINS_PER_FRAME};

/// Numerical Recipes LCG, enough for reproducible roll sequences.
struct Lcg(u32);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1664525).wrapping_add(1013904223);
        self.0
    }

    fn below(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 8) % max
    }
}

/// Plays a random valid game to completion, calling `observe` after every roll.
fn play_random_game(seed: u32, mut observe: impl FnMut(&Game)) -> Game {
    let mut rng = Lcg(seed);
    let mut game = Game::new();

    while !game.is_over() {
        let frame = game.current_frame();
        // A finished frame means the next roll faces a full rack.
        let standing = if frame.is_finished() {
            PINS_PER_FRAME
        } else {
            frame.pins_standing()
        };
        let pins = rng.below(u32::from(standing) + 1) as i32;
        game.record_roll(pins).unwrap();
        observe(&game);
    }
    game
}

#[test]
fn score_never_decreases() {
    for seed in 1..=500 {
        let mut last = 0;
        play_random_game(seed, |game| {
            let score = game.score();
            assert!(score >= last, "seed {seed}: score fell from {last} to {score}");
            last = score;
        });
    }
}

#[test]
fn completed_games_stay_in_bounds() {
    for seed in 1..=500 {
        let mut game = play_random_game(seed, |_| {});

        assert_eq!(game.frames().len(), Game::FRAMES);
        assert!(game.score() <= 300, "seed {seed}");
        assert_eq!(game.bonus_rolls().len() as u8, game.bonus_entitlement());
        assert_eq!(game.record_roll(0), Err(RollError::GameOver));
    }
}

#[test]
fn running_totals_end_at_score() {
    for seed in 1..=200 {
        play_random_game(seed, |game| {
            let totals = game.running_totals();
            assert_eq!(totals.len(), game.frames().len());
            assert_eq!(totals.last().copied(), Some(game.score()), "seed {seed}");
            assert_eq!(
                scoring::total_score(game.frames(), game.bonus_rolls()),
                game.score()
            );
        });
    }
}
