//! Board construction properties.
//!
//! These tests verify dealing is correct for every legal shape and that
//! the shuffle does not favor any position.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use memory_match::board::Board;
use memory_match::cards::Card;
use memory_match::core::{GameRng, MemoryError};

fn identifier_counts(board: &Board<usize>) -> FxHashMap<usize, usize> {
    let mut counts = FxHashMap::default();
    for card in board.iter() {
        *counts.entry(*card.id()).or_insert(0) += 1;
    }
    counts
}

proptest! {
    /// Every legal board holds rows*cols/2 identifiers, twice each, all hidden.
    #[test]
    fn prop_board_is_dealt_in_pairs(rows in 1usize..12, cols in 1usize..12, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let result = Board::new(rows, cols, &mut rng);

        if (rows * cols) % 2 == 1 {
            prop_assert_eq!(result.unwrap_err(), MemoryError::InvalidDimension { rows, cols });
        } else {
            let board = result.unwrap();
            let counts = identifier_counts(&board);

            prop_assert_eq!(board.len(), rows * cols);
            prop_assert_eq!(counts.len(), rows * cols / 2);
            prop_assert!(counts.values().all(|&n| n == 2));
            prop_assert!(counts.keys().all(|&id| id < rows * cols / 2));
            prop_assert!(board.iter().all(Card::is_hidden));
            prop_assert!(!board.all_matched());
        }
    }

    /// Grid helpers agree with each other for every in-range index.
    #[test]
    fn prop_position_round_trips(rows in 1usize..10, half_cols in 1usize..6) {
        let cols = half_cols * 2;
        let board = Board::new(rows, cols, &mut GameRng::new(0)).unwrap();

        for index in 0..board.len() {
            let (row, col) = board.position_of(index).unwrap();
            prop_assert_eq!(board.index_of(row, col), Some(index));
        }
    }
}

/// Over many deals, position 0 holds each identifier about equally often,
/// and identifier 0 lands on each position about equally often.
#[test]
fn test_shuffle_has_no_position_bias() {
    const DEALS: u64 = 8000;
    let mut first_slot = [0u32; 4];
    let mut zero_position = [0u32; 8];

    for seed in 0..DEALS {
        let board = Board::new(2, 4, &mut GameRng::new(seed)).unwrap();

        first_slot[*board.card(0).unwrap().id()] += 1;
        for (position, card) in board.iter().enumerate() {
            if *card.id() == 0 {
                zero_position[position] += 1;
            }
        }
    }

    // Expected 2000 hits per bucket; 200 is about five standard deviations.
    for hits in first_slot.iter().chain(zero_position.iter()) {
        assert!((1800..=2200).contains(hits), "biased bucket: {hits}");
    }
}

/// Different seeds give different deals; equal seeds give equal deals.
#[test]
fn test_seeded_deals() {
    let a = Board::new(4, 4, &mut GameRng::new(1)).unwrap();
    let b = Board::new(4, 4, &mut GameRng::new(1)).unwrap();
    let c = Board::new(4, 4, &mut GameRng::new(2)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

/// String identifiers behave like numeric ones.
#[test]
fn test_string_identifiers() {
    let keys = ["mario.png", "luigi.png", "peach.png", "toad.png"];
    let board = Board::with_identifiers(2, 4, keys, &mut GameRng::new(4)).unwrap();

    for key in keys {
        assert_eq!(board.iter().filter(|card| *card.id() == key).count(), 2);
    }
}

/// A reset deal keeps the same identifiers.
#[test]
fn test_reset_keeps_identifiers() {
    let mut rng = GameRng::new(11);
    let mut board = Board::new(6, 6, &mut rng).unwrap();
    let before = identifier_counts(&board);

    board.reset(&mut rng);
    assert_eq!(identifier_counts(&board), before);
}
