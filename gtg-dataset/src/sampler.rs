//! Corpus sampling
//!
//! Uniform sampling without replacement down to a target corpus size.

use crate::models::Game;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Keep at most `target_size` games
///
/// Returns the input untouched (order preserved) when it is already small
/// enough; otherwise `target_size` distinct games drawn uniformly.
pub fn sample_games<R: Rng + ?Sized>(games: Vec<Game>, target_size: usize, rng: &mut R) -> Vec<Game> {
    if games.len() <= target_size {
        return games;
    }

    games
        .choose_multiple(rng, target_size)
        .cloned()
        .collect()
}

/// Sample with a fixed seed (reproducible corpus) or OS entropy
pub fn sample_games_seeded(games: Vec<Game>, target_size: usize, seed: Option<u64>) -> Vec<Game> {
    match seed {
        Some(seed) => sample_games(games, target_size, &mut StdRng::seed_from_u64(seed)),
        None => sample_games(games, target_size, &mut rand::thread_rng()),
    }
}
