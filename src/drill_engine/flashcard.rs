use rand::Rng;

use crate::drill_engine::{
    error::Result,
    models::{Entry, Flashcard},
    sampler::pick_one,
};

/// Draw one random card from `pool`, face down.
pub fn draw_flashcard<R: Rng>(rng: &mut R, pool: &[Entry]) -> Result<Flashcard> {
    pick_one(rng, pool).map(|e| Flashcard::new(e.clone()))
}
