//! Multiple-choice questions keyed meaning → phrase.
//!
//! A question shows the meaning of one entry and asks for its phrase. The
//! other three options are distractors drawn from the same pool, so a quiz
//! over "idioms, B2" only ever offers B2 idioms as wrong answers.

use std::collections::HashSet;

use rand::Rng;

use crate::drill_engine::{
    error::{DrillError, Result},
    helpers::shuffle,
    models::{Entry, QuizAnswer, QuizQuestion},
};

/// Options per question: one correct entry plus distractors.
pub const QUIZ_OPTION_COUNT: usize = 4;

/// Build one question from `pool`.
///
/// Fails with [`DrillError::EmptyPool`] on an empty pool and with
/// [`DrillError::InsufficientPool`] when the pool holds fewer than
/// [`QUIZ_OPTION_COUNT`] distinct ids.
pub fn make_question<R: Rng>(rng: &mut R, pool: &[Entry]) -> Result<QuizQuestion> {
    if pool.is_empty() {
        return Err(DrillError::EmptyPool);
    }
    let distinct = pool.iter().map(|e| e.id).collect::<HashSet<_>>().len();
    if distinct < QUIZ_OPTION_COUNT {
        return Err(DrillError::InsufficientPool { distinct, required: QUIZ_OPTION_COUNT });
    }

    let correct = &pool[rng.gen_range(0..pool.len())];

    // One candidate per distinct id, so repeated entries in the pool do not
    // skew or stall the distractor draw.
    let mut seen = HashSet::from([correct.id]);
    let mut candidates: Vec<&Entry> = pool.iter().filter(|e| seen.insert(e.id)).collect();

    let wanted = QUIZ_OPTION_COUNT - 1;
    let mut distractors: Vec<&Entry> = Vec::with_capacity(wanted);
    while distractors.len() < wanted {
        let idx = rng.gen_range(0..candidates.len());
        distractors.push(candidates.swap_remove(idx));
    }

    let mut options: Vec<Entry> = distractors.into_iter().cloned().collect();
    options.push(correct.clone());
    shuffle(rng, &mut options);

    log::debug!("quiz question for entry {} from {} distinct entries", correct.id, distinct);

    Ok(QuizQuestion {
        prompt: correct.meaning.clone(),
        correct_id: correct.id,
        options,
    })
}

impl QuizQuestion {
    pub fn is_correct(&self, submitted_id: u32) -> bool {
        submitted_id == self.correct_id
    }

    pub fn correct_entry(&self) -> Option<&Entry> {
        self.options.iter().find(|e| e.id == self.correct_id)
    }

    /// Score a submitted option id.
    pub fn grade(&self, submitted_id: u32) -> QuizAnswer {
        QuizAnswer {
            submitted_id,
            correct_id: self.correct_id,
            is_correct: self.is_correct(submitted_id),
            correct: self.correct_entry().cloned(),
            chosen: self.options.iter().find(|e| e.id == submitted_id).cloned(),
        }
    }
}
