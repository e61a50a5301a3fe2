//! # vocab_drill_gen
//!
//! An offline drill engine for English phrasal verbs and idioms.
//!
//! The library holds a fixed catalog of entries (phrase, meaning, example,
//! level) and lets a host application search it, draw random picks, build
//! multiple-choice quizzes, deal flashcards and export selections as CSV text.
//! Rendering, input widgets and file saving are left to the host.
//!
//! ## How it works
//!
//! 1. Build a [`DrillRequest`] with a mode, an optional [`FilterQuery`], a
//!    sample count and an optional RNG seed.
//! 2. Call [`generate_drill`] — the engine filters the [`Catalog`], falls back
//!    to the full catalog when nothing matches, and dispatches to the sampler,
//!    quiz generator or flashcard dealer.
//! 3. The returned [`DrillResult`] holds plain data ready for any UI; the
//!    [`client_adapter`] module turns it into JSON with answer keys removed.
//!
//! The building blocks ([`filter`], [`sample`], [`make_question`],
//! [`to_delimited_text`]) are public too and take the random source as a
//! parameter, so hosts can compose them directly.
//!
//! ## Quick start
//!
//! ```rust
//! use vocab_drill_gen::{
//!     generate_drill, Catalog, Category, DrillMode, DrillOutcome, DrillRequest, FilterQuery,
//! };
//!
//! let catalog = Catalog::builtin();
//!
//! // Minimal — only the mode is required (defaults: match all, 5 picks, entropy):
//! let picks = generate_drill(&catalog, &DrillRequest::new(DrillMode::Random)).unwrap();
//! println!("{}: {} matched", picks.drill_id, picks.matched);
//!
//! // Full control — idioms only, fixed seed:
//! let request = DrillRequest::new(DrillMode::Quiz)
//!     .with_filter(FilterQuery::all().with_category(Category::Idiom))
//!     .with_seed(42);
//! let result = generate_drill(&catalog, &request).unwrap();
//! if let DrillOutcome::Quiz { question } = &result.outcome {
//!     println!("Which phrase means \"{}\"?", question.prompt);
//!     for opt in &question.options {
//!         println!("  [{}] {}", opt.id, opt.phrase);
//!     }
//!     assert!(question.grade(question.correct_id).is_correct);
//! }
//! ```

pub mod client_adapter;
pub mod drill_engine;

// Convenience re-exports so callers can use `vocab_drill_gen::generate_drill`
// directly without reaching into `drill_engine::`.
pub use client_adapter::{answer_payload, flashcard_json, question_payload, result_payload};
pub use drill_engine::{
    draw_flashcard, export_selection, filter, generate_drill, make_question, sample,
    to_delimited_text, Catalog, Category, DrillError, DrillMode, DrillOutcome, DrillRequest,
    DrillResult, Entry, FilterQuery, Flashcard, Level, LevelFilter, QuizAnswer, QuizQuestion,
    Result, Selector, TypeFilter,
};

#[cfg(test)]
mod tests;
