//! Core drill engine — catalog, filtering, sampling, quizzes and export.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: entries, filters, request/response structs |
//! | `error`     | `DrillError` and the crate `Result` alias |
//! | `catalog`   | Built-in entry list and validated custom catalogs |
//! | `filter`    | Text search composed with category and level filters |
//! | `sampler`   | Bounded, duplicate-free random picks |
//! | `quiz`      | Multiple-choice questions with distinct distractors |
//! | `flashcard` | Single random card, phrase on the front |
//! | `export`    | Quoted comma-separated export |
//! | `helpers`   | Fisher-Yates shuffle and the empty-pool fallback |
//! | `generator` | Single entry point `generate_drill()` — dispatches by mode |

pub mod catalog;
pub mod error;
pub mod export;
pub mod filter;
pub mod flashcard;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod quiz;
pub mod sampler;

// Re-export the public API surface so callers can use
// `drill_engine::generate_drill` without reaching into sub-modules.
pub use catalog::Catalog;
pub use error::{DrillError, Result};
pub use export::{export_selection, to_delimited_text, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use filter::filter;
pub use flashcard::draw_flashcard;
pub use generator::{generate_drill, BROWSE_LIMIT};
pub use models::{
    Category, DrillMode, DrillOutcome, DrillRequest, DrillResult, Entry, Flashcard,
    FilterQuery, Level, LevelFilter, QuizAnswer, QuizQuestion, Selector, TypeFilter,
    DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT,
};
pub use quiz::{make_question, QUIZ_OPTION_COUNT};
pub use sampler::{sample, MAX_SAMPLE_ATTEMPTS};
