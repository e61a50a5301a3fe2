//! The static entry list every drill draws from.
//!
//! A [`Catalog`] is built once and never mutated. The built-in list is
//! compiled in; hosts that ship their own word list go through
//! [`Catalog::new`] or [`Catalog::from_json`], which enforce the same
//! invariants: unique ids and no empty text fields.

use std::collections::HashSet;

use crate::drill_engine::{
    error::{DrillError, Result},
    models::{Category, Entry, Level},
};

use crate::drill_engine::models::Category::{Idiom, PhrasalVerb};
use crate::drill_engine::models::Level::{A2, B1, B2};

const BUILTIN: [(u32, Category, &str, &str, &str, Level); 14] = [
    (1,  PhrasalVerb, "give up",    "stop trying / quit",                       "She gave up smoking last year.",           A2),
    (2,  PhrasalVerb, "take off",   "remove clothing / leave quickly",          "The plane took off on time.",              A2),
    (3,  PhrasalVerb, "look after", "take care of",                             "Can you look after my dog?",               A2),
    (4,  PhrasalVerb, "bring up",   "mention / raise (a topic) / raise a child", "Don't bring up politics at dinner.",       B1),
    (5,  PhrasalVerb, "put off",    "postpone / discourage",                    "They put off the meeting until Friday.",   B1),
    (6,  PhrasalVerb, "run into",   "meet by chance / encounter",               "I ran into an old friend yesterday.",      B1),
    (7,  PhrasalVerb, "carry on",   "continue",                                 "Please carry on with your work.",          A2),
    (8,  PhrasalVerb, "break down", "stop working / get upset",                 "Her car broke down on the highway.",       B1),
    (9,  PhrasalVerb, "figure out", "understand / solve",                       "We need to figure out a solution.",        B1),
    (10, PhrasalVerb, "set up",     "arrange / establish",                      "They set up a new company last month.",    B2),
    (1001, Idiom, "break the ice",         "do or say something to relieve tension", "A joke at the start of the meeting helped break the ice.", B1),
    (1002, Idiom, "hit the hay",           "go to bed",                              "I'm tired \u{2014} I'm going to hit the hay.",             A2),
    (1003, Idiom, "piece of cake",         "something very easy",                    "That test was a piece of cake.",                           A2),
    (1004, Idiom, "cost an arm and a leg", "very expensive",                         "Their new car cost an arm and a leg.",                     B2),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// The compiled-in phrasal verb and idiom list.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&(id, category, phrase, meaning, example, level)| {
                Entry::new(id, category, phrase, meaning, example, level)
            })
            .collect();
        Catalog { entries }
    }

    /// Build a catalog from caller-supplied entries, rejecting duplicate ids
    /// and blank text fields.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for e in &entries {
            if !seen.insert(e.id) {
                return Err(DrillError::DuplicateId(e.id));
            }
            for (field, value) in [("phrase", &e.phrase), ("meaning", &e.meaning), ("example", &e.example)] {
                if value.trim().is_empty() {
                    return Err(DrillError::EmptyField { id: e.id, field });
                }
            }
        }
        Ok(Catalog { entries })
    }

    /// Parse a JSON array of entries, then validate it like [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
