use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::drill_engine::error::DrillError;

// ---------------------------------------------------------------------------
// Entry primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[serde(alias = "phrasal")]
    PhrasalVerb,
    Idiom,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::PhrasalVerb, Category::Idiom];

    /// Canonical text form, also used as the `Type` column on export.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::PhrasalVerb => "phrasal_verb",
            Category::Idiom       => "idiom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phrasal_verb" | "phrasal" => Ok(Category::PhrasalVerb),
            "idiom"                    => Ok(Category::Idiom),
            _ => Err(DrillError::UnknownCategory(s.to_string())),
        }
    }
}

/// Proficiency tier, ordered easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    A2,
    B1,
    B2,
    C1,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::A2, Level::B1, Level::B2, Level::C1];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A2" => Ok(Level::A2),
            "B1" => Ok(Level::B1),
            "B2" => Ok(Level::B2),
            "C1" => Ok(Level::C1),
            _ => Err(DrillError::UnknownLevel(s.to_string())),
        }
    }
}

/// One vocabulary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    #[serde(rename = "type", alias = "category")]
    pub category: Category,
    pub phrase: String,
    pub meaning: String,
    pub example: String,
    pub level: Level,
}

impl Entry {
    pub fn new(
        id: u32, category: Category, phrase: impl Into<String>,
        meaning: impl Into<String>, example: impl Into<String>, level: Level,
    ) -> Self {
        Entry {
            id,
            category,
            phrase: phrase.into(),
            meaning: meaning.into(),
            example: example.into(),
            level,
        }
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Either every value passes, or only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector<T> {
    All,
    Only(T),
}

// `T` need not implement `Default`.
impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selector::All        => true,
            Selector::Only(want) => want == value,
        }
    }
}

impl<T: FromStr<Err = DrillError>> FromStr for Selector<T> {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selector::All)
        } else {
            s.parse().map(Selector::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All     => write!(f, "all"),
            Selector::Only(v) => write!(f, "{}", v),
        }
    }
}

pub type TypeFilter = Selector<Category>;
pub type LevelFilter = Selector<Level>;

/// Search text plus the two categorical filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    pub query: String,
    pub category: TypeFilter,
    pub level: LevelFilter,
}

impl FilterQuery {
    /// Matches every entry.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(query: impl Into<String>) -> Self {
        FilterQuery { query: query.into(), ..Self::default() }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Selector::Only(category);
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Selector::Only(level);
        self
    }
}

// ---------------------------------------------------------------------------
// Drill request / response types
// ---------------------------------------------------------------------------

pub const DEFAULT_SAMPLE_COUNT: usize = 5;
pub const MAX_SAMPLE_COUNT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillMode {
    #[default]
    Browse,
    Random,
    Quiz,
    Flashcard,
}

impl fmt::Display for DrillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DrillMode::Browse    => "browse",
            DrillMode::Random    => "random",
            DrillMode::Quiz      => "quiz",
            DrillMode::Flashcard => "flashcard",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillRequest {
    pub mode: DrillMode,
    pub filter: FilterQuery,
    /// Requested sample size for `Random`; clamped to `1..=MAX_SAMPLE_COUNT`.
    pub count: usize,
    pub rng_seed: Option<u64>,
}

impl Default for DrillRequest {
    fn default() -> Self {
        DrillRequest {
            mode: DrillMode::default(),
            filter: FilterQuery::all(),
            count: DEFAULT_SAMPLE_COUNT,
            rng_seed: None,
        }
    }
}

impl DrillRequest {
    /// Only the mode is required; everything else takes its default.
    pub fn new(mode: DrillMode) -> Self {
        DrillRequest { mode, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, DrillError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_filter(mut self, filter: FilterQuery) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Meaning of the correct entry.
    pub prompt: String,
    pub correct_id: u32,
    pub options: Vec<Entry>,
}

/// Outcome of grading one submitted quiz answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub submitted_id: u32,
    pub correct_id: u32,
    pub is_correct: bool,
    pub correct: Option<Entry>,
    /// The option the user picked; `None` if the id was not among the options.
    pub chosen: Option<Entry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub entry: Entry,
    revealed: bool,
}

impl Flashcard {
    pub fn new(entry: Entry) -> Self {
        Flashcard { entry, revealed: false }
    }

    pub fn front(&self) -> &str {
        &self.entry.phrase
    }

    /// Meaning and example, one per line.
    pub fn back(&self) -> String {
        format!("{}\n{}", self.entry.meaning, self.entry.example)
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrillOutcome {
    Browse { total: usize, items: Vec<Entry> },
    Random { picks: Vec<Entry> },
    Quiz { question: QuizQuestion },
    Flashcard { card: Flashcard },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillResult {
    pub drill_id: String,
    pub mode: DrillMode,
    /// Size of the filtered view before any fallback.
    pub matched: usize,
    /// True when the filtered view was empty and the full catalog was used.
    pub used_fallback: bool,
    pub outcome: DrillOutcome,
}
