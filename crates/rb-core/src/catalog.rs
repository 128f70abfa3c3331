//! Riddle catalog
//!
//! The catalog is loaded once at startup, validated, and never mutated
//! afterwards, so battles can share it freely without locking. Answers are
//! normalized at load time; runtime answer checking is a plain equality
//! test against pre-normalized strings.

use std::path::Path;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

use crate::answer::normalize;

/// Thematic riddle categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumCount, EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Math,
    Logic,
    Wordplay,
    Paradox,
    Deduction,
    Pattern,
    Mystery,
    Chess,
}

impl Category {
    /// Stable index for weight tables
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Riddle difficulty tiers, ordered easy < medium < hard
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single riddle
///
/// `canonical_answer` and `alternate_answers` are stored normalized
/// (case-folded, whitespace collapsed). Records are immutable once the
/// catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiddleRecord {
    pub id: String,
    pub prompt: String,
    pub canonical_answer: String,
    #[serde(default)]
    pub alternate_answers: Vec<String>,
    pub category: Category,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub hint: Option<String>,
    /// Scales damage dealt on a correct answer
    #[serde(default = "default_damage_multiplier")]
    pub damage_multiplier: f32,
    /// Experience granted for a correct answer
    #[serde(default = "default_experience_reward")]
    pub experience_reward: u32,
}

fn default_damage_multiplier() -> f32 {
    1.0
}

fn default_experience_reward() -> u32 {
    10
}

impl RiddleRecord {
    /// Whether a hint can be offered for this riddle
    pub fn has_hint(&self) -> bool {
        self.hint.as_deref().is_some_and(|h| !h.is_empty())
    }
}

/// Errors raised while loading or validating a catalog source
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog source: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("riddle with empty id")]
    EmptyId,

    #[error("duplicate riddle id '{id}'")]
    DuplicateId { id: String },

    #[error("riddle '{id}' has an empty canonical answer")]
    EmptyAnswer { id: String },
}

/// A catalog missing an entire difficulty tier is unusable: level scaling
/// would funnel some combatants into a tier with nothing to ask.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("catalog has no {missing} riddles")]
pub struct CatalogIncompleteError {
    pub missing: Difficulty,
}

/// The loaded riddle collection, queryable by difficulty and category
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<RiddleRecord>,
}

impl Catalog {
    /// Build a catalog from records, validating ids and normalizing answers
    pub fn from_records(records: Vec<RiddleRecord>) -> Result<Self, CatalogLoadError> {
        let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
        let mut normalized = Vec::with_capacity(records.len());

        for mut record in records {
            if record.id.is_empty() {
                return Err(CatalogLoadError::EmptyId);
            }
            if !seen.insert(record.id.clone()) {
                return Err(CatalogLoadError::DuplicateId { id: record.id });
            }

            record.canonical_answer = normalize(&record.canonical_answer);
            if record.canonical_answer.is_empty() {
                return Err(CatalogLoadError::EmptyAnswer { id: record.id });
            }
            record.alternate_answers = record
                .alternate_answers
                .iter()
                .map(|a| normalize(a))
                .filter(|a| !a.is_empty())
                .collect();

            normalized.push(record);
        }

        tracing::debug!(riddles = normalized.len(), "catalog loaded");
        Ok(Self {
            records: normalized,
        })
    }

    /// Parse a JSON array of riddle records
    pub fn load_json(source: &str) -> Result<Self, CatalogLoadError> {
        let records: Vec<RiddleRecord> = serde_json::from_str(source)?;
        Self::from_records(records)
    }

    /// Load a catalog from a JSON file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_json(&content)
    }

    /// Verify every difficulty tier has at least one riddle
    pub fn ensure_complete(&self) -> Result<(), CatalogIncompleteError> {
        for tier in Difficulty::iter() {
            if self.by_difficulty(tier).next().is_none() {
                return Err(CatalogIncompleteError { missing: tier });
            }
        }
        Ok(())
    }

    /// All records, in insertion order
    pub fn all(&self) -> &[RiddleRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&RiddleRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records at one difficulty tier, in insertion order
    pub fn by_difficulty(&self, tier: Difficulty) -> impl Iterator<Item = &RiddleRecord> {
        self.records.iter().filter(move |r| r.difficulty == tier)
    }

    /// Records at one tier restricted to the given categories, in insertion
    /// order
    pub fn by_difficulty_and_category<'a>(
        &'a self,
        tier: Difficulty,
        categories: &'a [Category],
    ) -> impl Iterator<Item = &'a RiddleRecord> + 'a {
        self.by_difficulty(tier)
            .filter(move |r| categories.contains(&r.category))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: Category, difficulty: Difficulty, answer: &str) -> RiddleRecord {
        RiddleRecord {
            id: id.into(),
            prompt: format!("prompt for {id}"),
            canonical_answer: answer.into(),
            alternate_answers: vec![],
            category,
            difficulty,
            hint: None,
            damage_multiplier: 1.0,
            experience_reward: 10,
        }
    }

    #[test]
    fn test_from_records_normalizes_answers() {
        let mut rec = record("r1", Category::Math, Difficulty::Easy, "  Twelve  ");
        rec.alternate_answers = vec!["  12 ".into(), "   ".into()];
        let catalog = Catalog::from_records(vec![rec]).unwrap();

        let loaded = catalog.get("r1").unwrap();
        assert_eq!(loaded.canonical_answer, "twelve");
        // Blank alternates are dropped outright.
        assert_eq!(loaded.alternate_answers, vec!["12".to_string()]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let records = vec![
            record("dup", Category::Math, Difficulty::Easy, "1"),
            record("dup", Category::Logic, Difficulty::Hard, "2"),
        ];
        assert!(matches!(
            Catalog::from_records(records),
            Err(CatalogLoadError::DuplicateId { id }) if id == "dup"
        ));
    }

    #[test]
    fn test_empty_id_rejected() {
        let records = vec![record("", Category::Math, Difficulty::Easy, "1")];
        assert!(matches!(
            Catalog::from_records(records),
            Err(CatalogLoadError::EmptyId)
        ));
    }

    #[test]
    fn test_blank_answer_rejected() {
        let records = vec![record("r1", Category::Math, Difficulty::Easy, "   ")];
        assert!(matches!(
            Catalog::from_records(records),
            Err(CatalogLoadError::EmptyAnswer { id }) if id == "r1"
        ));
    }

    #[test]
    fn test_load_json() {
        let source = r#"[
            {
                "id": "math_easy_01",
                "prompt": "What is 7 + 5?",
                "canonical_answer": "12",
                "alternate_answers": ["twelve"],
                "category": "math",
                "difficulty": "easy",
                "hint": "Count it out."
            }
        ]"#;
        let catalog = Catalog::load_json(source).unwrap();
        assert_eq!(catalog.len(), 1);

        let rec = catalog.get("math_easy_01").unwrap();
        assert_eq!(rec.category, Category::Math);
        assert_eq!(rec.difficulty, Difficulty::Easy);
        assert!(rec.has_hint());
        // Defaults apply for fields the source leaves out.
        assert_eq!(rec.damage_multiplier, 1.0);
        assert_eq!(rec.experience_reward, 10);
    }

    #[test]
    fn test_load_json_malformed() {
        assert!(matches!(
            Catalog::load_json("not json"),
            Err(CatalogLoadError::Parse(_))
        ));
    }

    #[test]
    fn test_ensure_complete() {
        let records = vec![
            record("e", Category::Math, Difficulty::Easy, "1"),
            record("m", Category::Math, Difficulty::Medium, "2"),
        ];
        let catalog = Catalog::from_records(records).unwrap();
        assert_eq!(
            catalog.ensure_complete(),
            Err(CatalogIncompleteError {
                missing: Difficulty::Hard
            })
        );
    }

    #[test]
    fn test_queries_preserve_insertion_order() {
        let records = vec![
            record("a", Category::Math, Difficulty::Easy, "1"),
            record("b", Category::Logic, Difficulty::Easy, "2"),
            record("c", Category::Math, Difficulty::Hard, "3"),
            record("d", Category::Math, Difficulty::Easy, "4"),
        ];
        let catalog = Catalog::from_records(records).unwrap();

        let easy: Vec<&str> = catalog
            .by_difficulty(Difficulty::Easy)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(easy, vec!["a", "b", "d"]);

        let easy_math: Vec<&str> = catalog
            .by_difficulty_and_category(Difficulty::Easy, &[Category::Math])
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(easy_math, vec!["a", "d"]);
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }
}
