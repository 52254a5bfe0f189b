//! The closed tag taxonomy: four categories, each with a fixed vocabulary.

mod carriers;
mod concepts;
mod disciplines;
mod periods;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use carriers::MEMORY_CARRIERS;
pub use concepts::CONCEPTS;
pub use disciplines::DISCIPLINES;
pub use periods::{PeriodRange, PERIODS, PERIOD_RANGES};

/// A tag code with its human-readable label and lexical trigger phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDef {
    pub code: &'static str,
    pub label: &'static str,
    /// Lowercase phrases whose presence in a paper's text suggests this tag.
    pub triggers: &'static [&'static str],
}

impl TagDef {
    pub const fn new(
        code: &'static str,
        label: &'static str,
        triggers: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            label,
            triggers,
        }
    }
}

/// Tagging dimension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Time,
    Discipline,
    MemoryCarrier,
    Concept,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Time,
        Category::Discipline,
        Category::MemoryCarrier,
        Category::Concept,
    ];

    /// Categories predicted by trained classifiers. Time is rule-derived.
    pub const LEARNED: [Category; 3] = [
        Category::Discipline,
        Category::MemoryCarrier,
        Category::Concept,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Time => "time",
            Category::Discipline => "discipline",
            Category::MemoryCarrier => "memory_carrier",
            Category::Concept => "concept",
        }
    }

    /// Ground-truth field name in a labelled corpus item.
    pub fn corpus_field(self) -> &'static str {
        match self {
            Category::Time => "true_time",
            Category::Discipline => "true_disciplines",
            Category::MemoryCarrier => "true_memory_carriers",
            Category::Concept => "true_concepts",
        }
    }

    pub fn vocabulary(self) -> &'static [TagDef] {
        match self {
            Category::Time => PERIODS,
            Category::Discipline => DISCIPLINES,
            Category::MemoryCarrier => MEMORY_CARRIERS,
            Category::Concept => CONCEPTS,
        }
    }

    pub fn tag(self, code: &str) -> Option<&'static TagDef> {
        self.vocabulary().iter().find(|def| def.code == code)
    }

    pub fn contains(self, code: &str) -> bool {
        self.tag(code).is_some()
    }

    pub fn is_learned(self) -> bool {
        self != Category::Time
    }

    /// Resolve a curated label to a tag: exact code first, then a loose match
    /// on the label or the code ignoring case and punctuation, so
    /// `"cultural_memory"` finds `CTCulturalMemory`.
    pub fn resolve(self, raw: &str) -> Option<&'static TagDef> {
        let raw = raw.trim();
        if let Some(def) = self.tag(raw) {
            return Some(def);
        }
        let wanted = squash(raw);
        if wanted.is_empty() {
            return None;
        }
        self.vocabulary().iter().find(|def| {
            squash(def.label) == wanted
                || squash(def.code) == wanted
                || def
                    .code
                    .get(code_prefix(self).len()..)
                    .is_some_and(|rest| squash(rest) == wanted)
        })
    }

    /// Which category a bare tag code belongs to, by exact vocabulary lookup.
    pub fn of_code(code: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.contains(code))
    }
}

fn code_prefix(category: Category) -> &'static str {
    match category {
        Category::Time => "T",
        Category::Discipline => "D",
        Category::MemoryCarrier => "MC",
        Category::Concept => "CT",
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_sizes() {
        assert_eq!(Category::Time.vocabulary().len(), 5);
        assert_eq!(Category::Discipline.vocabulary().len(), 20);
        assert_eq!(Category::MemoryCarrier.vocabulary().len(), 16);
        assert_eq!(Category::Concept.vocabulary().len(), 106);
    }

    #[test]
    fn of_code_finds_owner() {
        assert_eq!(Category::of_code("T3"), Some(Category::Time));
        assert_eq!(Category::of_code("MCNAT"), Some(Category::MemoryCarrier));
        assert_eq!(Category::of_code("CTTrauma"), Some(Category::Concept));
        assert_eq!(Category::of_code("XYZ"), None);
    }

    #[test]
    fn resolve_accepts_codes_and_loose_labels() {
        let code = |c: Category, raw: &str| c.resolve(raw).map(|d| d.code);
        assert_eq!(code(Category::Concept, "CTTrauma"), Some("CTTrauma"));
        assert_eq!(code(Category::Concept, "cultural_memory"), Some("CTCulturalMemory"));
        assert_eq!(code(Category::Discipline, " DSOC "), Some("DSOC"));
        assert_eq!(code(Category::Discipline, "dsoc"), Some("DSOC"));
        assert_eq!(code(Category::Concept, "not a concept"), None);
        assert_eq!(code(Category::Concept, "__"), None);
    }
}
