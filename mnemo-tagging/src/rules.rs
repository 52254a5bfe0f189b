//! Lexical trigger rules for the learned categories.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use mnemo_core::taxonomy::TagDef;
use mnemo_core::{Category, Paper};
use regex::Regex;
use tracing::warn;

/// One tag's compiled trigger pattern.
struct TagRule {
    code: &'static str,
    /// `None` when the tag has no triggers or the pattern failed to compile;
    /// the tag then only matches by its code.
    pattern: Option<Regex>,
    triggers: &'static [&'static str],
}

impl TagRule {
    fn compile(category: Category, def: &TagDef) -> Self {
        let pattern = if def.triggers.is_empty() {
            None
        } else {
            let alternation = def
                .triggers
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            match Regex::new(&format!(r"(?i)\b(?:{alternation})\b")) {
                Ok(re) => Some(re),
                Err(err) => {
                    warn!(category = %category, code = def.code, error = %err, "trigger pattern rejected");
                    None
                }
            }
        };
        Self {
            code: def.code,
            pattern,
            triggers: def.triggers,
        }
    }

    fn matches_text(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Keywords and collections match on the exact code or a trigger phrase.
    fn matches_label(&self, label: &str) -> bool {
        let label = label.trim();
        label == self.code
            || self.triggers.iter().any(|t| t.eq_ignore_ascii_case(label))
            || self.matches_text(label)
    }
}

/// Compiled trigger rules for every learned category.
pub struct RuleSet {
    rules: BTreeMap<Category, Vec<TagRule>>,
}

static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::compile);

impl RuleSet {
    /// The process-wide rule set, compiled on first use.
    pub fn shared() -> &'static RuleSet {
        &DEFAULT_RULES
    }

    pub fn compile() -> Self {
        let rules = Category::LEARNED
            .into_iter()
            .map(|category| {
                let compiled = category
                    .vocabulary()
                    .iter()
                    .map(|def| TagRule::compile(category, def))
                    .collect();
                (category, compiled)
            })
            .collect();
        Self { rules }
    }

    /// Rule scores for one category: 1.0 for every matching tag, absent otherwise.
    pub fn score(&self, paper: &Paper, category: Category) -> BTreeMap<String, f64> {
        let Some(rules) = self.rules.get(&category) else {
            return BTreeMap::new();
        };
        let abstract_text = paper.abstract_text.as_deref().unwrap_or("");
        rules
            .iter()
            .filter(|rule| {
                rule.matches_text(&paper.title)
                    || rule.matches_text(abstract_text)
                    || paper.keywords.iter().any(|k| rule.matches_label(k))
                    || paper.collections.iter().any(|c| rule.matches_label(c))
            })
            .map(|rule| (rule.code.to_string(), 1.0))
            .collect()
    }

    pub fn rule_count(&self, category: Category) -> usize {
        self.rules.get(&category).map_or(0, Vec::len)
    }
}
