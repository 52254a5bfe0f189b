//! Labelled-corpus and paper-batch loading.
//!
//! Input is reference-manager JSON, read leniently: creators as objects or
//! plain names, the year as a number, a string, or embedded in `date`, and
//! tags as strings or `{"tag": ..}` objects. An item that cannot be read is
//! skipped with a warning; a document that cannot be read at all is an error.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use mnemo_core::errors::{MnemoError, MnemoResult, TrainingError};
use mnemo_core::{Category, Paper, TrainingExample};
use mnemo_observability::events;
use mnemo_tagging::period_for_year;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

static BCE_YEAR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,4})\s*(?:bce|bc|b\.c\.)").ok());

static CE_YEAR: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d{4}").ok());

/// A loaded training corpus.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub examples: Vec<TrainingExample>,
    /// Ground-truth values that named no known tag, or contradicted the year.
    pub dropped_labels: usize,
    /// Items that could not be read at all.
    pub skipped_items: usize,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Wrapped { items: Vec<Value> },
    Bare(Vec<Value>),
}

impl Document {
    fn into_items(self) -> Vec<Value> {
        match self {
            Document::Wrapped { items } | Document::Bare(items) => items,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawItem {
    key: Option<String>,
    title: Option<String>,
    creators: Vec<RawCreator>,
    authors: Vec<RawCreator>,
    year: Option<RawYear>,
    date: Option<String>,
    #[serde(rename = "itemType")]
    item_type: Option<String>,
    #[serde(rename = "abstract", alias = "abstractNote")]
    abstract_text: Option<String>,
    tags: Vec<RawTag>,
    keywords: Vec<String>,
    collections: Vec<String>,
    true_disciplines: Option<RawLabels>,
    true_memory_carriers: Option<RawLabels>,
    true_concepts: Option<RawLabels>,
    true_time: Option<RawLabels>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCreator {
    Name(String),
    Person {
        #[serde(rename = "firstName", default)]
        first_name: String,
        #[serde(rename = "lastName", default)]
        last_name: String,
        #[serde(default)]
        name: String,
    },
}

impl RawCreator {
    fn display_name(&self) -> String {
        match self {
            RawCreator::Name(name) => name.trim().to_string(),
            RawCreator::Person {
                first_name,
                last_name,
                name,
            } => {
                if !name.trim().is_empty() {
                    name.trim().to_string()
                } else {
                    format!("{} {}", first_name.trim(), last_name.trim())
                        .trim()
                        .to_string()
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawYear {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTag {
    Text(String),
    Object { tag: String },
}

impl RawTag {
    fn text(&self) -> &str {
        match self {
            RawTag::Text(t) | RawTag::Object { tag: t } => t.trim(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLabels {
    One(String),
    Many(Vec<String>),
}

impl RawLabels {
    fn values(&self) -> Vec<&str> {
        match self {
            RawLabels::One(v) => vec![v.as_str()],
            RawLabels::Many(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

impl RawItem {
    fn labels(&self, category: Category) -> Option<&RawLabels> {
        match category {
            Category::Time => self.true_time.as_ref(),
            Category::Discipline => self.true_disciplines.as_ref(),
            Category::MemoryCarrier => self.true_memory_carriers.as_ref(),
            Category::Concept => self.true_concepts.as_ref(),
        }
    }

    fn has_ground_truth(&self) -> bool {
        Category::ALL.into_iter().any(|c| self.labels(c).is_some())
    }

    fn year(&self) -> Option<i32> {
        let explicit = match &self.year {
            Some(RawYear::Number(n)) => i32::try_from(*n).ok(),
            Some(RawYear::Text(s)) => s
                .trim()
                .parse::<i32>()
                .ok()
                .or_else(|| year_from_date(s)),
            None => None,
        };
        explicit.or_else(|| self.date.as_deref().and_then(year_from_date))
    }

    fn into_paper(self, index: usize) -> Paper {
        let year = self.year();
        let key = match self.key.as_deref().map(str::trim) {
            Some(k) if !k.is_empty() => k.to_string(),
            _ => {
                debug!(index, "corpus item without key");
                format!("item-{index}")
            }
        };
        let authors = self
            .creators
            .iter()
            .chain(&self.authors)
            .map(RawCreator::display_name)
            .filter(|n| !n.is_empty())
            .collect();
        let keywords = self
            .tags
            .iter()
            .map(|t| t.text().to_string())
            .chain(self.keywords.iter().map(|k| k.trim().to_string()))
            .filter(|k| !k.is_empty())
            .collect();
        Paper {
            key,
            title: self.title.unwrap_or_default(),
            authors,
            year,
            abstract_text: self.abstract_text,
            keywords,
            collections: self.collections,
            entry_type: self.item_type.unwrap_or_default(),
        }
    }
}

/// First year found in a free-form date. Years marked BCE come out negative.
pub fn year_from_date(date: &str) -> Option<i32> {
    if let Some(caps) = BCE_YEAR.as_ref().and_then(|re| re.captures(date)) {
        return caps.get(1)?.as_str().parse::<i32>().ok().map(|y| -y);
    }
    CE_YEAR
        .as_ref()
        .and_then(|re| re.find(date))
        .and_then(|m| m.as_str().parse().ok())
}

fn read_items(json: &str) -> Result<Vec<Value>, serde_json::Error> {
    serde_json::from_str::<Document>(json).map(Document::into_items)
}

fn read_item(index: usize, value: Value) -> Option<RawItem> {
    match serde_json::from_value::<RawItem>(value) {
        Ok(item) => Some(item),
        Err(err) => {
            warn!(index, error = %err, "unreadable corpus item skipped");
            None
        }
    }
}

/// Parse a labelled corpus: `{"items": [...]}` or a bare array.
pub fn parse_corpus(json: &str) -> MnemoResult<Corpus> {
    let items = read_items(json).map_err(|e| TrainingError::InvalidCorpus {
        reason: e.to_string(),
    })?;
    if items.is_empty() {
        return Err(TrainingError::EmptyCorpus.into());
    }

    let total = items.len();
    let mut corpus = Corpus::default();
    for (index, value) in items.into_iter().enumerate() {
        let Some(item) = read_item(index, value) else {
            corpus.skipped_items += 1;
            continue;
        };
        let (example, dropped) = to_example(index, item);
        corpus.dropped_labels += dropped;
        corpus.examples.push(example);
    }

    if corpus.examples.is_empty() {
        return Err(TrainingError::InvalidCorpus {
            reason: format!("none of the {total} items could be read"),
        }
        .into());
    }
    info!(
        examples = corpus.len(),
        skipped = corpus.skipped_items,
        dropped_labels = corpus.dropped_labels,
        "corpus loaded"
    );
    Ok(corpus)
}

pub fn load_corpus(path: &Path) -> MnemoResult<Corpus> {
    parse_corpus(&read_file(path)?)
}

/// Parse papers to tag. Ground-truth fields, if any, are ignored.
pub fn parse_papers(json: &str) -> MnemoResult<Vec<Paper>> {
    let items = read_items(json)?;
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| read_item(index, value).map(|i| i.into_paper(index)))
        .collect())
}

pub fn load_papers(path: &Path) -> MnemoResult<Vec<Paper>> {
    parse_papers(&read_file(path)?)
}

fn read_file(path: &Path) -> MnemoResult<String> {
    std::fs::read_to_string(path).map_err(|e| MnemoError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Build one example and count the labels that had to be dropped.
///
/// Items with explicit `true_*` fields use those. Otherwise tag codes found
/// among the item's tags serve as ground truth. Codes used as labels are
/// removed from the paper's keywords so the model never sees its own answer.
fn to_example(index: usize, item: RawItem) -> (TrainingExample, usize) {
    let explicit = item.has_ground_truth();
    let time_labels: Vec<String> = item
        .labels(Category::Time)
        .map(|l| l.values().into_iter().map(str::to_string).collect())
        .unwrap_or_default();
    let learned: Vec<(Category, Vec<String>)> = Category::LEARNED
        .into_iter()
        .map(|c| {
            let values = item
                .labels(c)
                .map(|l| l.values().into_iter().map(str::to_string).collect())
                .unwrap_or_default();
            (c, values)
        })
        .collect();

    let mut paper = item.into_paper(index);
    let mut dropped = 0;
    let mut example_labels: Vec<(Category, Vec<String>)> = Vec::new();

    if explicit {
        for (category, values) in learned {
            let mut codes = Vec::new();
            for value in values {
                match category.resolve(&value) {
                    Some(def) => codes.push(def.code.to_string()),
                    None => {
                        dropped += 1;
                        events::corpus_label_dropped(
                            &paper.key,
                            category.corpus_field(),
                            &value,
                            "unknown tag code",
                        );
                    }
                }
            }
            example_labels.push((category, codes));
        }
        dropped += check_time_labels(&paper, &time_labels);
    } else {
        let mut found: Vec<(Category, Vec<String>)> =
            Category::LEARNED.into_iter().map(|c| (c, Vec::new())).collect();
        for keyword in &paper.keywords {
            if let Some(category) = Category::of_code(keyword).filter(|c| c.is_learned()) {
                if let Some((_, codes)) = found.iter_mut().find(|(c, _)| *c == category) {
                    codes.push(keyword.clone());
                }
            }
        }
        if found.iter().any(|(_, codes)| !codes.is_empty()) {
            example_labels = found;
        }
    }

    let label_codes: BTreeSet<&str> = example_labels
        .iter()
        .flat_map(|(_, codes)| codes.iter().map(String::as_str))
        .collect();
    paper.keywords.retain(|k| !label_codes.contains(k.as_str()));

    let example = example_labels
        .into_iter()
        .fold(TrainingExample::new(paper), |ex, (category, codes)| {
            ex.with_labels(category, codes)
        });
    (example, dropped)
}

/// Time is derived from the year, so curated periods are only checked.
fn check_time_labels(paper: &Paper, values: &[String]) -> usize {
    let expected = paper.year.map(period_for_year);
    let mut dropped = 0;
    for value in values {
        let reason = match (Category::Time.resolve(value), expected) {
            (None, _) => "unknown period code".to_string(),
            (Some(def), Some(period)) if def.code != period => {
                format!("publication year implies {period}")
            }
            _ => continue,
        };
        dropped += 1;
        events::corpus_label_dropped(&paper.key, Category::Time.corpus_field(), value, &reason);
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_from_dates() {
        assert_eq!(year_from_date("2020-05-01"), Some(2020));
        assert_eq!(year_from_date("May 1998"), Some(1998));
        assert_eq!(year_from_date("44 BCE"), Some(-44));
        assert_eq!(year_from_date("c. 300 BC"), Some(-300));
        assert_eq!(year_from_date("undated"), None);
    }

    #[test]
    fn lenient_item_fields() {
        let json = r#"{"items": [{
            "key": "K1",
            "title": "T",
            "creators": [{"firstName": "Maurice", "lastName": "Halbwachs"}, "Pierre Nora"],
            "year": "1925",
            "tags": ["memory", {"tag": "sociology"}],
            "true_concepts": "collective memory",
            "true_time": ["T2"]
        }]}"#;
        let corpus = parse_corpus(json).unwrap();
        let ex = &corpus.examples[0];
        assert_eq!(ex.paper.authors, vec!["Maurice Halbwachs", "Pierre Nora"]);
        assert_eq!(ex.paper.year, Some(1925));
        assert_eq!(ex.paper.keywords, vec!["memory", "sociology"]);
        assert_eq!(ex.labels_for(Category::Concept), ["CTCollectiveMemory"]);
        assert!(ex.labels_for(Category::Discipline).is_empty());
        assert_eq!(corpus.dropped_labels, 0);
    }

    #[test]
    fn contradicting_period_is_counted() {
        let json = r#"[{"key": "K", "title": "T", "date": "2001", "true_time": ["T1", "TX"]}]"#;
        let corpus = parse_corpus(json).unwrap();
        assert_eq!(corpus.dropped_labels, 2);
        assert!(!corpus.examples[0].labels.contains_key(&Category::Time));
    }
}
