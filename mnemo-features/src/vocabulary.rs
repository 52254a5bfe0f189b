//! Fitted TF-IDF vocabulary.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Serialized form. Terms are stored in index order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VocabularyData {
    terms: Vec<String>,
    idf: Vec<f64>,
    document_count: usize,
}

/// Term → index map with smoothed inverse document frequencies.
///
/// Indices follow lexicographic term order, so two vocabularies fitted on the
/// same documents are identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "VocabularyData", into = "VocabularyData")]
pub struct Vocabulary {
    terms: Vec<String>,
    idf: Vec<f64>,
    index: HashMap<String, u32>,
    document_count: usize,
}

impl Vocabulary {
    /// Fit over per-document term sets.
    ///
    /// Keeps terms with document frequency ≥ `min_df`. When more than
    /// `max_features` survive, the most frequent win, ties broken by term.
    pub fn fit<'a, I, D>(documents: I, min_df: usize, max_features: usize) -> Self
    where
        I: IntoIterator<Item = D>,
        D: IntoIterator<Item = &'a String>,
    {
        let mut df: BTreeMap<&'a str, usize> = BTreeMap::new();
        let mut n = 0usize;
        for doc in documents {
            n += 1;
            let unique: HashSet<&'a str> = doc.into_iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let mut kept: Vec<(&str, usize)> = df
            .into_iter()
            .filter(|&(_, count)| count >= min_df.max(1))
            .collect();
        if kept.len() > max_features {
            kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            kept.truncate(max_features);
            kept.sort_by(|a, b| a.0.cmp(b.0));
        }

        let n_f = n as f64;
        let terms: Vec<String> = kept.iter().map(|(t, _)| t.to_string()).collect();
        let idf = kept
            .iter()
            .map(|&(_, count)| ((1.0 + n_f) / (1.0 + count as f64)).ln() + 1.0)
            .collect();
        Self::assemble(terms, idf, n)
    }

    fn assemble(terms: Vec<String>, idf: Vec<f64>, document_count: usize) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i as u32))
            .collect();
        Self {
            terms,
            idf,
            index,
            document_count,
        }
    }

    /// Number of features. Every classifier trained on this vocabulary has this input dimension.
    pub fn dimension(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<u32> {
        self.index.get(term).copied()
    }

    pub fn idf(&self, index: u32) -> f64 {
        self.idf.get(index as usize).copied().unwrap_or(0.0)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Documents the vocabulary was fitted on.
    pub fn document_count(&self) -> usize {
        self.document_count
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
            && self.idf == other.idf
            && self.document_count == other.document_count
    }
}

impl TryFrom<VocabularyData> for Vocabulary {
    type Error = String;

    fn try_from(data: VocabularyData) -> Result<Self, Self::Error> {
        if data.terms.len() != data.idf.len() {
            return Err(format!(
                "vocabulary has {} terms but {} idf weights",
                data.terms.len(),
                data.idf.len()
            ));
        }
        if data.terms.windows(2).any(|w| w[0] >= w[1]) {
            return Err("vocabulary terms are not strictly sorted".to_string());
        }
        if data.idf.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err("vocabulary contains a non-positive idf weight".to_string());
        }
        Ok(Self::assemble(data.terms, data.idf, data.document_count))
    }
}

impl From<Vocabulary> for VocabularyData {
    fn from(v: Vocabulary) -> Self {
        Self {
            terms: v.terms,
            idf: v.idf,
            document_count: v.document_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|d| d.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn indices_are_lexicographic() {
        let d = docs(&[&["memory", "archive"], &["trauma", "memory"]]);
        let v = Vocabulary::fit(&d, 1, 100);
        assert_eq!(v.terms(), &["archive", "memory", "trauma"]);
        assert_eq!(v.index_of("memory"), Some(1));
    }

    #[test]
    fn smoothed_idf() {
        let d = docs(&[&["memory", "archive"], &["trauma", "memory"]]);
        let v = Vocabulary::fit(&d, 1, 100);
        // df = n → idf = 1
        assert!((v.idf(v.index_of("memory").unwrap()) - 1.0).abs() < 1e-12);
        let expected = (3.0f64 / 2.0).ln() + 1.0;
        assert!((v.idf(v.index_of("trauma").unwrap()) - expected).abs() < 1e-12);
    }

    #[test]
    fn min_df_and_max_features_prune() {
        let d = docs(&[&["a1", "b1", "c1"], &["a1", "b1"], &["a1"]]);
        assert_eq!(Vocabulary::fit(&d, 2, 100).terms(), &["a1", "b1"]);
        assert_eq!(Vocabulary::fit(&d, 1, 1).terms(), &["a1"]);
    }

    #[test]
    fn rejects_unsorted_terms_on_deserialize() {
        let json = r#"{"terms":["b","a"],"idf":[1.0,1.0],"document_count":2}"#;
        assert!(serde_json::from_str::<Vocabulary>(json).is_err());
    }

    #[test]
    fn serde_round_trip_rebuilds_index() {
        let d = docs(&[&["memory", "archive"]]);
        let v = Vocabulary::fit(&d, 1, 100);
        let back: Vocabulary = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
        assert_eq!(back, v);
        assert_eq!(back.index_of("memory"), Some(1));
    }
}
