use serde::{Deserialize, Serialize};

/// Sparse feature vector: `(index, weight)` pairs sorted by index, no zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    dimension: usize,
    entries: Vec<(u32, f64)>,
}

impl FeatureVector {
    /// A vector with no active features.
    pub fn zero(dimension: usize) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
        }
    }

    /// Build from unsorted pairs. Duplicate indices are summed, zeros and
    /// out-of-range indices dropped.
    pub fn from_pairs(dimension: usize, mut pairs: Vec<(u32, f64)>) -> Self {
        pairs.retain(|&(i, w)| (i as usize) < dimension && w != 0.0 && w.is_finite());
        pairs.sort_by_key(|&(i, _)| i);
        let mut entries: Vec<(u32, f64)> = Vec::with_capacity(pairs.len());
        for (i, w) in pairs {
            match entries.last_mut() {
                Some(last) if last.0 == i => last.1 += w,
                _ => entries.push((i, w)),
            }
        }
        entries.retain(|&(_, w)| w != 0.0);
        Self { dimension, entries }
    }

    /// Scale to unit L2 norm. The zero vector stays zero.
    pub fn l2_normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > f64::EPSILON {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no feature is active.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: u32) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product with a dense weight vector. Indices past its end count as zero.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(i, w)| dense.get(i as usize).map(|d| d * w))
            .sum()
    }

    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dimension];
        for &(i, w) in &self.entries {
            dense[i as usize] = w;
        }
        dense
    }
}
