//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// A category was fitted with its chosen family weighting.
pub fn category_trained(category: &str, plan: &str, weighting: &str, score: Option<f64>) {
    tracing::info!(
        event = "category_trained",
        category = %category,
        plan = %plan,
        weighting = %weighting,
        score = ?score,
        "category trained"
    );
}

/// Held-out validation was skipped for a category.
pub fn low_training_support(category: &str, reason: &str) {
    tracing::warn!(
        event = "low_training_support",
        category = %category,
        reason = %reason,
        "insufficient training data, category flagged as low support"
    );
}

pub fn training_completed(examples: usize, dimension: usize, elapsed_ms: u128) {
    tracing::info!(
        event = "training_completed",
        examples = examples,
        dimension = dimension,
        elapsed_ms = elapsed_ms as u64,
        "training completed"
    );
}

/// A ground-truth label was discarded while loading a corpus.
pub fn corpus_label_dropped(paper: &str, field: &str, value: &str, reason: &str) {
    tracing::warn!(
        event = "corpus_label_dropped",
        paper = %paper,
        field = %field,
        value = %value,
        reason = %reason,
        "corpus label dropped"
    );
}

pub fn batch_tagged(papers: usize, mode: &str) {
    tracing::info!(event = "batch_tagged", papers = papers, mode = %mode, "batch tagged");
}

pub fn evaluation_completed(examples: usize, mean_jaccard: f64) {
    tracing::info!(
        event = "evaluation_completed",
        examples = examples,
        mean_jaccard = mean_jaccard,
        "evaluation completed"
    );
}

pub fn model_saved(path: &str, bytes: usize, categories: usize) {
    tracing::info!(
        event = "model_saved",
        path = %path,
        bytes = bytes,
        categories = categories,
        "model saved"
    );
}

pub fn model_loaded(path: &str, dimension: usize, trained_at: &str) {
    tracing::info!(
        event = "model_loaded",
        path = %path,
        dimension = dimension,
        trained_at = %trained_at,
        "model loaded"
    );
}

/// A stored artifact failed verification and was not used.
pub fn artifact_rejected(path: &str, error: &str) {
    tracing::warn!(event = "artifact_rejected", path = %path, error = %error, "model artifact rejected");
}
