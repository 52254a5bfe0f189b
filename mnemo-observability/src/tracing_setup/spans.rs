//! Span definitions per operation: training, tagging, evaluation, store.

/// Span around a full training run.
#[macro_export]
macro_rules! training_span {
    ($examples:expr) => {
        tracing::info_span!("mnemo.training", examples = $examples)
    };
}

/// Span around training one category.
#[macro_export]
macro_rules! category_span {
    ($category:expr) => {
        tracing::info_span!("mnemo.training.category", category = %$category)
    };
}

/// Span around a tagging batch.
#[macro_export]
macro_rules! tagging_span {
    ($batch_size:expr, $mode:expr) => {
        tracing::info_span!("mnemo.tagging", batch_size = $batch_size, mode = %$mode)
    };
}

/// Span around an evaluation run.
#[macro_export]
macro_rules! evaluation_span {
    ($examples:expr) => {
        tracing::info_span!("mnemo.evaluation", examples = $examples)
    };
}

/// Span around a model store operation.
#[macro_export]
macro_rules! store_span {
    ($operation:expr, $path:expr) => {
        tracing::info_span!("mnemo.store", operation = $operation, path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TRAINING: &str = "mnemo.training";
    pub const TRAINING_CATEGORY: &str = "mnemo.training.category";
    pub const TAGGING: &str = "mnemo.tagging";
    pub const EVALUATION: &str = "mnemo.evaluation";
    pub const STORE: &str = "mnemo.store";
}
