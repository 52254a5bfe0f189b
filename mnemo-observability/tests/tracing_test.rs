use mnemo_core::config::ObservabilityConfig;
use mnemo_observability::tracing_setup::spans::names;
use mnemo_observability::{category_span, init_tracing, training_span};

#[test]
fn init_is_idempotent() {
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    init_tracing(&config);
    mnemo_observability::init_tracing_with_filter("debug");
}

#[test]
fn span_macros_carry_their_names() {
    init_tracing(&ObservabilityConfig::default());
    let span = training_span!(12usize);
    let _entered = span.enter();
    let inner = category_span!("concept");
    if let Some(meta) = inner.metadata() {
        assert_eq!(meta.name(), names::TRAINING_CATEGORY);
    }
    mnemo_observability::events::low_training_support("concept", "single example");
}
