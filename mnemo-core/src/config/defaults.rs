// Single source of truth for all default values.

// --- Features ---
pub const DEFAULT_NGRAM_MAX: usize = 2;
pub const DEFAULT_MIN_DF: usize = 1;
pub const DEFAULT_MAX_FEATURES: usize = 5_000;
pub const DEFAULT_TITLE_WEIGHT: f64 = 1.0;
pub const DEFAULT_ABSTRACT_WEIGHT: f64 = 1.5;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 1.0;
pub const DEFAULT_COLLECTION_WEIGHT: f64 = 0.5;
pub const DEFAULT_REMOVE_STOP_WORDS: bool = true;

// --- Classifier ---
pub const DEFAULT_FOREST_TREES: usize = 32;
pub const DEFAULT_FOREST_MAX_DEPTH: usize = 4;
pub const DEFAULT_FOREST_MIN_SAMPLES_SPLIT: usize = 2;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_NB_ALPHA: f64 = 1.0;
pub const DEFAULT_LOGISTIC_EPOCHS: usize = 300;
pub const DEFAULT_LOGISTIC_LEARNING_RATE: f64 = 1.0;
pub const DEFAULT_LOGISTIC_L2: f64 = 1e-4;

// --- Training ---
pub const DEFAULT_MAX_FOLDS: usize = 5;
pub const DEFAULT_LOO_MAX_EXAMPLES: usize = 10;
pub const DEFAULT_PARALLEL_TRAINING: bool = true;

// --- Blending ---
pub const DEFAULT_ML_WEIGHT: f64 = 0.7;
pub const DEFAULT_RULE_WEIGHT: f64 = 0.3;
pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1_000;

// --- Confidence ---
pub const DEFAULT_MIN_SUPPORT: usize = 2;
pub const DEFAULT_LOW_SUPPORT_FLOOR: f64 = 0.3;
pub const DEFAULT_LOW_SUPPORT_CEILING: f64 = 0.6;
pub const DEFAULT_TAG_COUNT_PENALTY: f64 = 0.1;

// --- Store ---
pub const DEFAULT_MODEL_PATH: &str = "mnemo-model.bin";
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
