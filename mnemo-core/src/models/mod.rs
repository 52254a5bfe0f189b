mod paper;
mod prediction;
mod training_example;

pub use paper::Paper;
pub use prediction::{CategoryPrediction, CategoryStatus, PaperTags, TagScore};
pub use training_example::TrainingExample;
