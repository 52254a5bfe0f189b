mod tagger;

pub use tagger::ITagger;
