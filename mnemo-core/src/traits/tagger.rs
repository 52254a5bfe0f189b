use crate::errors::MnemoResult;
use crate::models::{Paper, PaperTags};

/// Anything that assigns tags to papers: a trained hybrid engine or the
/// rule-only fallback.
pub trait ITagger: Send + Sync {
    /// Tag one paper. Never fails: missing signal yields empty sets.
    fn tag(&self, paper: &Paper) -> PaperTags;

    /// Tag a batch. Fails only when the batch exceeds the configured limit.
    fn tag_batch(&self, papers: &[Paper]) -> MnemoResult<Vec<PaperTags>>;

    /// Human-readable name for logs.
    fn name(&self) -> &str;
}
