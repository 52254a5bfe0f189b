use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use mnemo_core::{MnemoConfig, PaperTags};
use mnemo_store::ModelStore;
use mnemo_tagging::{BatchSummary, TaggingEngine};
use mnemo_training::{
    evaluate as evaluate_tagger, load_corpus, load_papers, EvaluationReport, ModelTrainer,
    TrainingReport,
};
use serde::Serialize;
use tracing::info;

/// Output of `mnemo tag`.
#[derive(Debug, Serialize)]
pub struct TaggedBatch {
    pub mode: String,
    pub papers: Vec<PaperTags>,
    pub summary: BatchSummary,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<MnemoConfig> {
    match path {
        Some(p) => MnemoConfig::from_file(p)
            .with_context(|| format!("loading configuration from {}", p.display())),
        None => Ok(MnemoConfig::default()),
    }
}

pub fn model_path(config: &MnemoConfig, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(&config.store.model_path))
}

pub fn train(
    config: &MnemoConfig,
    corpus: &Path,
    out: Option<&Path>,
) -> anyhow::Result<TrainingReport> {
    let corpus = load_corpus(corpus)
        .with_context(|| format!("loading corpus {}", corpus.display()))?;
    let out = out.map_or_else(|| PathBuf::from(&config.store.model_path), Path::to_path_buf);
    let store = ModelStore::new(&out, config.store.compression_level);
    let (_, report) = ModelTrainer::new(config.clone())
        .train_and_save(&corpus.examples, &store)
        .with_context(|| format!("training model into {}", out.display()))?;
    info!(path = %out.display(), examples = report.examples, "training finished");
    Ok(report)
}

fn engine(config: &MnemoConfig, model: Option<&Path>) -> anyhow::Result<TaggingEngine> {
    let Some(path) = model else {
        return Ok(TaggingEngine::rule_only(config));
    };
    let model = ModelStore::new(path, config.store.compression_level)
        .load(&config.features)
        .with_context(|| format!("loading model {}", path.display()))?;
    Ok(TaggingEngine::new(Arc::new(model), config))
}

/// Tag every paper in `input`, in chunks of at most `max_batch_size`.
pub fn tag(config: &MnemoConfig, model: Option<&Path>, input: &Path) -> anyhow::Result<TaggedBatch> {
    let engine = engine(config, model)?;
    let papers =
        load_papers(input).with_context(|| format!("reading papers {}", input.display()))?;
    let mut tagged = Vec::with_capacity(papers.len());
    for chunk in papers.chunks(config.blending.max_batch_size.max(1)) {
        tagged.extend(engine.tag_batch(chunk)?);
    }
    let summary = BatchSummary::from_results(&tagged);
    Ok(TaggedBatch {
        mode: mnemo_core::ITagger::name(&engine).to_string(),
        papers: tagged,
        summary,
    })
}

pub fn evaluate(
    config: &MnemoConfig,
    model: Option<&Path>,
    corpus: &Path,
) -> anyhow::Result<EvaluationReport> {
    let engine = engine(config, model)?;
    let corpus = load_corpus(corpus)
        .with_context(|| format!("loading corpus {}", corpus.display()))?;
    Ok(evaluate_tagger(&engine, &corpus.examples))
}

/// Pretty JSON to `path`, or to stdout when `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            let file = File::create(p).with_context(|| format!("creating {}", p.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, value)?;
            writeln!(lock)?;
        }
    }
    Ok(())
}
