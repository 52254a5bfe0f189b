//! `mnemo`: train a tagging model, tag papers, evaluate against ground truth.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mnemo", version, about = "Hybrid auto-tagging for memory-studies papers")]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long, global = true, env = "MNEMO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train a model on a labelled corpus and persist it.
    Train {
        /// Labelled corpus JSON (`{"items": [...]}`).
        #[arg(long)]
        corpus: PathBuf,

        /// Where to write the model. Defaults to `store.model_path`.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Tag a batch of papers.
    Tag {
        /// Model artifact. Defaults to `store.model_path`.
        #[arg(long)]
        model: Option<PathBuf>,

        /// Papers JSON (`{"items": [...]}` or a bare array).
        #[arg(long)]
        input: PathBuf,

        /// Output JSON. Stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Tag with the temporal and lexical rules only, without a model.
        #[arg(long)]
        rules_only: bool,
    },

    /// Compare a tagger's output with a labelled corpus.
    Evaluate {
        #[arg(long)]
        model: Option<PathBuf>,

        #[arg(long)]
        corpus: PathBuf,

        #[arg(long)]
        rules_only: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    mnemo_observability::init_tracing(&config.observability);

    match cli.command {
        Command::Train { corpus, out } => {
            let report = commands::train(&config, &corpus, out.as_deref())?;
            commands::write_json(&report, None)
        }
        Command::Tag {
            model,
            input,
            output,
            rules_only,
        } => {
            let model = if rules_only { None } else { Some(commands::model_path(&config, model)) };
            let tagged = commands::tag(&config, model.as_deref(), &input)?;
            commands::write_json(&tagged, output.as_deref())
        }
        Command::Evaluate {
            model,
            corpus,
            rules_only,
        } => {
            let model = if rules_only { None } else { Some(commands::model_path(&config, model)) };
            let report = commands::evaluate(&config, model.as_deref(), &corpus)?;
            commands::write_json(&report, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_arguments_parse() {
        let cli = Cli::try_parse_from([
            "mnemo", "tag", "--input", "papers.json", "--rules-only", "--config", "mnemo.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("mnemo.toml")));
        match cli.command {
            Command::Tag {
                input,
                rules_only,
                model,
                output,
            } => {
                assert_eq!(input, PathBuf::from("papers.json"));
                assert!(rules_only);
                assert!(model.is_none());
                assert!(output.is_none());
            }
            _ => panic!("expected tag"),
        }
    }

    #[test]
    fn train_requires_a_corpus() {
        assert!(Cli::try_parse_from(["mnemo", "train", "--out", "m.bin"]).is_err());
    }
}
