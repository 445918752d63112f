use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use lexibuild::{
    build_levels, load_corpus, output, select_words, Alphabet, LevelConfig, LexibuildError,
    SelectOptions, Selection,
};

/// Build typing-tutor dictionaries from a frequency-ranked word corpus.
#[derive(Parser)]
#[command(name = "lexibuild")]
struct Args {
    /// Leipzig-style *-words.txt frequency file (rank\tword\tfrequency).
    #[clap(long)]
    corpus: PathBuf,
    /// JSON level document; switches to one-list-per-level mode.
    #[clap(long)]
    levels: Option<PathBuf>,
    /// Output directory for level mode.
    #[clap(long, default_value = "dictionary/levels")]
    out_dir: PathBuf,
    /// Output file for single-list mode.
    #[clap(long, default_value = "dictionary/ca.txt")]
    output: PathBuf,
    /// Provenance companion file for single-list mode.
    #[clap(long, default_value = "dictionary/ca.source.txt")]
    source_output: PathBuf,
    #[clap(long, default_value_t = 1200)]
    target_size: usize,
    #[clap(long, default_value_t = 400)]
    seed_size: usize,
    /// Cap on the scanned candidate window; 0 scans the whole pool.
    #[clap(long, default_value_t = 20000)]
    candidate_size: usize,
    /// Emit a machine-readable run summary on stdout.
    #[clap(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), LexibuildError> {
    let args = Args::parse();

    // Fail fast, before any corpus work.
    if args.levels.is_none() && args.seed_size > args.target_size {
        return Err(LexibuildError::Config(format!(
            "seed size {} cannot be larger than target size {}",
            args.seed_size, args.target_size
        )));
    }

    let config = match &args.levels {
        Some(path) => Some(LevelConfig::from_path(path)?),
        None => None,
    };
    // Level mode screens the corpus against the union of every level's
    // additions; single-list mode uses the Catalan master set.
    let alphabet = match &config {
        Some(config) => config.master_alphabet(),
        None => Alphabet::catalan(),
    };
    let start = Instant::now();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(format!("loading corpus {}", args.corpus.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let master = load_corpus(&args.corpus, &alphabet)?;
    spinner.finish_and_clear();
    eprintln!("Loaded {} candidate words", master.len());

    let corpus_label = args.corpus.display().to_string();

    if let Some(config) = &config {
        let results = build_levels(&master, &config.levels, args.candidate_size)?;

        fs::create_dir_all(&args.out_dir)?;
        let mut written = 0usize;
        for level in &results {
            if !level.dropped_includes.is_empty() {
                eprintln!(
                    "Level {}: dropped include words not yet spellable: {}",
                    level.name,
                    level.dropped_includes.join(", ")
                );
            }
            if level.words.is_empty() {
                eprintln!("Level {}: no viable candidates, skipping output", level.name);
                continue;
            }
            let path = args.out_dir.join(format!("{}.txt", level.name));
            output::write_word_list(&path, &level.words)?;
            written += 1;
            report_missing(&level.name, &level.missing);
            eprintln!("Wrote {} words to {}", level.words.len(), path.display());
        }
        output::write_source_info(args.out_dir.join("source.txt"), &corpus_label)?;

        if args.json {
            let summary = serde_json::json!({
                "mode": "levels",
                "corpus_words": master.len(),
                "levels": results.len(),
                "files_written": written,
                "elapsed_ms": start.elapsed().as_millis(),
            });
            println!("{}", serde_json::to_string_pretty(&summary).unwrap());
        }
        return Ok(());
    }

    let opts = SelectOptions {
        target_size: args.target_size,
        seed_size: args.seed_size,
        candidate_limit: args.candidate_size,
    };
    let Selection { words, missing } = select_words(&master, opts, &alphabet, &[])?;

    if let Some(parent) = args.output.parent() {
        fs::create_dir_all(parent)?;
    }
    if let Some(parent) = args.source_output.parent() {
        fs::create_dir_all(parent)?;
    }
    output::write_word_list(&args.output, &words)?;
    output::write_source_info(&args.source_output, &corpus_label)?;

    report_missing("dictionary", &missing);
    eprintln!("Wrote {} words to {}", words.len(), args.output.display());

    if args.json {
        let summary = serde_json::json!({
            "mode": "single",
            "corpus_words": master.len(),
            "selected_words": words.len(),
            "missing_features": missing.len(),
            "elapsed_ms": start.elapsed().as_millis(),
        });
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
    }
    Ok(())
}

/// Uncovered features are informational, never an error.
fn report_missing(label: &str, missing: &std::collections::BTreeSet<lexibuild::Feature>) {
    if missing.is_empty() {
        return;
    }
    let rendered: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
    eprintln!("{label}: missing coverage: {}", rendered.join(", "));
}
