//! Batch command - extract records from many descriptions at once.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use super::{build_extractor, load_config, parse_post_type};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input file with one description per line
    #[arg(required = true)]
    input: PathBuf,

    /// Output file for JSON lines (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Post type applied to every line ("lost" or "found")
    #[arg(short, long)]
    post_type: Option<String>,

    /// Ollama-compatible endpoint for generative enhancement
    #[arg(long)]
    ollama_url: Option<String>,

    /// Model name to prompt for enhancement
    #[arg(short, long)]
    model: Option<String>,

    /// Keep going past lines that fail validation
    #[arg(long)]
    skip_invalid: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let extractor = build_extractor(&config, args.ollama_url.as_deref(), args.model.as_deref())?;

    let post_type = args
        .post_type
        .as_deref()
        .map(parse_post_type)
        .transpose()?;

    let content = fs::read_to_string(&args.input)?;
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();

    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in lines {
        match extractor.extract_from_text(line, post_type).await {
            Ok(record) => records.push(serde_json::to_string(&record)?),
            Err(e) if args.skip_invalid => {
                warn!("Skipping line: {}", e);
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done");

    let output = records.join("\n");
    if let Some(path) = &args.output {
        fs::write(path, output + "\n")?;
        println!(
            "{} {} records to {}",
            style("Wrote").green(),
            records.len(),
            path.display()
        );
    } else {
        println!("{output}");
    }

    if skipped > 0 {
        eprintln!(
            "{} {} lines skipped",
            style("Warning:").yellow(),
            skipped
        );
    }

    Ok(())
}
