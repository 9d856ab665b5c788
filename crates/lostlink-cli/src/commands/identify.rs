//! Identify command - run the OCR identifier extractor over text.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use lostlink_core::ocr::extract_identifiers;

/// Arguments for the identify command.
#[derive(Args)]
pub struct IdentifyArgs {
    /// File with raw OCR text
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: IdentifyArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.input)?;
    let identifiers = extract_identifiers(&text);

    let output = serde_json::to_string_pretty(&identifiers)?;
    match &args.output {
        Some(path) => fs::write(path, output)?,
        None => println!("{output}"),
    }

    Ok(())
}
