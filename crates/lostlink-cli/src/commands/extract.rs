//! Extract command - process a single item description.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use lostlink_core::{vision, Category, DetectedObject, StructuredRecord};

use super::{build_extractor, load_config, parse_post_type};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Item description text (reads stdin when omitted and no --file given)
    text: Option<String>,

    /// Read the description from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Post type when known ("lost" or "found")
    #[arg(short, long)]
    post_type: Option<String>,

    /// JSON file with detected objects from the vision pipeline
    #[arg(long)]
    objects: Option<PathBuf>,

    /// OCR text recovered from an image of the item
    #[arg(long)]
    ocr_text: Option<String>,

    /// Ollama-compatible endpoint for generative enhancement
    #[arg(long)]
    ollama_url: Option<String>,

    /// Model name to prompt for enhancement
    #[arg(short, long)]
    model: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = read_text(&args)?;
    let post_type = args
        .post_type
        .as_deref()
        .map(parse_post_type)
        .transpose()?;

    let extractor = build_extractor(&config, args.ollama_url.as_deref(), args.model.as_deref())?;

    info!("Processing description ({} characters)", text.len());

    let mut record = extractor.extract_from_text(&text, post_type).await?;

    if args.objects.is_some() || args.ocr_text.is_some() {
        let objects = read_objects(args.objects.as_deref())?;
        let image_record = extractor.extract_from_image(&objects, args.ocr_text.as_deref());
        record = extractor.merge_extractions(&record, &image_record);
    }

    let output = format_record(&record, args.format)?;

    if let Some(path) = &args.output {
        fs::write(path, &output)?;
        println!("{} {}", style("Wrote").green(), path.display());
    } else {
        println!("{output}");
    }

    Ok(())
}

fn read_text(args: &ExtractArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn read_objects(path: Option<&Path>) -> anyhow::Result<Vec<DetectedObject>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let content = fs::read_to_string(path)?;
    let mut objects: Vec<DetectedObject> = serde_json::from_str(&content)?;

    // Object files exported before the category remap ship without one.
    for object in &mut objects {
        if object.category == Category::Other {
            object.category = vision::category_for_label(&object.label);
        }
    }

    Ok(objects)
}

fn format_record(record: &StructuredRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_text(record: &StructuredRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        style("Title:").bold(),
        record.title
    ));
    out.push_str(&format!(
        "{} {} / {}\n",
        style("Type:").bold(),
        record.post_type.label(),
        record.category
    ));

    if !record.item_attributes.is_empty() {
        out.push_str(&format!("{}\n", style("Attributes:").bold()));
        for (key, value) in &record.item_attributes {
            out.push_str(&format!("  {key}: {value}\n"));
        }
    }
    if let Some(location) = &record.location {
        out.push_str(&format!(
            "{} {}\n",
            style("Location:").bold(),
            location.description
        ));
    }
    if let Some(date) = &record.date_time {
        out.push_str(&format!("{} {date}\n", style("Date:").bold()));
    }
    if let Some(contact) = &record.contact_info {
        if let Some(phone) = &contact.phone {
            out.push_str(&format!("{} {phone}\n", style("Phone:").bold()));
        }
        if let Some(email) = &contact.email {
            out.push_str(&format!("{} {email}\n", style("Email:").bold()));
        }
    }
    if let Some(reward) = &record.reward {
        out.push_str(&format!("{} {reward}\n", style("Reward:").bold()));
    }
    if !record.tags.is_empty() {
        let tags: Vec<&str> = record.tags.iter().map(String::as_str).collect();
        out.push_str(&format!("{} {}\n", style("Tags:").bold(), tags.join(", ")));
    }
    out.push_str(&format!(
        "{} {:.2}\n",
        style("Confidence:").bold(),
        record.confidence_scores.overall
    ));

    out
}
