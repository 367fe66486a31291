//! Import command - extract form fields from a single text file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use dalil_core::models::{DalilConfig, FieldMap};
use dalil_core::{import_or_raw, FormBinder, FormDraft, ImportResult, NullSink};

use crate::store::JsonFileStore;

/// Arguments for the import command.
#[derive(Args)]
pub struct ImportArgs {
    /// Input text file (raw OCR output), or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Document title, when known separately from the body
    #[arg(short, long)]
    title: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,

    /// Submit the resulting draft to a JSON file store
    #[arg(long)]
    store: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ImportArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        DalilConfig::from_file(std::path::Path::new(path))?
    } else {
        DalilConfig::default()
    };

    let text = if args.input.as_os_str() == "-" {
        info!("Importing from stdin");
        std::io::read_to_string(std::io::stdin())?
    } else {
        // Check input file exists
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        info!("Importing file: {}", args.input.display());
        fs::read_to_string(&args.input)?
    };

    // A known title enters the pipeline as a prior field.
    let prior = args.title.as_ref().map(|t| {
        let mut bag = FieldMap::new();
        bag.insert("title".into(), t.as_str().into());
        bag
    });

    let result = import_or_raw(&config, &text, prior.as_ref());
    debug!(
        "classified as {:?} with {} fields in {}ms",
        result.kind,
        result.fields.len(),
        result.processing_time_ms
    );

    let sink = NullSink;
    let binder = FormBinder::new(&sink);
    let mut draft = FormDraft::new();
    let outcome = binder.bind(&result, &mut draft);

    if outcome.template.is_none() {
        eprintln!(
            "{} No form template registered for {:?}",
            style("!").yellow(),
            result.kind
        );
    }

    // Show warnings if requested
    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    // Format output
    let output = format_draft(&draft, &result, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    // Submit to the store if requested
    if let Some(store_path) = &args.store {
        // Submission requires the content field; carry the raw text
        // when extraction did not fill it.
        if draft.get_text("content").is_none() {
            draft.set("content", result.raw_text.as_str());
        }
        let store = JsonFileStore::new(store_path);
        draft.submit(&store)?;
        println!(
            "{} Draft submitted to {}",
            style("✓").green(),
            store_path.display()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_draft(
    draft: &FormDraft,
    result: &ImportResult,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(draft.values())?),
        OutputFormat::Csv => format_csv(draft, result),
        OutputFormat::Text => Ok(format_text(draft, result)),
    }
}

fn format_csv(draft: &FormDraft, result: &ImportResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "kind",
        "type_texte",
        "numero_texte",
        "date_promulgation",
        "organisation",
        "statut",
        "domaine_juridique",
        "niveau_publication",
    ])?;

    wtr.write_record([
        result.kind.as_str(),
        draft.get_text("type_texte").unwrap_or_default(),
        draft.get_text("numero_texte").unwrap_or_default(),
        draft.get_text("date_promulgation").unwrap_or_default(),
        draft.get_text("organisation").unwrap_or_default(),
        draft.get_text("statut").unwrap_or_default(),
        draft.get_text("domaine_juridique").unwrap_or_default(),
        draft.get_text("niveau_publication").unwrap_or_default(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(draft: &FormDraft, result: &ImportResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Kind: {:?}\n", result.kind));
    if result.degraded {
        output.push_str("Mode: raw-text fallback\n");
    }
    output.push('\n');

    output.push_str("Fields:\n");
    for (key, value) in draft.values() {
        match value.as_text() {
            Some(text) => output.push_str(&format!("  {}: {}\n", key, text)),
            None => output.push_str(&format!("  {}: {:?}\n", key, value)),
        }
    }

    if !result.warnings.is_empty() {
        output.push_str(&format!("\nWarnings: {}\n", result.warnings.len()));
    }

    output
}
