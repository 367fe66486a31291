//! Batch processing command for multiple text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use dalil_core::models::DalilConfig;
use dalil_core::{import_or_raw, FormBinder, FormDraft, ImportResult, NullSink};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: super::import::OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessOutcome {
    path: PathBuf,
    result: Option<(FormDraft, ImportResult)>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        DalilConfig::from_file(std::path::Path::new(path))?
    } else {
        DalilConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    // Set up progress bar
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let sink = NullSink;
    let binder = FormBinder::new(&sink);

    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        let file_start = Instant::now();
        let outcome = match fs::read_to_string(&path) {
            Ok(text) => {
                let result = import_or_raw(&config, &text, None);
                let mut draft = FormDraft::new();
                binder.bind(&result, &mut draft);
                ProcessOutcome {
                    path: path.clone(),
                    result: Some((draft, result)),
                    error: None,
                    processing_time_ms: file_start.elapsed().as_millis() as u64,
                }
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to read {}: {}", path.display(), error_msg);
                    ProcessOutcome {
                        path: path.clone(),
                        result: None,
                        error: Some(error_msg),
                        processing_time_ms: file_start.elapsed().as_millis() as u64,
                    }
                } else {
                    error!("Failed to read {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        };

        outcomes.push(outcome);
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write outputs
    let successful: Vec<_> = outcomes.iter().filter(|o| o.result.is_some()).collect();
    let failed: Vec<_> = outcomes.iter().filter(|o| o.error.is_some()).collect();

    for outcome in &successful {
        if let (Some((draft, result)), Some(output_dir)) = (&outcome.result, &args.output_dir) {
            let output_name = outcome
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("draft");

            let extension = match args.format {
                super::import::OutputFormat::Json => "json",
                super::import::OutputFormat::Csv => "csv",
                super::import::OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            let content = super::import::format_draft(draft, result, args.format)?;

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &outcomes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            println!(
                "  - {}: {}",
                outcome.path.display(),
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &PathBuf, outcomes: &[ProcessOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "kind",
        "numero_texte",
        "date_promulgation",
        "domaine_juridique",
        "field_count",
        "warnings",
        "processing_time_ms",
        "error",
    ])?;

    for outcome in outcomes {
        let filename = outcome
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let elapsed = outcome.processing_time_ms.to_string();

        if let Some((draft, result)) = &outcome.result {
            let field_count = draft.len().to_string();
            let warning_count = result.warnings.len().to_string();
            wtr.write_record([
                filename,
                if result.degraded { "degraded" } else { "success" },
                result.kind.as_str(),
                draft.get_text("numero_texte").unwrap_or_default(),
                draft.get_text("date_promulgation").unwrap_or_default(),
                draft.get_text("domaine_juridique").unwrap_or_default(),
                field_count.as_str(),
                warning_count.as_str(),
                elapsed.as_str(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                elapsed.as_str(),
                outcome.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
