//! Templates command - inspect the form template registry.

use clap::Args;
use console::style;

use dalil_core::models::{InputKind, LegalTextKind, TemplateRegistry};

/// Arguments for the templates command.
#[derive(Args)]
pub struct TemplatesArgs {
    /// Show a single template by kind (e.g., "loi", "décret")
    #[arg(short, long)]
    kind: Option<String>,

    /// Emit templates as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: TemplatesArgs) -> anyhow::Result<()> {
    let templates: Vec<_> = match args.kind.as_deref() {
        Some(raw) => {
            let kind = LegalTextKind::parse(raw)
                .ok_or_else(|| anyhow::anyhow!("Unknown legal-text kind: {}", raw))?;
            let template = TemplateRegistry::lookup(kind)
                .ok_or_else(|| anyhow::anyhow!("No template registered for {:?}", kind))?;
            vec![template]
        }
        None => TemplateRegistry::all().iter().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    println!("{}", style("Form Templates").bold());
    println!();

    for template in templates {
        println!(
            "{} {} ({} fields)",
            style(format!("▸ {}", template.kind.label())).bold().cyan(),
            style(template.kind.as_str()).dim(),
            template.fields.len()
        );

        for field in &template.fields {
            let input = match field.input {
                InputKind::Text => "text",
                InputKind::TextArea => "textarea",
                InputKind::Date => "date",
                InputKind::Select => "select",
            };

            let required = if field.required {
                style("required").yellow().to_string()
            } else {
                style("optional").dim().to_string()
            };

            println!(
                "    {:<22} {:<10} {:<10} {}",
                field.name,
                input,
                required,
                field.label
            );

            if !field.options.is_empty() {
                println!(
                    "    {:<22} {}",
                    "",
                    style(format!("options: {}", field.options.join(", "))).dim()
                );
            }
        }
        println!();
    }

    Ok(())
}
