use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::json;

use crate::cli::{load_database, OutputFormat};
use crate::core::catalog::Catalog;

#[derive(Args)]
pub struct CatalogsArgs {
    /// Only list catalogs present in the object database
    #[arg(long)]
    pub present: bool,

    /// Path to a custom object database (with --present)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file path
    #[arg(required = true)]
    pub output: PathBuf,

    /// Path to a custom object database to export (defaults to embedded)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run_catalogs(args: CatalogsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalogs: Vec<Catalog> = if args.present {
        let db = load_database(args.catalog.as_deref())?;
        db.catalogs().iter().copied().collect()
    } else {
        Catalog::ALL.to_vec()
    };

    match format {
        OutputFormat::Text => {
            let name_width = catalogs
                .iter()
                .map(|c| c.to_string().len())
                .max()
                .unwrap_or(7)
                .max(7);

            println!("Catalog Registry ({} catalogs)\n", catalogs.len());
            println!(
                "{:<name_w$} {:<6} {:>5} {:<10} {:<10}",
                "Catalog",
                "Prefix",
                "Width",
                "Family",
                "Alias-only",
                name_w = name_width
            );
            println!("{}", "-".repeat(name_width + 6 + 5 + 10 + 10 + 4));

            for c in &catalogs {
                println!(
                    "{:<name_w$} {:<6} {:>5} {:<10} {:<10}",
                    c.to_string(),
                    c.prefix(),
                    c.width(),
                    c.family().to_string(),
                    if c.is_alias_only() { "yes" } else { "no" },
                    name_w = name_width
                );
                if verbose {
                    println!(
                        "  └─ Key: {:#x}  Template: {}{}",
                        c.key(),
                        c.prefix(),
                        c.placeholders()
                    );
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = catalogs
                .iter()
                .map(|c| {
                    json!({
                        "catalog": c,
                        "name": c.to_string(),
                        "prefix": c.prefix(),
                        "key": c.key(),
                        "width": c.width(),
                        "template": format!("{}{}", c.prefix(), c.placeholders()),
                        "family": c.family(),
                        "alias_only": c.is_alias_only(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("catalog\tprefix\twidth\tfamily\talias_only");
            for c in &catalogs {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    c,
                    c.prefix(),
                    c.width(),
                    c.family(),
                    c.is_alias_only()
                );
            }
        }
    }

    Ok(())
}

pub fn run_export(args: ExportArgs, verbose: bool) -> anyhow::Result<()> {
    let db = load_database(args.catalog.as_deref())?;

    let json = db.to_json()?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if verbose {
        eprintln!(
            "Exported {} objects ({} alias edges)",
            db.len(),
            db.aliases().edge_count()
        );
    }
    println!("Exported object database to {}", args.output.display());

    Ok(())
}
