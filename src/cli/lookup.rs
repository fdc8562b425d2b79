use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::cli::{load_database, OutputFormat};
use crate::core::index::CatalogIndex;
use crate::core::object::CelestialObject;
use crate::db::{LookupError, ObjectDb};

#[derive(Args)]
pub struct LookupArgs {
    /// Designation or identifier to resolve (e.g. "M31", "HR 2491", 0x1359b1)
    #[arg(required = true)]
    pub name: String,

    /// Path to a custom object database (defaults to the embedded sample)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct XrefArgs {
    /// Designation or identifier whose aliases to list
    #[arg(required = true)]
    pub name: String,

    /// Path to a custom object database (defaults to the embedded sample)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct NamesArgs {
    /// Common name to search for (case-insensitive)
    #[arg(required = true)]
    pub name: String,

    /// Path to a custom object database (defaults to the embedded sample)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run_lookup(args: LookupArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let db = load_database(args.catalog.as_deref())?;
    let index = CatalogIndex::parse_any(&args.name)?;

    match db.resolve(index) {
        Ok(resolved) => {
            let cross = db.try_get_cross_indices(resolved.object.index);
            print_object(index, resolved.object, resolved.via, &cross, format, verbose)?;
        }
        Err(error) => print_not_found(index, &error, format)?,
    }

    Ok(())
}

fn print_object(
    query: CatalogIndex,
    object: &CelestialObject,
    via: CatalogIndex,
    cross: &std::collections::BTreeSet<CatalogIndex>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", object.index);
            if query != object.index {
                println!("  Query:         {query}");
            }
            println!("  Type:          {}", object.object_type);
            if object.has_position() {
                println!("  RA:            {:.6} h", object.ra);
                println!("  Dec:           {:+.6}°", object.dec);
            }
            if let Some(constellation) = &object.constellation {
                println!("  Constellation: {constellation}");
            }
            if let Some(v_mag) = object.v_mag {
                println!("  V mag:         {v_mag:.2}");
            }
            if let Some(sb) = object.surface_brightness {
                println!("  Surface br.:   {sb:.2}");
            }
            if !object.common_names.is_empty() {
                let names: Vec<&str> = object.common_names.iter().map(String::as_str).collect();
                println!("  Names:         {}", names.join(", "));
            }
            if verbose {
                println!("  Resolved via:  {via}");
                let aliases: Vec<String> = cross.iter().map(ToString::to_string).collect();
                println!("  Aliases:       {}", aliases.join(", "));
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "query": query,
                "found": true,
                "resolved_via": via,
                "object": object,
                "cross_ids": cross,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("query\tindex\ttype\tra\tdec\tconstellation\tv_mag\tcommon_names");
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                query,
                object.index,
                object.object_type.code(),
                if object.ra.is_nan() { String::new() } else { object.ra.to_string() },
                if object.dec.is_nan() { String::new() } else { object.dec.to_string() },
                object.constellation.as_deref().unwrap_or(""),
                object.v_mag.map(|m| m.to_string()).unwrap_or_default(),
                object
                    .common_names
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(";")
            );
        }
    }

    Ok(())
}

fn print_not_found(
    query: CatalogIndex,
    error: &LookupError,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let candidates = match error {
        LookupError::AmbiguousDuplicate { candidates, .. } => candidates.clone(),
        LookupError::NotFound(_) => Vec::new(),
    };

    match format {
        OutputFormat::Text => {
            println!("Not found: {error}");
            for candidate in &candidates {
                println!("  Candidate: {candidate}");
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "query": query,
                "found": false,
                "reason": error.to_string(),
                "candidates": candidates,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("query\tfound\treason");
            println!("{query}\tfalse\t{error}");
        }
    }

    Ok(())
}

pub fn run_xref(args: XrefArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let db = load_database(args.catalog.as_deref())?;
    let index = CatalogIndex::parse_any(&args.name)?;
    let cross = db.try_get_cross_indices(index);

    match format {
        OutputFormat::Text => {
            if cross.is_empty() {
                println!("No cross-identifications for {index}");
                return Ok(());
            }
            println!("{index} ({} cross-identifications)\n", cross.len());
            for alias in &cross {
                if verbose {
                    println!("  {alias:<28} {:#x}", alias.raw());
                } else {
                    println!("  {alias}");
                }
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "query": index,
                "cross_ids": cross,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("query\tcross_id\tidentifier");
            for alias in &cross {
                println!("{index}\t{alias}\t{:#x}", alias.raw());
            }
        }
    }

    Ok(())
}

pub fn run_names(args: NamesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let db = load_database(args.catalog.as_deref())?;
    let Some(indices) = db.try_resolve_common_name(&args.name) else {
        match format {
            OutputFormat::Json => {
                let output = json!({ "name": args.name, "indices": [] });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text | OutputFormat::Tsv => {
                println!("No object named '{}'", args.name);
                if verbose {
                    print_known_names(db);
                }
            }
        }
        return Ok(());
    };

    match format {
        OutputFormat::Text => {
            println!("'{}' ({} objects)\n", args.name, indices.len());
            for index in indices {
                println!("  {index}");
            }
        }
        OutputFormat::Json => {
            let output = json!({ "name": args.name, "indices": indices });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tindex");
            for index in indices {
                println!("{}\t{index}", args.name);
            }
        }
    }

    Ok(())
}

fn print_known_names(db: &ObjectDb) {
    let names: Vec<&str> = db.common_names().iter().map(String::as_str).collect();
    eprintln!("Known names: {}", names.join(", "));
}
