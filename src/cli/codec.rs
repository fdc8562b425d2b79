use anyhow::Context;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::codec::{self, render, Decoded, Designation};
use crate::core::catalog::Catalog;
use crate::core::index::CatalogIndex;
use crate::core::types::DisplayFormat;

#[derive(Args)]
pub struct EncodeArgs {
    /// Designations to encode (e.g. "NGC 526A", "M51a", "PSR J0002+6216")
    #[arg(required = true, num_args = 1..)]
    pub designations: Vec<String>,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Identifiers to decode, as 0x-prefixed hex or decimal
    #[arg(required = true, num_args = 1..)]
    pub identifiers: Vec<String>,
}

/// Everything known about one identifier
#[derive(Debug, Serialize)]
struct IdentifierReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,
    identifier: String,
    raw: u64,
    catalog: Catalog,
    family: String,
    abbreviation: String,
    designation: Designation,
    normal: String,
    alternative: String,
}

impl IdentifierReport {
    fn new(index: CatalogIndex, input: Option<String>) -> anyhow::Result<Self> {
        let decoded: Decoded = codec::decode(index)?;
        let rendered = |format| {
            render::render(&decoded, format)
                .with_context(|| format!("identifier {:#x} cannot be rendered", index.raw()))
        };

        Ok(Self {
            input,
            identifier: format!("{:#x}", index.raw()),
            raw: index.raw(),
            catalog: decoded.catalog,
            family: decoded.catalog.family().to_string(),
            abbreviation: codec::abbreviation(index)?,
            normal: rendered(DisplayFormat::Normal)?,
            alternative: rendered(DisplayFormat::Alternative)?,
            designation: decoded.designation.clone(),
        })
    }
}

pub fn run_encode(args: EncodeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reports = args
        .designations
        .into_iter()
        .map(|text| {
            let index = codec::encode(&text)?;
            IdentifierReport::new(index, Some(text))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    print_reports(&reports, format, verbose)
}

pub fn run_decode(args: DecodeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reports = args
        .identifiers
        .iter()
        .map(|text| {
            let raw = parse_raw(text)?;
            let index = CatalogIndex::from_raw(raw)
                .ok_or_else(|| anyhow::anyhow!("Identifier 0 is reserved for \"no object\""))?;
            IdentifierReport::new(index, None)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    print_reports(&reports, format, verbose)
}

fn parse_raw(text: &str) -> anyhow::Result<u64> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.with_context(|| format!("'{text}' is not a hex or decimal identifier"))
}

fn describe(designation: &Designation) -> String {
    match designation {
        Designation::Numbered { number } => format!("number {number}"),
        Designation::Equatorial {
            ra,
            dec,
            epoch,
            south,
        } => format!(
            "ra {ra}, dec {}{dec}, epoch {epoch}",
            if *south { '-' } else { '+' }
        ),
        Designation::Zone {
            zone,
            number,
            south,
        } => format!("zone {}{zone:02}, number {number}", if *south { '-' } else { '+' }),
        Designation::Tycho {
            region,
            number,
            component,
        } => format!("region {region}, number {number}, component {component}"),
    }
}

fn print_reports(
    reports: &[IdentifierReport],
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                println!("{}", report.normal);
                if let Some(input) = &report.input {
                    println!("  Input:        {input}");
                }
                println!("  Identifier:   {}", report.identifier);
                println!("  Catalog:      {}", report.catalog);
                println!("  Family:       {}", report.family);
                println!("  Abbreviation: {}", report.abbreviation);
                if report.alternative != report.normal {
                    println!("  Alternative:  {}", report.alternative);
                }
                if verbose {
                    println!("  Fields:       {}", describe(&report.designation));
                    println!("  Raw:          {}", report.raw);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(reports)?);
        }
        OutputFormat::Tsv => {
            println!("input\tidentifier\tcatalog\tfamily\tabbreviation\tnormal\talternative");
            for report in reports {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    report.input.as_deref().unwrap_or(""),
                    report.identifier,
                    report.catalog,
                    report.family,
                    report.abbreviation,
                    report.normal,
                    report.alternative
                );
            }
        }
    }

    Ok(())
}
