//! Command-line interface for sky-xref.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **encode** / **decode**: convert between designations and identifiers
//! - **lookup**: resolve a designation to its object record
//! - **xref**: list every identifier aliased to a designation
//! - **names**: find objects by common name
//! - **catalogs**: list the catalog registry
//! - **export**: write the object database as JSON
//!
//! ## Usage
//!
//! ```text
//! # Encode a designation
//! sky-xref encode "NGC 526A" "PSR J0002+6216"
//!
//! # Decode an identifier
//! sky-xref decode 0x13983564dafc1
//!
//! # Resolve an alias against the embedded database
//! sky-xref lookup M31
//!
//! # JSON output for scripting
//! sky-xref xref "HIP 11767" --format json
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::db::{ObjectDb, SharedObjectDb};

pub mod catalog;
pub mod codec;
pub mod lookup;

#[derive(Parser)]
#[command(name = "sky-xref")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Encode astronomical catalog designations and resolve cross-identifications")]
#[command(
    long_about = "sky-xref packs catalog designations (NGC, Messier, HIP, 2MASS, PSR, Tycho-2, ...) into compact 64-bit identifiers and resolves any alias of an object to its canonical record.\n\nIt provides:\n- Reversible encoding with canonical rendering\n- Alias and duplicate-chain resolution\n- Transitive cross-identification listings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode designations into identifiers
    Encode(codec::EncodeArgs),

    /// Decode identifiers back into designations
    Decode(codec::DecodeArgs),

    /// Resolve a designation to its object record
    Lookup(lookup::LookupArgs),

    /// List all identifiers aliased to a designation
    Xref(lookup::XrefArgs),

    /// Find objects by common name
    Names(lookup::NamesArgs),

    /// List the catalog registry
    Catalogs(catalog::CatalogsArgs),

    /// Export the object database to a file
    Export(catalog::ExportArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Database shared by every command of this process
static DATABASE: SharedObjectDb = SharedObjectDb::new();

/// Load the object database once, from `path` or the embedded sample
pub(crate) fn load_database(path: Option<&Path>) -> anyhow::Result<&'static ObjectDb> {
    let db = DATABASE.get_or_try_init(|| match path {
        Some(path) => ObjectDb::load_from_file(path),
        None => ObjectDb::load_embedded(),
    })?;
    debug!(
        "Loaded object database with {} objects across {} catalogs",
        db.len(),
        db.catalogs().len()
    );
    Ok(db)
}
