use clap::Parser;
use tracing_subscriber::EnvFilter;

use sky_xref::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("sky_xref=debug,info")
    } else {
        EnvFilter::new("sky_xref=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Encode(args) => {
            cli::codec::run_encode(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Decode(args) => {
            cli::codec::run_decode(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Lookup(args) => {
            cli::lookup::run_lookup(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Xref(args) => {
            cli::lookup::run_xref(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Names(args) => {
            cli::lookup::run_names(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Catalogs(args) => {
            cli::catalog::run_catalogs(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Export(args) => {
            cli::catalog::run_export(args, cli.verbose)?;
        }
    }

    Ok(())
}
