use std::path::PathBuf;
use std::process::exit;

use anyhow::Result;
use clap::{Parser, Subcommand};
use logodeck_cli::{OutputFormat, ScanOptions, build_catalog, generate, summary_lines};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Parser)]
#[command(about = "Generate the logo gallery catalog", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Scan the repository and write the catalog data file
    Generate(GenerateOptions),

    /// Print logo counts per family without writing anything
    Summary(ScanArgs),
}

#[derive(Debug, Clone, clap::Args)]
struct ScanArgs {
    /// Repository root to scan
    #[arg(short, long, value_name = "dir", default_value = ".")]
    root: PathBuf,

    /// Extra folder names to skip (docs, .git, node_modules and .github are always skipped)
    #[arg(short, long, value_name = "name")]
    exclude: Vec<String>,
}

impl ScanArgs {
    fn options(&self) -> ScanOptions {
        let mut options = ScanOptions::new(&self.root);
        options.exclude.extend(self.exclude.iter().cloned());
        options
    }
}

#[derive(Debug, Clone, clap::Args)]
struct GenerateOptions {
    #[command(flatten)]
    scan: ScanArgs,

    /// Where to write the catalog (relative paths are resolved against the root)
    #[arg(short, long, value_name = "file", default_value = "docs/logo-data.json")]
    output: PathBuf,

    /// Data file flavor
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

impl Cli {
    fn run(self) -> Result<()> {
        match self.command {
            Command::Generate(opts) => run_generate(opts),
            Command::Summary(args) => run_summary(args),
        }
    }
}

fn main() {
    let layer = fmt::layer().compact();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(layer).with(filter).init();

    if let Err(error) = Cli::parse().run() {
        error!("{error:?}");
        exit(1);
    }
}

fn run_generate(opts: GenerateOptions) -> Result<()> {
    let root = opts.scan.root.clone();
    let output = if opts.output.is_relative() {
        root.join(&opts.output)
    } else {
        opts.output.clone()
    };

    let catalog = generate(&opts.scan.options(), &output, opts.format)?;
    print_summary(&catalog);
    Ok(())
}

fn run_summary(args: ScanArgs) -> Result<()> {
    let catalog = build_catalog(&args.options())?;
    print_summary(&catalog);
    Ok(())
}

fn print_summary(catalog: &logodeck_core::Catalog) {
    info!("Logos by product family:");
    for line in summary_lines(catalog) {
        println!("{}", line);
    }
}
