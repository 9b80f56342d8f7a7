//! `range-bench`: replays a range tree command stream and writes one
//! visited-node summary per tree.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use rangetree2d::{Config, Harness, OutputFormat};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// File the per-tree summaries are written to.
    output: PathBuf,

    /// Balance factor in percent (1..=99).
    #[clap(value_parser = clap::value_parser!(u8).range(1..=99))]
    alpha_percent: u8,

    /// Command file to read instead of standard input.
    #[clap(long)]
    input: Option<PathBuf>,

    /// TOML configuration; command-line flags take precedence.
    #[clap(long)]
    config: Option<PathBuf>,

    #[clap(long, value_enum)]
    format: Option<OutputFormat>,

    /// Check every tree invariant after each command.
    #[clap(long)]
    validate: bool,
}

/// Default filter is `info`, overridable through `RUST_LOG`.
fn init_logging() {
    if env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let t = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S");
            writeln!(buf, "{t} {} {}", record.level(), record.args())
        })
        .try_init()
        .is_err()
    {
        warn!("Unable to initialize logging -- has it already been initialized?");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let base = Config::load_or_default(cli.config.as_deref())
        .with_context(|| format!("loading configuration from {:?}", cli.config))?;
    let mut builder = Config::builder().alpha_percent(cli.alpha_percent);
    if let Some(format) = cli.format {
        builder = builder.output_format(format);
    }
    if cli.validate {
        builder = builder.validate_each_operation(true);
    }
    let config = builder.build_on(base)?;
    info!("alpha {}, output {:?}", config.alpha, config.output_format);

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening input {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let writer = BufWriter::new(
        File::create(&cli.output)
            .with_context(|| format!("creating output {}", cli.output.display()))?,
    );

    let report = Harness::new(config)?.run(reader, writer)?;
    info!("{} trees, {} commands", report.trees, report.commands);
    Ok(())
}
