use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

mod core;
mod formatters;

use crate::core::emitter::guard_from_file_name;
use crate::core::{Collector, EmitOptions, Emitter};
use crate::formatters::DependencyListing;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "amalgam",
    version = "0.1.0",
    author = "amalgam developers",
    about = "Merges a directory of headers into a single dependency-ordered file"
)]
struct Cli {
    /// Source directory containing the header files to merge
    #[arg(value_name = "SRC_DIR")]
    input: PathBuf,

    /// Path of the merged output file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Namespace wrapped once around the merged bodies
    #[arg(short, long, value_name = "NAME", default_value = "test")]
    namespace: String,

    /// Include-guard macro name; derived from the output file name when omitted
    #[arg(short, long, value_name = "MACRO")]
    guard: Option<String>,

    /// Text for a `/* Source: ... */` attribution comment at the top of the output
    #[arg(short, long, value_name = "TEXT")]
    attribution: Option<String>,

    /// Print the collected dependency mapping as JSON and exit
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let guard = cli
        .guard
        .clone()
        .unwrap_or_else(|| guard_from_file_name(&cli.output));

    let collector = Collector::new()?;
    let graph = collector.collect(&cli.input)?;
    println!(
        "Collected {} files, {} system includes from {}",
        graph.file_count(),
        graph.system_include_count(),
        cli.input.display()
    );

    if cli.list {
        println!("{}", DependencyListing::from_graph(&graph).to_json()?);
        return Ok(());
    }

    let emitter = Emitter::new(EmitOptions {
        namespace: cli.namespace,
        guard,
        attribution: cli.attribution,
    });

    let out = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let mut out = emitter.emit(&graph, BufWriter::new(out))?;
    out.flush()
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("Wrote {}", cli.output.display());
    Ok(())
}
