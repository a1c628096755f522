use crate::loader::SourceSpec;
use crate::report::ReportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bench_compare")]
#[command(about = "Compare benchmark timings of interchangeable template engine implementations")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare result files against a baseline implementation
    Compare(CompareArgs),

    /// Render a single result file as a table
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct CompareArgs {
    /// Result source as ID=PATH (repeatable, column order follows declaration order)
    #[arg(short, long = "source", value_name = "ID=PATH", value_parser = parse_source_arg)]
    pub sources: Vec<SourceSpec>,

    /// Discover `<id>_results.json` files in a directory
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Baseline source id (defaults to the first source)
    #[arg(short, long)]
    pub baseline: Option<String>,

    /// Comparand source id (repeatable, defaults to every non-baseline source)
    #[arg(short = 'c', long = "comparand", value_name = "ID")]
    pub comparands: Vec<String>,

    /// Source id whose load failure is reported as N/A instead of aborting (repeatable)
    #[arg(long = "optional", value_name = "ID")]
    pub optional: Vec<String>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Skip malformed records instead of failing the source
    #[arg(long)]
    pub skip_malformed: bool,

    /// Maximum number of sources loaded concurrently
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// JSON configuration file (CLI flags take precedence)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Result file to render
    pub file: PathBuf,

    /// Source id shown in the header (defaults to the `<id>_results.json` prefix)
    #[arg(long)]
    pub id: Option<String>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Grid)]
    pub format: ReportFormat,

    /// Skip malformed records instead of failing
    #[arg(long)]
    pub skip_malformed: bool,
}

/// `ID=PATH` 形式のソース指定をパース
pub fn parse_source_arg(value: &str) -> Result<SourceSpec, String> {
    let (id, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=PATH, got `{value}`"))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("source id is empty in `{value}`"));
    }
    if path.is_empty() {
        return Err(format!("source path is empty in `{value}`"));
    }

    Ok(SourceSpec::new(id, path))
}
