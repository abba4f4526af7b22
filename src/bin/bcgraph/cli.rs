use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "bcgraph",
    about = "Convert molecules into generic attributed graphs",
    version,
    author,
    propagate_version = true
)]
pub struct Cli {
    /// Log debug messages (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in atom and bond features
    #[command(visible_alias = "f")]
    Features(FeaturesArgs),

    /// Draw molecules from the built-in library and emit their graphs
    #[command(visible_alias = "s")]
    Sample(SampleArgs),
}

#[derive(Args)]
pub struct FeaturesArgs {
    /// Only list features of this scope
    #[arg(long, value_name = "SCOPE")]
    pub scope: Option<ScopeArg>,

    /// Encoding used to report column widths
    #[arg(long, value_name = "MODE", default_value = "one-hot")]
    pub encoding: EncodingArg,
}

#[derive(Args)]
pub struct SampleArgs {
    /// Feature selection (TOML file); built-in defaults if omitted
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file for JSON lines (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of graphs to emit
    #[arg(short = 'n', long, value_name = "N", default_value = "1")]
    pub count: usize,

    /// Seed for reproducible draws
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Draws per graph before giving up (0 uses the default)
    #[arg(long, value_name = "N")]
    pub max_trials: Option<usize>,

    /// Override the encoding from the selection file
    #[arg(long, value_name = "MODE")]
    pub encoding: Option<EncodingArg>,

    /// Suppress the master node
    #[arg(long)]
    pub no_master_node: bool,

    /// Emit both directions of every edge
    #[arg(long)]
    pub directed: bool,

    /// Suppress the summary table (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub filter: FilterOptions,
}

/// Predicates every drawn molecule must pass.
#[derive(Args)]
#[command(next_help_heading = "Molecule Filters")]
pub struct FilterOptions {
    /// Minimum number of explicit atoms (library hydrogens are implicit)
    #[arg(long, value_name = "N")]
    pub min_atoms: Option<usize>,

    /// Require at least one ring
    #[arg(long)]
    pub require_ring: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ScopeArg {
    Atom,
    Bond,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EncodingArg {
    OneHot,
    Index,
}

pub fn parse() -> Cli {
    Cli::parse()
}
