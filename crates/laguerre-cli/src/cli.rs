//! CLI argument definitions for the Laguerre polynomial generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "laguerre",
    version,
    about = "Associated Laguerre polynomial generator",
    long_about = "Expand associated Laguerre polynomials L_n^l(x) exactly and print them as \
                  LaTeX markup.\n\n\
                  Also tabulates coefficients and plots hydrogen radial wavefunctions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML file overriding thresholds (validation, format, display).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Prompt for n and l repeatedly; enter E to exit.
    Repl,

    /// Generate one polynomial.
    Generate(GenerateArgs),

    /// Tabulate the exact coefficients of one polynomial.
    Coefficients(IndexArgs),

    /// Sample hydrogen radial wavefunctions to CSV and SVG.
    Radial(RadialArgs),
}

#[derive(Parser)]
pub struct IndexArgs {
    /// Degree n.
    #[arg(short = 'n', long = "degree", allow_hyphen_values = true)]
    pub n: String,

    /// Order l.
    #[arg(short = 'l', long = "order", allow_hyphen_values = true)]
    pub l: String,

    /// Proceed even when an index is above the recommended maximum.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub index: IndexArgs,

    /// Print typeset text instead of raw markup.
    #[arg(long = "display", conflicts_with = "json")]
    pub display: bool,

    /// Print a JSON object with the markup and its display lines.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RadialArgs {
    /// Orbitals to plot, e.g. 1s 2p 3d (default: 1s 2s 2p 3s 3p 3d).
    #[arg(value_name = "ORBITAL")]
    pub orbitals: Vec<String>,

    /// Nuclear charge Z.
    #[arg(long = "z", default_value_t = 1.0)]
    pub z: f64,

    /// Largest radius, in Bohr radii.
    #[arg(long = "r-max", default_value_t = 25.0)]
    pub r_max: f64,

    /// Number of sample points.
    #[arg(long = "samples", default_value_t = 1000)]
    pub samples: usize,

    /// Output directory for radial.csv and radial.svg.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
