//! CLI argument definitions for the Pick 4 toolkit.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pick4_model::{Category, Traversal};
use pick4_output::{DEFAULT_CHART_COLUMNS, Theme};

#[derive(Parser)]
#[command(
    name = "pick4",
    version,
    about = "Pick 4 combinations - generate from a 4x4 box or browse the chart",
    long_about = "Generate every combination of a 4x4 box of characters, or browse,\n\
                  search, print and export the categorized Pick 4 combination chart."
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

    /// Table color theme.
    #[arg(long = "theme", value_enum, default_value = "light", global = true)]
    pub theme: ThemeArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate all 256 combinations of a 4x4 box and save them as text.
    Generate(GenerateArgs),

    /// Search the combination chart for a substring.
    Search(SearchArgs),

    /// List chart categories with their entry counts.
    Categories(LibraryArgs),

    /// Print one chart category as a grid.
    Chart(ChartArgs),

    /// Save the combination chart as JSON.
    Export(ExportArgs),

    /// Copy a combination to the clipboard (OSC 52).
    Copy(CopyArgs),

    /// Check that every chart entry sits in the right category.
    Verify(LibraryArgs),
}

#[derive(Args)]
pub struct LibraryArgs {
    /// Combination library JSON (default: $PICK4_LIBRARY, then the bundled chart).
    #[arg(long = "library", value_name = "FILE")]
    pub library: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Directory to write the export into.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Write the export to stdout instead of a file.
    #[arg(long = "stdout", conflicts_with = "output_dir")]
    pub stdout: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// One box row, top to bottom; repeat four times. Each row holds up to
    /// four characters, and a short row leaves its last boxes empty.
    #[arg(
        long = "row",
        value_name = "CHARS",
        allow_hyphen_values = true,
        required_unless_present = "grid",
        conflicts_with = "grid"
    )]
    pub rows: Vec<String>,

    /// JSON file holding the box as a 4x4 array of strings ("" for empty).
    #[arg(long = "grid", value_name = "FILE")]
    pub grid: Option<PathBuf>,

    /// Pick one character per row (canonical) or per column.
    #[arg(long = "traversal", value_enum, default_value = "rows")]
    pub traversal: TraversalArg,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Substring to look for (case-sensitive). Empty lists everything.
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Restrict the search to these categories (repeatable).
    #[arg(long = "category", value_enum)]
    pub categories: Vec<CategoryArg>,

    /// Grid columns per category.
    #[arg(long = "columns", default_value_t = DEFAULT_CHART_COLUMNS)]
    pub columns: usize,

    /// Print matches as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub library: LibraryArgs,
}

#[derive(Args)]
pub struct ChartArgs {
    /// Category to print.
    #[arg(long = "category", value_enum, default_value = "singles")]
    pub category: CategoryArg,

    /// Only print entries containing this substring.
    #[arg(long = "query", value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Grid columns.
    #[arg(long = "columns", default_value_t = DEFAULT_CHART_COLUMNS)]
    pub columns: usize,

    /// Mark one combination with a check.
    #[arg(long = "highlight", value_name = "COMBINATION")]
    pub highlight: Option<String>,

    #[command(flatten)]
    pub library: LibraryArgs,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub library: LibraryArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct CopyArgs {
    /// Combination to copy.
    #[arg(value_name = "COMBINATION")]
    pub combination: String,

    #[command(flatten)]
    pub library: LibraryArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TraversalArg {
    Rows,
    Columns,
}

impl From<TraversalArg> for Traversal {
    fn from(value: TraversalArg) -> Self {
        match value {
            TraversalArg::Rows => Traversal::Rows,
            TraversalArg::Columns => Traversal::Columns,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Singles,
    Doubles,
    #[value(alias = "doublePairs")]
    DoublePairs,
    Triples,
    Quads,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Singles => Category::Singles,
            CategoryArg::Doubles => Category::Doubles,
            CategoryArg::DoublePairs => Category::DoublePairs,
            CategoryArg::Triples => Category::Triples,
            CategoryArg::Quads => Category::Quads,
        }
    }
}

/// CLI theme choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
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
