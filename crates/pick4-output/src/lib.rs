//! Pick 4 output library.
//!
//! This crate turns core results into things a user keeps:
//!
//! - **Text export**: one combination per line (`4d_combinations.txt`)
//! - **JSON export**: the categorized library (`pick4_combinations.json`)
//! - **Clipboard**: OSC 52 terminal clipboard writes
//! - **Chart**: fixed-column tables for printing

mod chart;
mod clipboard;
mod export;
mod sink;
mod theme;

pub use chart::{ChartOptions, DEFAULT_CHART_COLUMNS, render_chart};
pub use clipboard::{ClipboardSink, Osc52Clipboard, osc52_sequence};
pub use export::{
    JSON_EXPORT_FILENAME, TEXT_EXPORT_FILENAME, render_combinations_text, render_library_json,
};
pub use sink::{DirectorySink, ExportSink, ExportTarget, StdoutSink};
pub use theme::Theme;
