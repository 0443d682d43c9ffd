use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::theme::Theme;

/// Widest grid layout of the chart.
pub const DEFAULT_CHART_COLUMNS: usize = 6;

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub columns: usize,
    pub theme: Theme,
    /// Emit ANSI styling. Printing to paper or a file wants this off.
    pub styled: bool,
    /// Entry to mark, e.g. the one just copied.
    pub highlight: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_CHART_COLUMNS,
            theme: Theme::default(),
            styled: false,
            highlight: None,
        }
    }
}

/// Lays entries out row by row in a fixed number of centered columns.
///
/// The last row is padded with blank cells. A column count of zero is
/// treated as one.
pub fn render_chart<S: AsRef<str>>(entries: &[S], options: &ChartOptions) -> Table {
    let columns = options.columns.max(1);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled);
    if options.styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    for chunk in entries.chunks(columns) {
        let mut row: Vec<Cell> = chunk
            .iter()
            .map(|entry| entry_cell(entry.as_ref(), options))
            .collect();
        row.resize_with(columns, || Cell::new(""));
        table.add_row(row);
    }
    for index in 0..columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Center);
        }
    }
    table
}

fn entry_cell(entry: &str, options: &ChartOptions) -> Cell {
    if options.highlight.as_deref() == Some(entry) {
        Cell::new(format!("{entry} ✓"))
            .fg(options.theme.success())
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(entry)
    }
}
