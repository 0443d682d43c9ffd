use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pick4_core::{LoadedLibrary, SearchResults};
use pick4_output::{ChartOptions, ExportTarget, render_chart};

use crate::types::{CopyResult, ExportResult, GenerateResult, TableStyle, VerifyResult};

pub fn print_generate_summary(result: &GenerateResult, style: TableStyle) {
    let set = &result.set;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field", style), header_cell("Value", style)]);
    apply_table_style(&mut table, style);
    table.add_row(vec![Cell::new("Traversal"), Cell::new(set.traversal)]);
    table.add_row(vec![Cell::new("Combinations"), Cell::new(set.len())]);
    let distinct = set.distinct_count();
    let distinct_cell = if distinct < set.len() {
        Cell::new(format!("{distinct} ({} repeated)", set.len() - distinct)).fg(Color::Yellow)
    } else {
        Cell::new(distinct)
    };
    table.add_row(vec![Cell::new("Distinct"), distinct_cell]);
    table.add_row(vec![
        Cell::new("First"),
        Cell::new(set.first().unwrap_or("-")),
    ]);
    table.add_row(vec![Cell::new("Last"), Cell::new(set.last().unwrap_or("-"))]);
    table.add_row(vec![Cell::new("Saved to"), target_cell(&result.target, style)]);
    println!("{table}");
}

pub fn print_search_results(results: &SearchResults<'_>, columns: usize, style: TableStyle) {
    let options = ChartOptions {
        columns,
        theme: style.theme,
        styled: style.styled,
        highlight: None,
    };
    for matches in &results.categories {
        println!(
            "{} ({} of {})",
            matches.category.label(),
            matches.matches.len(),
            matches.available
        );
        if matches.matches.is_empty() {
            println!("  no matches");
        } else {
            println!("{}", render_chart(&matches.matches, &options));
        }
    }
    if results.query.is_empty() {
        println!("Total: {}", results.total_matches());
    } else {
        println!(
            "Total: {} matching \"{}\"",
            results.total_matches(),
            results.query
        );
    }
}

pub fn print_categories(loaded: &LoadedLibrary, style: TableStyle) {
    println!("Library: {}", loaded.source);
    println!("SHA-256: {}", loaded.sha256);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category", style),
        header_cell("Label", style),
        header_cell("Entries", style),
    ]);
    apply_summary_table_style(&mut table, style);
    align_column(&mut table, 2, CellAlignment::Right);
    for (category, list) in loaded.library().iter() {
        table.add_row(vec![
            Cell::new(category.as_str())
                .fg(style.theme.accent())
                .add_attribute(Attribute::Bold),
            Cell::new(category.label()),
            count_cell(list.len(), style),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(style.theme.accent())
            .add_attribute(Attribute::Bold),
        Cell::new("All categories")
            .fg(style.theme.accent())
            .add_attribute(Attribute::Bold),
        Cell::new(loaded.library().total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_export_summary(result: &ExportResult) {
    println!("Library: {}", result.source);
    println!("Entries: {}", result.total);
    println!("Saved to: {}", result.target);
}

pub fn print_copy_ack(result: &CopyResult) {
    match result.category {
        Some(category) => eprintln!("Copied! {} ({})", result.combination, category.label()),
        None => eprintln!("Copied! {} (not in library)", result.combination),
    }
}

pub fn print_verify_report(result: &VerifyResult, style: TableStyle) {
    println!("Library: {}", result.source);
    println!("SHA-256: {}", result.sha256);
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category", style),
        header_cell("Entries", style),
        header_cell("Issues", style),
    ]);
    apply_summary_table_style(&mut table, style);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (category, count) in &report.counts {
        let issues = report
            .issues
            .iter()
            .filter(|issue| issue.category == *category)
            .count();
        table.add_row(vec![
            Cell::new(category.label()),
            Cell::new(count),
            issue_count_cell(issues, style),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(report.total()).add_attribute(Attribute::Bold),
        issue_count_cell(report.issues.len(), style).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_issue_table(result, style);
}

fn print_issue_table(result: &VerifyResult, style: TableStyle) {
    if result.report.is_clean() {
        println!("No issues found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category", style),
        header_cell("Entry", style),
        header_cell("Problem", style),
    ]);
    apply_table_style(&mut table, style);
    align_column(&mut table, 1, CellAlignment::Center);
    for issue in &result.report.issues {
        table.add_row(vec![
            Cell::new(issue.category.label()),
            Cell::new(&issue.entry).fg(Color::Red),
            Cell::new(issue.kind.describe()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn apply_styling(table: &mut Table, style: TableStyle) {
    if style.styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
}

pub fn apply_table_style(table: &mut Table, style: TableStyle) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    apply_styling(table, style);
}

fn apply_summary_table_style(table: &mut Table, style: TableStyle) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    apply_styling(table, style);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str, style: TableStyle) -> Cell {
    Cell::new(label)
        .fg(style.theme.accent())
        .add_attribute(Attribute::Bold)
}

fn target_cell(target: &ExportTarget, style: TableStyle) -> Cell {
    Cell::new(target).fg(style.theme.success())
}

fn count_cell(count: usize, style: TableStyle) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count, style)
    }
}

fn issue_count_cell(count: usize, style: TableStyle) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count, style)
    }
}

fn dim_cell<T: ToString>(value: T, style: TableStyle) -> Cell {
    Cell::new(value).fg(style.theme.muted())
}
