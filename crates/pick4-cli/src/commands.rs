use std::io;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use pick4_core::{generate_with, resolve_library, search_library, verify_library};
use pick4_model::{Category, Traversal};
use pick4_output::{
    ChartOptions, ClipboardSink, DirectorySink, ExportSink, JSON_EXPORT_FILENAME, Osc52Clipboard,
    StdoutSink, TEXT_EXPORT_FILENAME, render_chart, render_combinations_text, render_library_json,
};
use pick4_cli::input::read_grid;

use crate::cli::{ChartArgs, CopyArgs, ExportArgs, GenerateArgs, LibraryArgs, OutputArgs, SearchArgs};
use crate::summary::{print_categories, print_search_results};
use crate::types::{CopyResult, ExportResult, GenerateResult, TableStyle, VerifyResult};

fn export_sink(output: &OutputArgs) -> Box<dyn ExportSink> {
    if output.stdout {
        Box::new(StdoutSink)
    } else {
        Box::new(DirectorySink::new(&output.output_dir))
    }
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let traversal: Traversal = args.traversal.into();
    let _guard = info_span!("generate", traversal = %traversal).entered();

    let grid = read_grid(&args.rows, args.grid.as_deref())?;
    let set = generate_with(&grid, traversal)?;
    info!(
        count = set.len(),
        distinct = set.distinct_count(),
        "generated combinations"
    );
    let target = export_sink(&args.output)
        .export(TEXT_EXPORT_FILENAME, &render_combinations_text(&set))
        .context("export combinations")?;
    Ok(GenerateResult { set, target })
}

pub fn run_search(args: &SearchArgs, style: TableStyle) -> Result<()> {
    let _guard = info_span!("search", query = %args.query).entered();
    let loaded = resolve_library(args.library.library.as_deref())?;
    let categories: Vec<Category> = args.categories.iter().map(|c| (*c).into()).collect();
    let results = search_library(loaded.library(), &args.query, &categories);
    info!(total = results.total_matches(), "search complete");
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).context("serialize search results")?
        );
    } else {
        print_search_results(&results, args.columns, style);
    }
    Ok(())
}

pub fn run_categories(args: &LibraryArgs, style: TableStyle) -> Result<()> {
    let loaded = resolve_library(args.library.as_deref())?;
    print_categories(&loaded, style);
    Ok(())
}

pub fn run_chart(args: &ChartArgs, style: TableStyle) -> Result<()> {
    let loaded = resolve_library(args.library.library.as_deref())?;
    let category: Category = args.category.into();
    let results = search_library(loaded.library(), &args.query, &[category]);
    let Some(matches) = results.categories.first() else {
        bail!("category {category} missing from library");
    };
    let options = ChartOptions {
        columns: args.columns,
        theme: style.theme,
        styled: style.styled,
        highlight: args.highlight.clone(),
    };
    println!("{} ({})", category.label(), matches.matches.len());
    println!("{}", render_chart(&matches.matches, &options));
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let _guard = info_span!("export").entered();
    let loaded = resolve_library(args.library.library.as_deref())?;
    let json = render_library_json(loaded.library())?;
    let target = export_sink(&args.output)
        .export(JSON_EXPORT_FILENAME, &json)
        .context("export library")?;
    Ok(ExportResult {
        source: loaded.source,
        total: loaded.library.total(),
        target,
    })
}

pub fn run_copy(args: &CopyArgs) -> Result<CopyResult> {
    let loaded = resolve_library(args.library.library.as_deref())?;
    let category = loaded.library().find(&args.combination);
    if category.is_none() {
        warn!(combination = %args.combination, "combination is not in the library");
    }
    let mut clipboard = Osc52Clipboard::new(io::stdout());
    clipboard.copy(&args.combination)?;
    Ok(CopyResult {
        combination: args.combination.clone(),
        category,
    })
}

pub fn run_verify(args: &LibraryArgs) -> Result<VerifyResult> {
    let _guard = info_span!("verify").entered();
    let loaded = resolve_library(args.library.as_deref())?;
    let report = verify_library(loaded.library());
    info!(
        total = report.total(),
        issues = report.issues.len(),
        "library verified"
    );
    Ok(VerifyResult {
        source: loaded.source,
        sha256: loaded.sha256,
        report,
    })
}
