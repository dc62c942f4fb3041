use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::path::Path;
use webmap_core::{Crawler, CrawlSummary, Internet, ReportFormat, generate_crawl_report};

/// Load a graph description from disk and run a fresh crawler over it.
/// Crawlers are single-use, so every file gets its own engine.
pub fn crawl_graph_file(path: &Path) -> Result<Crawler> {
    let internet = Internet::from_file(path)
        .with_context(|| format!("Failed to load graph from {}", path.display()))?;
    let mut crawler = Crawler::new(internet);
    crawler.crawl();
    Ok(crawler)
}

/// Render a finished crawl in the requested format.
pub fn render_report(crawler: &Crawler, format: &ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(generate_crawl_report(crawler)),
        ReportFormat::Json => CrawlSummary::from_crawler(crawler)
            .to_json()
            .context("Failed to serialize crawl summary"),
    }
}

/// Derive a display name for a graph file from its file stem.
pub fn graph_display_name(file: &str) -> String {
    Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file)
        .to_string()
}

pub fn handle_crawl(args: &ArgMatches) -> i32 {
    let files: Vec<&String> = args
        .get_many::<String>("FILES")
        .expect("clap requires at least one file")
        .collect();
    let format_arg = args.get_one::<String>("format").expect("format has a default");

    let Some(format) = ReportFormat::from_str(format_arg) else {
        eprintln!(
            "{} Unknown report format '{}' (expected text or json)",
            "✗".red().bold(),
            format_arg
        );
        return 1;
    };

    let mut failures = 0;
    for (idx, file) in files.iter().enumerate() {
        // blank line between graphs to keep multi-file output readable
        if idx > 0 {
            println!();
        }

        match crawl_graph_file(Path::new(file.as_str())) {
            Ok(crawler) => {
                println!(
                    "{}",
                    format!("{} results:", graph_display_name(file))
                        .bright_white()
                        .bold()
                );
                match render_report(&crawler, &format) {
                    Ok(report) => println!("{}", report),
                    Err(e) => {
                        eprintln!("{} {:#}", "✗".red().bold(), e);
                        failures += 1;
                    }
                }
            }
            Err(e) => {
                eprintln!("{} {:#}", "✗".red().bold(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 { 1 } else { 0 }
}
