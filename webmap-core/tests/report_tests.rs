// Tests for report generation

use webmap_core::{Crawler, CrawlSummary, Internet, Page, generate_crawl_report};

fn crawled_crawler(pages: Vec<(&str, Vec<&str>)>) -> Crawler {
    let internet = Internet {
        pages: pages
            .into_iter()
            .map(|(address, links)| Page {
                address: address.to_string(),
                links: links.into_iter().map(|l| l.to_string()).collect(),
            })
            .collect(),
    };
    let mut crawler = Crawler::new(internet);
    crawler.crawl();
    crawler
}

// ============================================================================
// Text Report Tests
// ============================================================================

#[test]
fn test_report_layout() {
    let crawler = crawled_crawler(vec![("p1", vec!["p2"]), ("p2", vec![])]);
    let report = generate_crawl_report(&crawler);

    assert_eq!(
        report,
        "Success:\n[\"p1\", \"p2\"]\n\nSkipped:\n[]\n\nError:\n[]\n"
    );
}

#[test]
fn test_report_all_three_sections_populated() {
    // p2 revisits p1 (skipped) and p1 references a missing page (error)
    let crawler = crawled_crawler(vec![("p1", vec!["p2", "p9"]), ("p2", vec!["p1"])]);
    let report = generate_crawl_report(&crawler);

    assert!(report.contains("Success:\n[\"p1\", \"p2\"]"));
    assert!(report.contains("Skipped:\n[\"p1\"]"));
    assert!(report.contains("Error:\n[\"p9\"]"));
}

// ============================================================================
// Summary Tests
// ============================================================================

#[test]
fn test_summary_is_sorted() {
    let crawler = crawled_crawler(vec![
        ("p3", vec![]),
        ("p1", vec![]),
        ("p2", vec![]),
    ]);
    let summary = CrawlSummary::from_crawler(&crawler);

    assert_eq!(summary.crawled, vec!["p1", "p2", "p3"]);
    assert!(summary.skipped.is_empty());
    assert!(summary.errors.is_empty());
}

#[test]
fn test_summary_json_round_trip() {
    let crawler = crawled_crawler(vec![("p1", vec!["p9"])]);
    let summary = CrawlSummary::from_crawler(&crawler);

    let json = summary.to_json().unwrap();
    let parsed: CrawlSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, summary);
    assert_eq!(parsed.errors, vec!["p9"]);
}
