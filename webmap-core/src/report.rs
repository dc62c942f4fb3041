use crate::crawler::Crawler;
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Serializable snapshot of one crawl's three result sets, with addresses
/// sorted for stable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlSummary {
    pub crawled: Vec<String>,
    pub skipped: Vec<String>,
    pub errors: Vec<String>,
}

impl CrawlSummary {
    pub fn from_crawler(crawler: &Crawler) -> Self {
        Self {
            crawled: sorted(crawler.crawled()),
            skipped: sorted(crawler.skipped()),
            errors: sorted(crawler.errors()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(GraphError::from)
    }
}

fn sorted(set: &HashSet<String>) -> Vec<String> {
    let mut items: Vec<String> = set.iter().cloned().collect();
    items.sort();
    items
}

/// Render a set of addresses as a bracketed, double-quoted list:
/// `["p1", "p2"]`. Addresses are sorted so repeated runs print identically.
pub fn format_set(set: &HashSet<String>) -> String {
    let items = sorted(set);
    let quoted: Vec<String> = items.iter().map(|item| format!("\"{}\"", item)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Render the three result sets in the classic layout: a Success, Skipped
/// and Error section, each holding one formatted set.
pub fn generate_crawl_report(crawler: &Crawler) -> String {
    let mut report = String::new();

    report.push_str("Success:\n");
    report.push_str(&format_set(crawler.crawled()));
    report.push_str("\n\n");

    report.push_str("Skipped:\n");
    report.push_str(&format_set(crawler.skipped()));
    report.push_str("\n\n");

    report.push_str("Error:\n");
    report.push_str(&format_set(crawler.errors()));
    report.push('\n');

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_set_empty() {
        assert_eq!(format_set(&HashSet::new()), "[]");
    }

    #[test]
    fn test_format_set_single() {
        let mut set = HashSet::new();
        set.insert("p1".to_string());
        assert_eq!(format_set(&set), "[\"p1\"]");
    }

    #[test]
    fn test_format_set_sorted() {
        let mut set = HashSet::new();
        set.insert("p2".to_string());
        set.insert("p1".to_string());
        set.insert("p10".to_string());
        assert_eq!(format_set(&set), "[\"p1\", \"p10\", \"p2\"]");
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!(ReportFormat::from_str("text"), Some(ReportFormat::Text));
        assert_eq!(ReportFormat::from_str("JSON"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::from_str("html"), None);
    }
}
