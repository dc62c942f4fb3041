pub mod crawler;
pub mod error;
pub mod graph;
pub mod report;

pub use crawler::Crawler;
pub use error::GraphError;
pub use graph::{Internet, Page};
pub use report::{CrawlSummary, ReportFormat, format_set, generate_crawl_report};

pub fn print_banner() {
    println!(
        r#"
              _
 __      _____| |__  _ __ ___   __ _ _ __
 \ \ /\ / / _ \ '_ \| '_ ` _ \ / _` | '_ \
  \ V  V /  __/ |_) | | | | | | (_| | |_) |
   \_/\_/ \___|_.__/|_| |_| |_|\__,_| .__/
                                    |_|
          deterministic crawl simulator v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
