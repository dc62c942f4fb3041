// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{crawl_graph_file, graph_display_name, render_report};

// Re-export the engine surface from webmap-core
pub use webmap_core::{
    Crawler, CrawlSummary, Internet, Page, ReportFormat, format_set, generate_crawl_report,
};
