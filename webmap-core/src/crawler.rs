use crate::graph::Internet;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Depth-first traversal engine over a static link graph.
///
/// Visiting a page classifies it and its links into three result sets:
/// `crawled` (visitation completed successfully), `skipped` (link targets
/// that had already been visited when encountered), and `error` (link
/// targets with no matching page). A fourth set, `visited`, records every
/// address ever handed to the visit procedure and is what terminates cycles.
///
/// One engine instance performs one crawl. Running `crawl` a second time on
/// the same instance would find every page already visited and do nothing,
/// so construct a fresh `Crawler` per graph.
pub struct Crawler {
    internet: Internet,
    visited: HashSet<String>,
    crawled: HashSet<String>,
    skipped: HashSet<String>,
    error: HashSet<String>,
    // memoizes linear scans of the page list, keyed by address
    page_cache: HashMap<String, usize>,
}

impl Crawler {
    pub fn new(internet: Internet) -> Self {
        Self {
            internet,
            visited: HashSet::new(),
            crawled: HashSet::new(),
            skipped: HashSet::new(),
            error: HashSet::new(),
            page_cache: HashMap::new(),
        }
    }

    /// Crawl every page in the graph, in the graph's own order. Results are
    /// observed through the set accessors afterward.
    pub fn crawl(&mut self) {
        info!("Starting crawl of {} pages", self.internet.len());
        let entry_order: Vec<String> = self
            .internet
            .pages
            .iter()
            .map(|p| p.address.clone())
            .collect();
        for address in entry_order {
            self.visit(&address);
        }
        info!(
            "Crawl complete: {} crawled, {} skipped, {} errors",
            self.crawled.len(),
            self.skipped.len(),
            self.error.len()
        );
    }

    /// Visit one page by address, recursing into its not-yet-visited links.
    ///
    /// Classification order matters and is part of the contract:
    /// 1. Already-visited addresses return immediately (cycle guard).
    /// 2. An address with no matching page returns silently; recording a
    ///    dangling link as an error is the caller's job, so a dangling
    ///    top-level entry produces no record at all.
    /// 3. A page with no links is crawled outright.
    /// 4. A page whose links are ALL already in `skipped` lands in none of
    ///    the result sets. This check runs before any of its links are
    ///    marked skipped, so the outcome depends on what earlier visits
    ///    did, and the same page can classify differently under a
    ///    different entry order. That is intended behavior, not a bug.
    /// 5. Otherwise: links already visited are marked skipped, the rest are
    ///    resolved (failures go to `error`) and recursed into, and the page
    ///    itself is marked crawled once the whole link list is processed.
    fn visit(&mut self, address: &str) {
        if self.visited.contains(address) {
            return;
        }
        self.visited.insert(address.to_string());

        let Some(page_idx) = self.resolve(address) else {
            debug!("No page found for entry address {}", address);
            return;
        };
        let links = self.internet.pages[page_idx].links.clone();

        if links.is_empty() {
            debug!("Leaf page {} crawled", address);
            self.crawled.insert(address.to_string());
            return;
        }

        if self.all_links_skipped(&links) {
            debug!("All links of {} already skipped, dropping it", address);
            return;
        }

        // Partition first, recurse second: the skipped set must reflect the
        // state of `visited` as of this page, not whatever the recursion
        // below does to it.
        let links_not_visited = self.links_not_visited(&links);
        for link in &links_not_visited {
            if self.resolve(link).is_none() {
                debug!("Dangling link {} found on {}", link, address);
                self.error.insert(link.clone());
            } else {
                self.visit(link);
            }
        }

        self.crawled.insert(address.to_string());
    }

    /// Resolve an address to its position in the page list, consulting the
    /// memo cache before falling back to a linear scan.
    fn resolve(&mut self, address: &str) -> Option<usize> {
        if let Some(&idx) = self.page_cache.get(address) {
            return Some(idx);
        }
        let idx = self.internet.find(address)?;
        self.page_cache.insert(address.to_string(), idx);
        Some(idx)
    }

    /// Split a link list against the visited set: already-visited links are
    /// recorded as skipped, the rest are returned for recursion.
    fn links_not_visited(&mut self, links: &[String]) -> Vec<String> {
        let mut not_visited = Vec::new();
        for link in links {
            if self.visited.contains(link) {
                self.skipped.insert(link.clone());
            } else {
                not_visited.push(link.clone());
            }
        }
        not_visited
    }

    fn all_links_skipped(&self, links: &[String]) -> bool {
        links.iter().all(|link| self.skipped.contains(link))
    }

    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    pub fn crawled(&self) -> &HashSet<String> {
        &self.crawled
    }

    pub fn skipped(&self) -> &HashSet<String> {
        &self.skipped
    }

    pub fn errors(&self) -> &HashSet<String> {
        &self.error
    }

    pub fn internet(&self) -> &Internet {
        &self.internet
    }
}
