use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single page in a link graph: its address and the ordered list of
/// addresses it links to. Links are opaque strings and may be dangling,
/// duplicated, or self-referential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub address: String,
    pub links: Vec<String>,
}

/// A statically-defined "internet": an ordered list of pages. The order of
/// `pages` defines both the crawl entry order and the universe of addresses
/// a link can resolve to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internet {
    pub pages: Vec<Page>,
}

impl Internet {
    /// Parse a graph description from its JSON form:
    /// `{"pages": [{"address": "...", "links": ["...", ...]}, ...]}`.
    ///
    /// Both `address` and `links` are required on every page; a record
    /// missing either is rejected here, before any crawler is constructed.
    pub fn from_json(json: &str) -> Result<Self> {
        let internet: Internet = serde_json::from_str(json)?;
        Ok(internet)
    }

    /// Load a graph description from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Linear scan for the first page with the given address. Duplicate
    /// addresses are permitted in the source; the first match wins.
    pub fn find(&self, address: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.address == address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_returns_first_match_for_duplicates() {
        let internet = Internet {
            pages: vec![
                Page {
                    address: "p1".to_string(),
                    links: vec!["a".to_string()],
                },
                Page {
                    address: "p1".to_string(),
                    links: vec!["b".to_string()],
                },
            ],
        };
        let idx = internet.find("p1").unwrap();
        assert_eq!(idx, 0);
        assert_eq!(internet.pages[idx].links, vec!["a".to_string()]);
    }

    #[test]
    fn test_find_missing_address() {
        let internet = Internet { pages: vec![] };
        assert_eq!(internet.find("nowhere"), None);
    }
}
