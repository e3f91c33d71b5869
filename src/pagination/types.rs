//! Pagination types
//!
//! The wire shape of one page and the bookkeeping kept while walking
//! a cursor chain.

use serde::Deserialize;
use std::collections::HashSet;

/// One page of a list response
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages, as reported by the server
    pub count: u64,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// A page holding a fully drained collection, with no cursors
    pub(crate) fn drained(count: u64, results: Vec<T>) -> Self {
        Self {
            count,
            next: None,
            previous: None,
            results,
        }
    }

    /// Absolute URL of the next page
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref().filter(|u| !u.is_empty())
    }

    /// Absolute URL of the previous page
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref().filter(|u| !u.is_empty())
    }

    /// Check whether another page follows
    pub fn has_next(&self) -> bool {
        self.next().is_some()
    }

    /// Check whether this page holds the whole collection
    pub fn is_complete(&self) -> bool {
        self.results.len() as u64 == self.count
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check whether this page has no items
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over the items on this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }

    /// Take the items, dropping the cursors
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Progress through a cursor chain
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub pages_fetched: u32,
    /// Items received so far
    pub items_fetched: u64,
    /// `count` reported by the first page
    pub reported_count: Option<u64>,
    /// Whether the chain is exhausted
    pub done: bool,
    visited: HashSet<String>,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched page
    pub fn record<T>(&mut self, page: &Page<T>) {
        self.pages_fetched += 1;
        self.items_fetched += page.len() as u64;
        self.reported_count.get_or_insert(page.count);
        if !page.has_next() {
            self.done = true;
        }
    }

    /// Remember a URL; returns false if it was already requested
    pub fn visit(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Mark pagination as done
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Whether the items received add up to the reported `count`
    pub fn count_matches(&self) -> bool {
        self.reported_count
            .map_or(true, |count| count == self.items_fetched)
    }
}
