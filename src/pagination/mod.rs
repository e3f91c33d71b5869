//! Pagination module
//!
//! List endpoints answer with a `{count, next, previous, results}` page;
//! `next` is an absolute URL of the following page, or null on the last.
//!
//! # Overview
//!
//! A [`Pager`] wraps the first-page request of a list operation. It can
//! fetch just that page, stream items across pages lazily, or drain every
//! page into a `Vec`. Following a cursor re-applies the API key header and
//! refuses URLs outside the configured origin.

mod pager;
mod types;

pub use pager::{ItemStream, PageStream, Pager};
pub use types::{Page, PaginationState};

#[cfg(test)]
mod tests;
