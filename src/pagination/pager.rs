//! Lazy page-following over list operations

use super::types::{Page, PaginationState};
use crate::error::{Error, Result};
use crate::http::{ApiRequest, HttpClient};
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::pin::Pin;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Stream of pages, in server order
pub type PageStream<T> = Pin<Box<dyn Stream<Item = Result<Page<T>>> + Send>>;

/// Stream of items across every page, in server order
pub type ItemStream<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

/// Where the next fetch comes from
enum Cursor {
    First(ApiRequest),
    Next(String),
    Done,
}

struct Walk {
    http: HttpClient,
    operation: &'static str,
    timeout: Option<Duration>,
    cursor: Cursor,
    state: PaginationState,
}

/// A list operation that has not been sent yet
///
/// Nothing goes over the wire until one of [`send`](Self::send),
/// [`into_stream`](Self::into_stream), [`into_pages`](Self::into_pages) or
/// [`fetch_all`](Self::fetch_all) is awaited or polled.
#[must_use = "a pager does nothing until it is sent or streamed"]
pub struct Pager<T> {
    http: HttpClient,
    request: ApiRequest,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Pager<T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub(crate) fn new(http: HttpClient, request: ApiRequest) -> Self {
        Self {
            http,
            request,
            _marker: PhantomData,
        }
    }

    /// Override the deadline of every page request
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.request = self.request.timeout(timeout);
        self
    }

    /// The first-page request
    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    /// Fetch only the first page
    pub async fn send(self) -> Result<Page<T>> {
        self.http.execute(self.request).await
    }

    /// Stream whole pages, following `next` until it is null
    pub fn into_pages(self) -> PageStream<T> {
        let walk = Walk {
            operation: self.request.operation(),
            timeout: self.request.timeout_override(),
            http: self.http,
            cursor: Cursor::First(self.request),
            state: PaginationState::new(),
        };

        Box::pin(stream::try_unfold(walk, |mut walk| async move {
            let page: Page<T> = match std::mem::replace(&mut walk.cursor, Cursor::Done) {
                Cursor::Done => return Ok(None),
                Cursor::First(request) => {
                    let url = walk.http.build_url(&request)?;
                    walk.state.visit(url.as_str());
                    walk.http.execute(request).await?
                }
                Cursor::Next(url) => {
                    walk.http
                        .execute_url(walk.operation, &url, walk.timeout)
                        .await?
                }
            };

            walk.state.record(&page);
            debug!(
                operation = walk.operation,
                page = walk.state.pages_fetched,
                items = page.len(),
                count = page.count,
                "Fetched page"
            );

            if let Some(next) = page.next() {
                if !walk.state.visit(next) {
                    return Err(Error::pagination(
                        walk.operation,
                        format!(
                            "cursor loops back to an already fetched page: {}",
                            cursor_summary(next)
                        ),
                    ));
                }
                walk.cursor = Cursor::Next(next.to_string());
            } else {
                walk.state.mark_done();
            }

            Ok(Some((page, walk)))
        }))
    }

    /// Stream items across all pages
    ///
    /// Each page is requested only when the previous one has been consumed.
    pub fn into_stream(self) -> ItemStream<T> {
        Box::pin(
            self.into_pages()
                .map_ok(|page| stream::iter(page.results.into_iter().map(Ok::<T, Error>)))
                .try_flatten(),
        )
    }

    /// Drain every page into one `Page`
    ///
    /// The result carries the `count` reported by the first page and no
    /// cursors. Stops at the first failing page; items from earlier pages
    /// are discarded with it.
    pub async fn fetch_all(self) -> Result<Page<T>> {
        let operation = self.request.operation();
        let mut pages = self.into_pages();
        let mut items = Vec::new();
        let mut state = PaginationState::new();

        while let Some(page) = pages.next().await {
            let page = page?;
            state.record(&page);
            items.extend(page.results);
        }

        let count = state.reported_count.unwrap_or(0);
        if !state.count_matches() {
            warn!(
                operation,
                reported = count,
                received = state.items_fetched,
                "Item count changed while paginating"
            );
        }
        Ok(Page::drained(count, items))
    }
}

/// Origin and query of a cursor, without the path
///
/// User-scoped paths embed the user token.
fn cursor_summary(cursor: &str) -> String {
    match Url::parse(cursor) {
        Ok(url) => match url.query() {
            Some(query) => format!("{}/...?{query}", url.origin().ascii_serialization()),
            None => format!("{}/...", url.origin().ascii_serialization()),
        },
        Err(_) => "<unparseable cursor>".to_string(),
    }
}

impl<T> std::fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}
