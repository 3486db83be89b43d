//! Cursor-following aggregation over TAU's paginated list responses

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::dispatch::Dispatcher;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::HttpClient;

/// One page of a paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub count: i64,
}

/// How many items to gather before stopping
///
/// The bound is checked between pages, so a bounded request can return up to
/// one page more than asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Bounded(usize),
    Unbounded,
}

impl Limit {
    /// Returns true while another page may be requested
    fn allows(self, fetched: usize) -> bool {
        match self {
            Self::Bounded(max) => fetched <= max,
            Self::Unbounded => true,
        }
    }
}

/// Negative values mean "everything"
impl From<i64> for Limit {
    fn from(value: i64) -> Self {
        usize::try_from(value).map_or(Self::Unbounded, Self::Bounded)
    }
}

impl From<usize> for Limit {
    fn from(value: usize) -> Self {
        Self::Bounded(value)
    }
}

enum Cursor {
    Start(Endpoint),
    Next(String),
}

/// Fetches pages starting at `start`, following `next` until it is null or
/// `limit` is reached
///
/// Pages are fetched strictly in order. Results keep page-arrival order and
/// are not deduplicated.
pub async fn collect_pages<H, T>(
    dispatcher: &Dispatcher<H>,
    start: Endpoint,
    limit: Limit,
) -> Result<Vec<T>, ApiError>
where
    H: HttpClient,
    T: DeserializeOwned,
{
    let mut results = Vec::new();
    let mut fetched = 0usize;
    let mut cursor = Cursor::Start(start);

    while limit.allows(fetched) {
        let body = match &cursor {
            Cursor::Start(endpoint) => dispatcher.execute(endpoint).await?,
            Cursor::Next(next) if is_absolute(next) => dispatcher.get_absolute(next).await?,
            Cursor::Next(next) => {
                let url = dispatcher.resolve_cursor(next)?;
                dispatcher.get_absolute(&url).await?
            }
        };

        let page: Page<T> = serde_json::from_slice(&body)?;
        let page_len = page.results.len();
        tracing::debug!(page_len, total = page.count, "fetched page");
        results.extend(page.results);

        match page.next {
            Some(next) => {
                cursor = Cursor::Next(next);
                fetched = fetched.saturating_add(page_len);
            }
            None => break,
        }
    }

    Ok(results)
}

fn is_absolute(cursor: &str) -> bool {
    cursor.starts_with("http://") || cursor.starts_with("https://")
}
