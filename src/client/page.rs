//! Paginated listings and their aggregation

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt, stream};
use serde::Deserialize;
use tracing::debug;

use crate::client::error::ClientError;
use crate::config::FETCH_CONCURRENCY;

/// Pagination metadata reported with every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageMeta {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Trait for sources that return a listing one page at a time
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Fetches the page at `page` (0-based)
    async fn fetch_page(&self, page: u32) -> Result<Page<T>, ClientError>;
}

/// Fetch every page of a listing and concatenate the items in page order
///
/// The number of pages is taken from the first page's metadata; pages 1 through
/// `total_pages` are then requested, at most [`FETCH_CONCURRENCY`] at a time.
/// Any failed page aborts the whole listing, so callers never see a partial result.
pub async fn fetch_all<T, S>(source: &S) -> Result<Vec<T>, ClientError>
where
    T: Send + 'static,
    S: PageSource<T> + ?Sized,
{
    let first = source
        .fetch_page(0)
        .await
        .map_err(|e| page_failed(0, e))?;

    let total_pages = first.meta.total_pages;
    debug!(
        "Fetched page 0 with {} items, {} more pages to fetch",
        first.items.len(),
        total_pages
    );

    let remaining: Vec<Page<T>> = stream::iter(1..=total_pages)
        .map(|page| async move {
            source
                .fetch_page(page)
                .await
                .map_err(|e| page_failed(page, e))
        })
        .buffered(FETCH_CONCURRENCY)
        .try_collect()
        .await?;

    let mut items = first.items;
    for page in remaining {
        items.extend(page.items);
    }

    debug!("Fetched {} items in total", items.len());
    Ok(items)
}

fn page_failed(page: u32, source: ClientError) -> ClientError {
    ClientError::PageFetch {
        page,
        source: Box::new(source),
    }
}
