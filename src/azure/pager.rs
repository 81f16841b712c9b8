//! Paginated ARM listings.
//!
//! ARM list operations return `{"value": [...], "nextLink": "..."}`; the
//! listing is done once `nextLink` is missing. [`collect_all`] walks any
//! [`PageSource`] to the end and flattens the pages in order.

use crate::error::{AsgError, AsgResult, TransportError};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;

/// One page of a listing.
#[derive(Deserialize, Debug)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    /// Link to the following page, absent on the last page.
    #[serde(rename = "nextLink", default)]
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    pub fn last(value: Vec<T>) -> Page<T> {
        Page {
            value,
            next_link: None,
        }
    }

    pub fn with_next(value: Vec<T>, next_link: &str) -> Page<T> {
        Page {
            value,
            next_link: Some(next_link.to_string()),
        }
    }
}

/// Something that can hand out the pages of a listing.
#[async_trait]
pub trait PageSource: Sync {
    type Item: Send;

    /// Fetch the first page (`None`) or the page behind `next_link`.
    async fn fetch_page(&self, next_link: Option<&str>)
        -> Result<Page<Self::Item>, TransportError>;
}

/// Fetch every page of `source` and return all items in page order.
///
/// The first failing page aborts the walk; items from earlier pages are
/// dropped and no further pages are requested.
pub async fn collect_all<S: PageSource>(source: &S, listing: &str) -> AsgResult<Vec<S::Item>> {
    let mut items: Vec<S::Item> = Vec::new();
    let mut next_link: Option<String> = None;
    let mut page_index: usize = 0;
    let mut seen_links: HashSet<String> = HashSet::new();

    loop {
        let page = source
            .fetch_page(next_link.as_deref())
            .await
            .map_err(|source| AsgError::ListingFailed {
                listing: listing.to_string(),
                page: page_index,
                source,
            })?;

        let count = page.value.len();
        items.extend(page.value);
        log::info!(
            "got {listing} page#{page_index:2} record_count=+{count:3} => {total:3}",
            total = items.len(),
        );

        match page.next_link {
            Some(link) if !link.is_empty() => {
                if !seen_links.insert(link.clone()) {
                    return Err(AsgError::ListingFailed {
                        listing: listing.to_string(),
                        page: page_index,
                        source: TransportError::RepeatedNextLink(link),
                    });
                }
                next_link = Some(link);
            }
            _ => break,
        }
        page_index += 1;
    }

    log::info!(
        "Got {} {listing} in {} page(s)",
        items.len(),
        page_index + 1
    );
    Ok(items)
}
