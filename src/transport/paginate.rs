//! Page cursor walking.

use super::error::TransportError;
use super::params::RequestParams;
use super::resource::{Document, Resource};
use super::Transport;

/// Totals for a finished pagination run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSummary {
    pub pages: usize,
    pub items: usize,
}

/// Walk every page of `path`, handing each page's items to `on_page`.
///
/// Pages are requested one at a time: the next page is only requested after
/// `on_page` has returned for the current one. The walk ends when the server
/// omits a `next` link or returns fewer entries than the page limit.
pub async fn paginate<T, F>(
    transport: &T,
    path: &str,
    params: &RequestParams,
    mut on_page: F,
) -> Result<PageSummary, TransportError>
where
    T: Transport + ?Sized,
    F: FnMut(Vec<Resource>) + Send,
{
    let limit = params.page_limit();
    let mut summary = PageSummary::default();
    let mut body = transport.get(path, params).await?;

    loop {
        let document = Document::from_value(body)?;
        let next = document.next.clone();
        let raw_len = document.raw_len;
        let count = document.data.len();
        summary.pages += 1;
        summary.items += count;

        tracing::debug!(
            path = %path,
            page = summary.pages,
            items = count,
            skipped = raw_len - count,
            "Received page"
        );
        on_page(document.into_resolved_data());

        // Malformed entries still occupy a slot in the server's page.
        let short_page = limit.is_some_and(|limit| raw_len < limit);
        let next = match next {
            Some(next) if !short_page => next,
            _ => break,
        };

        // Next links already carry the full query string.
        body = transport.get(&next, &RequestParams::default()).await?;
    }

    Ok(summary)
}
