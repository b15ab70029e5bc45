//! Transport collaborator for the FOIA JSON:API.
//!
//! The rest of the crate only needs one async primitive, [`Transport::get`],
//! plus [`paginate`] to walk page cursors on top of it.

mod error;
mod http;
mod paginate;
mod params;
mod resource;

use async_trait::async_trait;
use serde_json::Value;

pub use error::TransportError;
pub use http::HttpTransport;
pub use paginate::{paginate, PageSummary};
pub use params::RequestParams;
pub use resource::{Document, Resource};

/// Issues GET requests against the report API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `path` with `params` and return the decoded JSON body.
    ///
    /// `path` is either relative to the API base URL or an absolute URL
    /// (as found in `links.next`).
    async fn get(&self, path: &str, params: &RequestParams) -> Result<Value, TransportError>;

    /// Fetch a JSON:API document.
    async fn get_document(
        &self,
        path: &str,
        params: &RequestParams,
    ) -> Result<Document, TransportError> {
        let body = self.get(path, params).await?;
        Document::from_value(body)
    }
}
