//! Capability traits composed onto resource pools.
//!
//! Each trait contributes one operation against the pool's bound endpoint
//! and is implemented with an empty `impl` block: the operation is a
//! provided method. A pool that does not implement a capability simply has
//! no such method, so calling an unsupported operation is a compile error.
//!
//! | Trait | Operation | Request |
//! |---|---|---|
//! | [`Creatable`] | `create`, `create_with_attachments` | `POST {endpoint}` |
//! | [`Gettable`] | `fetch_one` | `GET {endpoint}/{id}` |
//! | [`Listable`] | `fetch_list` | `GET {endpoint}?{filters}` |
//! | [`Searchable`] | `search` | `GET {endpoint}?query={query}` |
//! | [`Updatable`] | `upsert` | `PUT {endpoint}[/{id}]` |
//! | [`Deletable`] | `delete` | `DELETE {endpoint}/{id}` |
//!
//! Every operation returns the raw [`HttpResponse`], whatever its status.

use serde::Serialize;

use crate::clients::{
    Attachment, HttpError, HttpMethod, HttpRequest, HttpResponse, JSON_HEADERS,
};
use crate::rest::params::{form_fields, item_identifier};
use crate::rest::{join_url, Filters, ResourcePool};

/// Pools that accept new items with `POST`.
#[allow(async_fn_in_trait)]
pub trait Creatable: ResourcePool {
    /// Posts `item` as a JSON document to the bound endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if `item` cannot be serialized
    /// and [`HttpError::Network`] if no response was obtained.
    async fn create<T: Serialize + ?Sized>(&self, item: &T) -> Result<HttpResponse, HttpError> {
        let body = serde_json::to_value(item)?;
        let request = HttpRequest::builder(HttpMethod::Post, self.get_url())
            .json(body)
            .build()?;
        self.transport().request(request).await
    }

    /// Posts `item` as multipart form fields along with file attachments.
    ///
    /// The client's JSON `Content-Type` and `Accept` headers are left out of
    /// this one request so the transport can frame the multipart body; no
    /// other request is affected.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `item` is not a JSON object
    /// or an attachment has an invalid MIME type, and
    /// [`HttpError::Network`] if no response was obtained.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use mirakl_api::clients::Attachment;
    /// use mirakl_api::rest::Creatable;
    /// use serde_json::json;
    ///
    /// let file = Attachment::new("file", "offers.csv", csv_bytes).mime_type("text/csv");
    /// let response = client
    ///     .offers()
    ///     .imports()
    ///     .create_with_attachments(&json!({"import_mode": "NORMAL"}), vec![file])
    ///     .await?;
    /// ```
    async fn create_with_attachments<T: Serialize + ?Sized>(
        &self,
        item: &T,
        attachments: Vec<Attachment>,
    ) -> Result<HttpResponse, HttpError> {
        let fields = form_fields(&serde_json::to_value(item)?)?;
        let request = JSON_HEADERS.iter().fold(
            HttpRequest::builder(HttpMethod::Post, self.get_url()).multipart(fields, attachments),
            |builder, header| builder.without_header(*header),
        );
        self.transport().request(request.build()?).await
    }
}

/// Pools whose items can be fetched one at a time by identifier.
#[allow(async_fn_in_trait)]
pub trait Gettable: ResourcePool {
    /// Fetches `{endpoint}/{identifier}`.
    ///
    /// The identifier is not validated; a malformed one, including an empty
    /// one (`{endpoint}/`), yields whatever the server answers (usually a 404
    /// response).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if no response was obtained.
    async fn fetch_one(&self, identifier: &str) -> Result<HttpResponse, HttpError> {
        let url = join_url(self.get_url(), &[identifier]);
        let request = HttpRequest::builder(HttpMethod::Get, url).build()?;
        self.transport().request(request).await
    }
}

/// Pools that list items, optionally filtered.
#[allow(async_fn_in_trait)]
pub trait Listable: ResourcePool {
    /// Fetches the bound endpoint with `filters` as query parameters.
    ///
    /// Pagination is not followed; pass `offset`/`max` (or whatever the
    /// endpoint documents) yourself to walk further pages.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if no response was obtained.
    async fn fetch_list(&self, filters: Option<&Filters>) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, self.get_url());
        if let Some(filters) = filters.filter(|filters| !filters.is_empty()) {
            builder = builder.query(filters.to_query());
        }
        self.transport().request(builder.build()?).await
    }
}

/// Pools that support free-text search through a `query` parameter.
#[allow(async_fn_in_trait)]
pub trait Searchable: ResourcePool {
    /// Fetches the bound endpoint with the single parameter `query`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if no response was obtained.
    async fn search(&self, query: &str) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.get_url())
            .query_param("query", query)
            .build()?;
        self.transport().request(request).await
    }
}

/// Pools that accept updates with `PUT`.
#[allow(async_fn_in_trait)]
pub trait Updatable: ResourcePool {
    /// Puts `item` as a JSON document.
    ///
    /// The target is `{endpoint}/{identifier}` where `identifier` defaults to
    /// the item's own `id` field. Without any identifier, or with an empty
    /// one, the request goes to the bound endpoint itself, which is how
    /// action endpoints such as `orders/{id}/ship` are driven.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if `item` cannot be serialized
    /// and [`HttpError::Network`] if no response was obtained.
    async fn upsert<T: Serialize + ?Sized>(
        &self,
        item: &T,
        identifier: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        let body = serde_json::to_value(item)?;
        let identifier = identifier.map_or_else(|| item_identifier(&body), |id| Some(id.to_string()));
        let url = match identifier.as_deref() {
            Some(id) if !id.is_empty() => join_url(self.get_url(), &[id]),
            _ => self.get_url().to_string(),
        };

        let request = HttpRequest::builder(HttpMethod::Put, url)
            .json(body)
            .build()?;
        self.transport().request(request).await
    }
}

/// Pools whose items can be deleted by identifier.
#[allow(async_fn_in_trait)]
pub trait Deletable: ResourcePool {
    /// Deletes `{endpoint}/{identifier}`.
    ///
    /// An empty identifier still targets `{endpoint}/`, never the collection.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if no response was obtained.
    async fn delete(&self, identifier: &str) -> Result<HttpResponse, HttpError> {
        let url = join_url(self.get_url(), &[identifier]);
        let request = HttpRequest::builder(HttpMethod::Delete, url).build()?;
        self.transport().request(request).await
    }
}
