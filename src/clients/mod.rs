//! HTTP client types for Mirakl API communication.
//!
//! This module provides the transport layer shared by every resource pool:
//!
//! - [`HttpClient`]: The async HTTP client carrying the default headers
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: The raw response (status, headers, body)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RequestBody`] and [`Attachment`]: JSON and multipart payloads
//! - [`MiraklClient`]: The facade holding the root pool of each API area
//!
//! # Example
//!
//! ```rust,ignore
//! use mirakl_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "https://example.mirakl.net/api/account")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Error Responses
//!
//! A response is returned as-is whatever its status code: a `404` or a
//! `400` is an `Ok(HttpResponse)` to be inspected by the caller. Only
//! transport failures and requests that cannot be built are errors.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod mirakl;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, JSON_HEADERS, SDK_VERSION};
pub use http_request::{Attachment, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::HttpResponse;
pub use mirakl::{Area, MiraklClient};
