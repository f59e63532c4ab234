//! HTTP-specific error types for the Mirakl API SDK.
//!
//! # Error Handling
//!
//! Only failures that prevent a response from being obtained are errors:
//!
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type for everything that can go wrong
//!   between building a request and reading its response
//!
//! A response with a 4xx or 5xx status is **not** an error. It is returned
//! as a normal [`HttpResponse`](crate::clients::HttpResponse) and the caller
//! decides what it means.
//!
//! # Example
//!
//! ```rust,ignore
//! use mirakl_api::clients::HttpError;
//! use mirakl_api::rest::Listable;
//!
//! match client.orders().fetch_list(None).await {
//!     Ok(response) if response.is_ok() => println!("{}", response.text()),
//!     Ok(response) => println!("Mirakl answered {}", response.code),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(other) => println!("Request not sent: {other}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use mirakl_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A multipart body was attached to a method that cannot carry one.
    #[error("Cannot send a multipart body with {method}.")]
    UnexpectedMultipart {
        /// The HTTP method the multipart body was attached to.
        method: String,
    },

    /// Form data for a multipart upload did not serialize to a JSON object.
    #[error("Form data must serialize to a JSON object, got {kind}.")]
    FormDataNotAnObject {
        /// The JSON kind the item serialized to.
        kind: &'static str,
    },

    /// An attachment declared a MIME type that could not be parsed.
    #[error("Invalid MIME type '{mime_type}' for attachment '{file_name}'.")]
    InvalidMimeType {
        /// The attachment file name.
        file_name: String,
        /// The MIME type that was rejected.
        mime_type: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use mirakl_api::HttpError;
///
/// match result {
///     Ok(response) => { /* inspect response.code */ }
///     Err(HttpError::InvalidRequest(e)) => { /* fix the request */ }
///     Err(HttpError::Serialization(e)) => { /* item could not be encoded */ }
///     Err(HttpError::Network(e)) => { /* connection, DNS, TLS, timeout */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request payload could not be serialized to JSON.
    #[error("Failed to serialize request payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
