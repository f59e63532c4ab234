//! HTTP request types for the Mirakl API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Mirakl API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Mirakl API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A file sent as one part of a multipart upload.
///
/// # Example
///
/// ```rust
/// use mirakl_api::clients::Attachment;
///
/// let file = Attachment::new("file", "offers.csv", b"sku;price\nA1;9.99\n".to_vec())
///     .mime_type("text/csv");
///
/// assert_eq!(file.field_name, "file");
/// assert_eq!(file.mime_type.as_deref(), Some("text/csv"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    /// The form field the file is sent under (Mirakl usually expects `file`).
    pub field_name: String,
    /// The file name announced in the part's `Content-Disposition`.
    pub file_name: String,
    /// The raw file content.
    pub content: Vec<u8>,
    /// The part's MIME type. Left to the transport when `None`.
    pub mime_type: Option<String>,
}

impl Attachment {
    /// Creates an attachment without an explicit MIME type.
    #[must_use]
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            file_name: file_name.into(),
            content: content.into(),
            mime_type: None,
        }
    }

    /// Sets the MIME type of the part.
    #[must_use]
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// The body of an HTTP request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document sent with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// A `multipart/form-data` body made of text fields and file parts.
    Multipart {
        /// Text fields, in order. Repeated names are allowed.
        fields: Vec<(String, String)>,
        /// File parts.
        attachments: Vec<Attachment>,
    },
}

/// An HTTP request to be sent to the Mirakl API.
///
/// Requests carry the absolute URL of the resource they target; the
/// [`HttpClient`](crate::clients::HttpClient) only adds headers.
///
/// # Example
///
/// ```rust
/// use mirakl_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "https://example.mirakl.net/api/orders")
///     .query_param("order_state_codes", "SHIPPING")
///     .build()
///     .unwrap();
///
/// let put_request = HttpRequest::builder(HttpMethod::Put, "https://example.mirakl.net/api/orders/O1/tracking")
///     .json(json!({"carrier_code": "UPS"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL for this request.
    pub url: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Query parameters, in order. Repeated keys are sent repeatedly.
    pub query: Option<Vec<(String, String)>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Default headers that must not be sent with this request.
    pub omitted_headers: Vec<String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Returns `true` if the given default header is suppressed for this request.
    #[must_use]
    pub fn omits_header(&self, name: &str) -> bool {
        self.omitted_headers
            .iter()
            .any(|omitted| omitted.eq_ignore_ascii_case(name))
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    /// - a multipart body is attached to anything but `Post` or `Put`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        let carries_body = matches!(self.http_method, HttpMethod::Post | HttpMethod::Put);

        if carries_body && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        if !carries_body && matches!(self.body, Some(RequestBody::Multipart { .. })) {
            return Err(InvalidHttpRequestError::UnexpectedMultipart {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<RequestBody>,
    query: Option<Vec<(String, String)>>,
    extra_headers: Option<HashMap<String, String>>,
    omitted_headers: Vec<String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            query: None,
            extra_headers: None,
            omitted_headers: Vec::new(),
        }
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(RequestBody::Json(body.into()));
        self
    }

    /// Sets a multipart request body.
    #[must_use]
    pub fn multipart(mut self, fields: Vec<(String, String)>, attachments: Vec<Attachment>) -> Self {
        self.body = Some(RequestBody::Multipart {
            fields,
            attachments,
        });
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = Some(query);
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Suppresses one of the client's default headers for this request only.
    #[must_use]
    pub fn without_header(mut self, name: impl Into<String>) -> Self {
        self.omitted_headers.push(name.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            omitted_headers: self.omitted_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://example.mirakl.net/api/orders";

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, URL).build().unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, URL);
        assert!(request.body.is_none());
        assert!(request.omitted_headers.is_empty());
    }

    #[test]
    fn test_builder_creates_valid_json_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, URL)
            .json(json!({"a": 1}))
            .build()
            .unwrap();

        assert_eq!(request.body, Some(RequestBody::Json(json!({"a": 1}))));
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let post = HttpRequest::builder(HttpMethod::Post, URL).build();
        assert!(matches!(
            post,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));

        let put = HttpRequest::builder(HttpMethod::Put, URL).build();
        assert!(matches!(
            put,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "put"
        ));
    }

    #[test]
    fn test_verify_rejects_multipart_on_get() {
        let result = HttpRequest::builder(HttpMethod::Get, URL)
            .multipart(Vec::new(), Vec::new())
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnexpectedMultipart { method }) if method == "get"
        ));
    }

    #[test]
    fn test_query_params_keep_order_and_repeats() {
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .query_param("order_ids", "A")
            .query_param("order_ids", "B")
            .query_param("max", "10")
            .build()
            .unwrap();

        assert_eq!(
            request.query.unwrap(),
            vec![
                ("order_ids".to_string(), "A".to_string()),
                ("order_ids".to_string(), "B".to_string()),
                ("max".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_without_header_is_case_insensitive() {
        let request = HttpRequest::builder(HttpMethod::Post, URL)
            .multipart(Vec::new(), Vec::new())
            .without_header("Content-Type")
            .build()
            .unwrap();

        assert!(request.omits_header("content-type"));
        assert!(!request.omits_header("Authorization"));
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .header("X-Custom-Header", "custom-value")
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
    }
}
