//! HTTP client for Mirakl API communication.
//!
//! This module provides the [`HttpClient`] type, the shared transport every
//! resource pool sends its requests through.

use std::collections::HashMap;
use std::fmt;

use reqwest::multipart::{Form, Part};

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{Attachment, HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::MiraklConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Headers that describe a JSON exchange and must not accompany multipart uploads.
pub const JSON_HEADERS: [&str; 2] = ["Content-Type", "Accept"];

/// HTTP client for making requests to the Mirakl API.
///
/// The client handles:
/// - Default headers: `Content-Type` and `Accept` set to JSON, the API key
///   as `Authorization`, and a `User-Agent`
/// - Per-request header overrides without touching the defaults
/// - JSON and multipart body encoding
/// - Query strings with repeated keys
///
/// The default headers are fixed at construction, so one client can be
/// shared by any number of resource pools and tasks.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
pub struct HttpClient {
    client: reqwest::Client,
    /// Origin (e.g., `https://example.mirakl.net`).
    base_uri: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use mirakl_api::{ApiKey, Hostname, MiraklConfig};
    /// use mirakl_api::clients::HttpClient;
    ///
    /// let config = MiraklConfig::builder()
    ///     .hostname(Hostname::new("example.mirakl.net").unwrap())
    ///     .api_key(ApiKey::new("token123").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config).unwrap();
    /// assert_eq!(client.base_uri(), "https://example.mirakl.net");
    /// ```
    pub fn new(config: &MiraklConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Mirakl API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.api_key().as_ref().to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_uri: config.origin(),
            default_headers,
        })
    }

    /// Returns the origin this client talks to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Mirakl API.
    ///
    /// The response is returned whatever its status code; only failures to
    /// obtain a response are errors.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        // Per-request view of the headers; the defaults stay untouched
        let mut headers = self.default_headers.clone();
        headers.retain(|name, _| !request.omits_header(name));
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        match request.body {
            Some(RequestBody::Json(body)) => {
                req_builder = req_builder.json(&body);
            }
            Some(RequestBody::Multipart {
                fields,
                attachments,
            }) => {
                req_builder = req_builder.multipart(Self::build_form(fields, attachments)?);
            }
            None => {}
        }

        tracing::debug!("Sending {} request to {}", request.http_method, request.url);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!(
            "Mirakl answered {} to {} {}",
            code,
            request.http_method,
            request.url
        );

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Builds a multipart form from text fields and file parts.
    fn build_form(
        fields: Vec<(String, String)>,
        attachments: Vec<Attachment>,
    ) -> Result<Form, InvalidHttpRequestError> {
        let mut form = Form::new();

        for (name, value) in fields {
            form = form.text(name, value);
        }

        for attachment in attachments {
            let Attachment {
                field_name,
                file_name,
                content,
                mime_type,
            } = attachment;

            let mut part = Part::bytes(content).file_name(file_name.clone());
            if let Some(mime_type) = mime_type {
                part = part.mime_str(&mime_type).map_err(|_| {
                    InvalidHttpRequestError::InvalidMimeType {
                        file_name,
                        mime_type,
                    }
                })?;
            }
            form = form.part(field_name, part);
        }

        Ok(form)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<&str> = self.default_headers.keys().map(String::as_str).collect();
        header_names.sort_unstable();

        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("default_headers", &header_names)
            .finish_non_exhaustive()
    }
}
