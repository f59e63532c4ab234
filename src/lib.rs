//! # Mirakl API Rust SDK
//!
//! A Rust SDK for the Mirakl marketplace seller API, modelling the API as a
//! tree of typed resource pools.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MiraklConfig`] and [`MiraklConfigBuilder`]
//! - Validated newtypes for the shop API key and the marketplace hostname
//! - An async HTTP transport sending the API key and JSON headers on every call
//! - A resource pool per endpoint, with operations granted by capability
//!   traits ([`rest::Creatable`], [`rest::Gettable`], [`rest::Listable`],
//!   [`rest::Searchable`], [`rest::Updatable`], [`rest::Deletable`])
//! - Multipart uploads for import files and document attachments
//!
//! ## Quick Start
//!
//! ```rust
//! use mirakl_api::{ApiKey, Hostname, MiraklClient, MiraklConfig};
//!
//! let config = MiraklConfig::builder()
//!     .hostname(Hostname::new("example.mirakl.net").unwrap())
//!     .api_key(ApiKey::new("your-shop-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = MiraklClient::new(&config).unwrap();
//! assert_eq!(client.base_url(), "https://example.mirakl.net/api");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use mirakl_api::rest::{Filters, Listable, Updatable};
//! use serde_json::json;
//!
//! // GET https://example.mirakl.net/api/orders?order_state_codes=SHIPPING
//! let filters = Filters::new().set("order_state_codes", "SHIPPING");
//! let response = client.orders().fetch_list(Some(&filters)).await?;
//! let orders: serde_json::Value = response.json()?;
//!
//! // PUT https://example.mirakl.net/api/orders/ORD1/tracking
//! let response = client
//!     .orders()
//!     .tracking("ORD1")
//!     .upsert(&json!({"carrier_code": "UPS"}), None)
//!     .await?;
//! assert!(response.is_ok());
//! ```
//!
//! ## Uploading Files
//!
//! ```rust,ignore
//! use mirakl_api::clients::Attachment;
//! use mirakl_api::rest::Creatable;
//! use serde_json::json;
//!
//! let file = Attachment::new("file", "offers.csv", csv_bytes).mime_type("text/csv");
//! let response = client
//!     .offers()
//!     .imports()
//!     .create_with_attachments(&json!({"import_mode": "NORMAL"}), vec![file])
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Raw responses**: Non-2xx statuses are returned, not raised

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, HostUrl, Hostname, MiraklConfig, MiraklConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Area, Attachment, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, MiraklClient, RequestBody,
};
