//! Resource pools for the Mirakl REST API.
//!
//! This module provides the structural layer of the SDK:
//!
//! - **[`ResourcePool`]**: a handle bound to one endpoint URL and the shared transport
//! - **Capability traits**: [`Creatable`], [`Gettable`], [`Listable`],
//!   [`Searchable`], [`Updatable`], [`Deletable`]
//! - **[`Filters`]**: ordered query filters with repeated-key support
//! - **[`join_url`]**: endpoint URL composition
//! - **[`resources`]**: the pool tree for every API area
//!
//! # Example
//!
//! ```rust,ignore
//! use mirakl_api::rest::{Filters, Listable, ResourcePool, Updatable};
//! use serde_json::json;
//!
//! // GET /api/orders?order_state_codes=SHIPPING
//! let filters = Filters::new().set("order_state_codes", "SHIPPING");
//! let response = client.orders().fetch_list(Some(&filters)).await?;
//!
//! // PUT /api/orders/ORD1/tracking
//! let tracking = client.orders().tracking("ORD1");
//! assert!(tracking.get_url().ends_with("/api/orders/ORD1/tracking"));
//! let response = tracking.upsert(&json!({"carrier_code": "UPS"}), None).await?;
//! ```

#[macro_use]
mod pool;
mod capabilities;
mod params;
mod path;
pub mod resources;

pub use capabilities::{Creatable, Deletable, Gettable, Listable, Searchable, Updatable};
pub use params::{FilterValue, Filters};
pub use path::join_url;
pub use pool::ResourcePool;
