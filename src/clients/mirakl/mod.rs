//! The Mirakl client facade.
//!
//! [`MiraklClient`] is the entry point of the SDK: it owns the shared
//! [`HttpClient`](crate::clients::HttpClient) and one root resource pool per
//! [`Area`] of the seller API.

mod area;
mod client;

pub use area::Area;
pub use client::MiraklClient;
