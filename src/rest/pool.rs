//! The resource pool base.
//!
//! A resource pool is a handle on one remote endpoint: the endpoint URL it
//! is bound to plus the shared [`HttpClient`]. On its own a pool can only
//! report its URL and derive child pools; operations come from the
//! capability traits in [`crate::rest::capabilities`] that each concrete
//! pool type opts into.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::join_url;

/// A handle bound to one endpoint of the Mirakl API.
///
/// Pools are cheap, immutable values. Deriving a child never mutates the
/// parent and never caches: each accessor call joins a fresh URL and returns
/// a new pool sharing the same transport.
///
/// The trait is public so that endpoints not modelled by this crate can be
/// reached with a pool type of your own:
///
/// ```rust
/// use std::sync::Arc;
/// use mirakl_api::clients::HttpClient;
/// use mirakl_api::rest::{Listable, ResourcePool};
///
/// #[derive(Debug, Clone)]
/// struct CustomerDebitsPool {
///     endpoint: String,
///     transport: Arc<HttpClient>,
/// }
///
/// impl ResourcePool for CustomerDebitsPool {
///     fn from_parts(endpoint: String, transport: Arc<HttpClient>) -> Self {
///         Self { endpoint, transport }
///     }
///
///     fn get_url(&self) -> &str {
///         &self.endpoint
///     }
///
///     fn transport(&self) -> &Arc<HttpClient> {
///         &self.transport
///     }
/// }
///
/// impl Listable for CustomerDebitsPool {}
/// ```
pub trait ResourcePool: Sized {
    /// Binds a pool to an endpoint URL and a transport.
    fn from_parts(endpoint: String, transport: Arc<HttpClient>) -> Self;

    /// Returns the endpoint URL this pool is bound to.
    fn get_url(&self) -> &str;

    /// Returns the shared transport.
    fn transport(&self) -> &Arc<HttpClient>;

    /// Derives a child pool bound to `self.get_url()` followed by `segments`.
    #[must_use]
    fn child<P: ResourcePool>(&self, segments: &[&str]) -> P {
        P::from_parts(
            join_url(self.get_url(), segments),
            Arc::clone(self.transport()),
        )
    }
}

/// Declares a concrete pool type and the capabilities it composes.
///
/// ```rust,ignore
/// resource_pool! {
///     /// Invoices issued to the shop.
///     InvoicesPool: Gettable, Listable
/// }
/// ```
///
/// expands to the struct, its [`ResourcePool`] impl, and one empty impl per
/// capability so the trait's provided operation becomes available.
macro_rules! resource_pool {
    ($(#[$meta:meta])* $name:ident $(: $($capability:ident),+)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            endpoint: String,
            transport: ::std::sync::Arc<$crate::clients::HttpClient>,
        }

        impl $crate::rest::ResourcePool for $name {
            fn from_parts(
                endpoint: String,
                transport: ::std::sync::Arc<$crate::clients::HttpClient>,
            ) -> Self {
                Self { endpoint, transport }
            }

            fn get_url(&self) -> &str {
                &self.endpoint
            }

            fn transport(&self) -> &::std::sync::Arc<$crate::clients::HttpClient> {
                &self.transport
            }
        }

        $($(impl $crate::rest::$capability for $name {})+)?
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, Hostname, MiraklConfig};

    resource_pool! {
        /// Router with no capabilities.
        RootPool
    }

    resource_pool! {
        LeafPool: Listable
    }

    fn transport() -> Arc<HttpClient> {
        let config = MiraklConfig::builder()
            .hostname(Hostname::new("example.mirakl.net").unwrap())
            .api_key(ApiKey::new("token123").unwrap())
            .build()
            .unwrap();
        Arc::new(HttpClient::new(&config).unwrap())
    }

    #[test]
    fn test_from_parts_binds_url() {
        let pool = RootPool::from_parts("https://h/api/orders".to_string(), transport());
        assert_eq!(pool.get_url(), "https://h/api/orders");
    }

    #[test]
    fn test_child_appends_segments_and_shares_transport() {
        let root = RootPool::from_parts("https://h/api/offers".to_string(), transport());
        let leaf: LeafPool = root.child(&["imports", "7", "error_report"]);

        assert_eq!(leaf.get_url(), "https://h/api/offers/imports/7/error_report");
        assert!(Arc::ptr_eq(root.transport(), leaf.transport()));
    }

    #[test]
    fn test_child_derivation_is_pure() {
        let root = RootPool::from_parts("https://h/api/orders".to_string(), transport());
        let first: LeafPool = root.child(&["O1", "evaluation"]);
        let second: LeafPool = root.child(&["O1", "evaluation"]);

        assert_eq!(first.get_url(), second.get_url());
        assert_eq!(root.get_url(), "https://h/api/orders");
    }
}
