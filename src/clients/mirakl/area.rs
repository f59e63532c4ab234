//! The API areas and where they live under the API base URL.

use std::fmt;

use crate::rest::join_url;

/// A top-level area of the Mirakl seller API.
///
/// Each area owns one root pool on [`MiraklClient`](crate::MiraklClient).
///
/// # Example
///
/// ```rust
/// use mirakl_api::Area;
///
/// assert_eq!(Area::TransactionsLogs.name(), "transactions_logs");
/// assert_eq!(Area::TransactionsLogs.path(), "sellerpayment/transactions_logs");
/// assert_eq!(Area::Settings.path(), "");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Area {
    /// Accounting documents.
    Invoices,
    /// Seller payment transactions.
    TransactionsLogs,
    /// Message threads.
    Threads,
    /// Shipments of multi-shipment orders.
    Shipments,
    /// Offers and offer imports.
    Offers,
    /// Orders.
    Orders,
    /// Platform configuration lists.
    Settings,
    /// Shipping configuration.
    Shipping,
    /// Products and product imports.
    Products,
    /// Promotions.
    Promotions,
    /// The authenticated shop account.
    Account,
    /// Shop administration.
    Shops,
}

impl Area {
    /// Every area, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Invoices,
        Self::TransactionsLogs,
        Self::Threads,
        Self::Shipments,
        Self::Offers,
        Self::Orders,
        Self::Settings,
        Self::Shipping,
        Self::Products,
        Self::Promotions,
        Self::Account,
        Self::Shops,
    ];

    /// Returns the stable name of the area.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invoices => "invoices",
            Self::TransactionsLogs => "transactions_logs",
            Self::Threads => "threads",
            Self::Shipments => "shipments",
            Self::Offers => "offers",
            Self::Orders => "orders",
            Self::Settings => "settings",
            Self::Shipping => "shipping",
            Self::Products => "products",
            Self::Promotions => "promotions",
            Self::Account => "account",
            Self::Shops => "shops",
        }
    }

    /// Returns the path of the area's root relative to the API base URL.
    ///
    /// Settings are served directly under the API base, so their path is
    /// empty.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::TransactionsLogs => "sellerpayment/transactions_logs",
            Self::Settings => "",
            other => other.name(),
        }
    }

    /// Returns the URL of the area's root pool under `base_url`.
    ///
    /// ```rust
    /// use mirakl_api::Area;
    ///
    /// let base = "https://example.mirakl.net/api";
    /// assert_eq!(Area::Orders.root_url(base), "https://example.mirakl.net/api/orders");
    /// assert_eq!(Area::Settings.root_url(base), base);
    /// ```
    #[must_use]
    pub fn root_url(self, base_url: &str) -> String {
        match self.path() {
            "" => base_url.trim_end_matches('/').to_string(),
            path => join_url(base_url, &[path]),
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
