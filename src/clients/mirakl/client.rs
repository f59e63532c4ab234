//! The Mirakl API client facade.

use std::sync::Arc;

use crate::clients::mirakl::Area;
use crate::clients::{HttpClient, HttpError};
use crate::config::MiraklConfig;
use crate::rest::resources::{
    AccountPool, InvoicesPool, OffersPool, OrdersPool, ProductsPool, PromotionsPool,
    SettingsPool, ShipmentsPool, ShippingPool, ShopsPool, ThreadsPool, TransactionsLogsPool,
};
use crate::rest::{join_url, ResourcePool};

/// Path of the API below the marketplace origin.
const API_PATH: &str = "api";

/// Client for the Mirakl seller API.
///
/// Builds the shared transport with the JSON and `Authorization` headers,
/// then one root pool per [`Area`], each bound to
/// `https://{hostname}/api/{area path}`. The credential is assumed valid for
/// the lifetime of the client: there is no refresh or expiry handling.
///
/// # Thread Safety
///
/// `MiraklClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use mirakl_api::{ApiKey, Hostname, MiraklClient, MiraklConfig};
/// use mirakl_api::rest::ResourcePool;
///
/// let config = MiraklConfig::builder()
///     .hostname(Hostname::new("example.mirakl.net").unwrap())
///     .api_key(ApiKey::new("token123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = MiraklClient::new(&config).unwrap();
/// assert_eq!(client.orders().get_url(), "https://example.mirakl.net/api/orders");
/// assert_eq!(
///     client.orders().tracking("ORD1").get_url(),
///     "https://example.mirakl.net/api/orders/ORD1/tracking"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MiraklClient {
    transport: Arc<HttpClient>,
    base_url: String,
    invoices: InvoicesPool,
    transactions_logs: TransactionsLogsPool,
    threads: ThreadsPool,
    shipments: ShipmentsPool,
    offers: OffersPool,
    orders: OrdersPool,
    settings: SettingsPool,
    shipping: ShippingPool,
    products: ProductsPool,
    promotions: PromotionsPool,
    account: AccountPool,
    shops: ShopsPool,
}

// Verify MiraklClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MiraklClient>();
};

impl MiraklClient {
    /// Creates a client for the marketplace described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP transport cannot be built.
    pub fn new(config: &MiraklConfig) -> Result<Self, HttpError> {
        let transport = Arc::new(HttpClient::new(config)?);
        let base_url = join_url(transport.base_uri(), &[API_PATH]);

        let root = |area: Area| area.root_url(&base_url);

        let client = Self {
            invoices: InvoicesPool::from_parts(root(Area::Invoices), Arc::clone(&transport)),
            transactions_logs: TransactionsLogsPool::from_parts(
                root(Area::TransactionsLogs),
                Arc::clone(&transport),
            ),
            threads: ThreadsPool::from_parts(root(Area::Threads), Arc::clone(&transport)),
            shipments: ShipmentsPool::from_parts(root(Area::Shipments), Arc::clone(&transport)),
            offers: OffersPool::from_parts(root(Area::Offers), Arc::clone(&transport)),
            orders: OrdersPool::from_parts(root(Area::Orders), Arc::clone(&transport)),
            settings: SettingsPool::from_parts(root(Area::Settings), Arc::clone(&transport)),
            shipping: ShippingPool::from_parts(root(Area::Shipping), Arc::clone(&transport)),
            products: ProductsPool::from_parts(root(Area::Products), Arc::clone(&transport)),
            promotions: PromotionsPool::from_parts(
                root(Area::Promotions),
                Arc::clone(&transport),
            ),
            account: AccountPool::from_parts(root(Area::Account), Arc::clone(&transport)),
            shops: ShopsPool::from_parts(root(Area::Shops), Arc::clone(&transport)),
            transport,
            base_url,
        };

        tracing::debug!("Mirakl client ready for {}", client.base_url);

        Ok(client)
    }

    /// Returns the API base URL (`https://{hostname}/api`).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the URL of an area's root pool.
    #[must_use]
    pub fn area_url(&self, area: Area) -> String {
        area.root_url(&self.base_url)
    }

    /// Returns the shared transport.
    #[must_use]
    pub const fn transport(&self) -> &Arc<HttpClient> {
        &self.transport
    }

    /// Invoices and other accounting documents.
    #[must_use]
    pub const fn invoices(&self) -> &InvoicesPool {
        &self.invoices
    }

    /// Seller payment transactions.
    #[must_use]
    pub const fn transactions_logs(&self) -> &TransactionsLogsPool {
        &self.transactions_logs
    }

    /// Message threads.
    #[must_use]
    pub const fn threads(&self) -> &ThreadsPool {
        &self.threads
    }

    /// Shipments.
    #[must_use]
    pub const fn shipments(&self) -> &ShipmentsPool {
        &self.shipments
    }

    /// Offers.
    #[must_use]
    pub const fn offers(&self) -> &OffersPool {
        &self.offers
    }

    /// Orders.
    #[must_use]
    pub const fn orders(&self) -> &OrdersPool {
        &self.orders
    }

    /// Platform settings.
    #[must_use]
    pub const fn settings(&self) -> &SettingsPool {
        &self.settings
    }

    /// Shipping configuration.
    #[must_use]
    pub const fn shipping(&self) -> &ShippingPool {
        &self.shipping
    }

    /// Products.
    #[must_use]
    pub const fn products(&self) -> &ProductsPool {
        &self.products
    }

    /// Promotions.
    #[must_use]
    pub const fn promotions(&self) -> &PromotionsPool {
        &self.promotions
    }

    /// The authenticated shop account.
    #[must_use]
    pub const fn account(&self) -> &AccountPool {
        &self.account
    }

    /// Shop administration.
    #[must_use]
    pub const fn shops(&self) -> &ShopsPool {
        &self.shops
    }
}
