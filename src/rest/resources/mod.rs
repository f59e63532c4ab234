//! The resource pool tree of the Mirakl seller API.
//!
//! One module per API area. Each area has a root pool, built by
//! [`MiraklClient`](crate::MiraklClient), and child pools reached through
//! accessor methods that append the endpoint's path segments, with any
//! identifier placed where Mirakl's path template puts it.
//!
//! | Area | Root | Module |
//! |---|---|---|
//! | orders | [`OrdersPool`] | [`orders`] |
//! | offers | [`OffersPool`] | [`offers`] |
//! | products | [`ProductsPool`] | [`products`] |
//! | shipments | [`ShipmentsPool`] | [`shipments`] |
//! | threads | [`ThreadsPool`] | [`threads`] |
//! | settings | [`SettingsPool`] | [`settings`] |
//! | shipping | [`ShippingPool`] | [`shipping`] |
//! | shops | [`ShopsPool`] | [`shops`] |
//! | invoices | [`InvoicesPool`] | [`accounting`] |
//! | transactions logs | [`TransactionsLogsPool`] | [`accounting`] |
//! | promotions | [`PromotionsPool`] | [`account`] |
//! | account | [`AccountPool`] | [`account`] |

pub mod account;
pub mod accounting;
pub mod offers;
pub mod orders;
pub mod products;
pub mod settings;
pub mod shipments;
pub mod shipping;
pub mod shops;
pub mod threads;

pub use account::{AccountPool, PromotionsPool};
pub use accounting::{InvoicesPool, TransactionsLogsPool};
pub use offers::OffersPool;
pub use orders::OrdersPool;
pub use products::ProductsPool;
pub use settings::SettingsPool;
pub use shipments::ShipmentsPool;
pub use shipping::ShippingPool;
pub use shops::ShopsPool;
pub use threads::ThreadsPool;
