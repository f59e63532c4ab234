//! Order pools.
//!
//! Order management covers two path shapes:
//!
//! - batch actions hanging directly off `orders` (`orders/refund`,
//!   `orders/cancel`, `orders/documents`, ...), reached through accessors
//!   without arguments
//! - per-order actions `orders/{order_id}/<action>`, reached through
//!   accessors taking the order id
//!
//! Most per-order actions are state transitions driven with
//! [`Updatable::upsert`](crate::rest::Updatable::upsert) and no identifier,
//! so the `PUT` lands on the action endpoint itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use mirakl_api::rest::Updatable;
//! use serde_json::json;
//!
//! // PUT /api/orders/ORD1/accept
//! client
//!     .orders()
//!     .accept("ORD1")
//!     .upsert(&json!({"order_lines": [{"accepted": true, "id": "ORD1-1"}]}), None)
//!     .await?;
//! ```

use crate::rest::ResourcePool;

resource_pool! {
    /// Root pool for `orders`: list orders and update them in batch.
    OrdersPool: Listable, Updatable
}

impl OrdersPool {
    /// `orders/shipping_from`: update the shipping origin of orders.
    #[must_use]
    pub fn shipping_from(&self) -> OrdersShippingFromPool {
        self.child(&["shipping_from"])
    }

    /// `orders/refund`: request refunds on order lines.
    #[must_use]
    pub fn refund(&self) -> OrdersRefundPool {
        self.child(&["refund"])
    }

    /// `orders/cancel`: cancel individual order lines across orders.
    ///
    /// Not to be confused with [`cancel`](Self::cancel), which cancels one
    /// whole order.
    #[must_use]
    pub fn cancel_lines(&self) -> OrdersCancelPool {
        self.child(&["cancel"])
    }

    /// `orders/adjust`: adjust order line quantities or prices.
    #[must_use]
    pub fn adjust(&self) -> OrdersAdjustPool {
        self.child(&["adjust"])
    }

    /// `orders/documents`: list or delete order documents.
    #[must_use]
    pub fn documents(&self) -> OrdersDocumentsPool {
        self.child(&["documents"])
    }

    /// `orders/taxes`: tax codes usable on orders.
    #[must_use]
    pub fn taxes(&self) -> OrdersTaxesPool {
        self.child(&["taxes"])
    }

    /// `orders/{order_id}/accept`
    #[must_use]
    pub fn accept(&self, order_id: &str) -> OrdersAcceptPool {
        self.child(&[order_id, "accept"])
    }

    /// `orders/{order_id}/tracking`
    #[must_use]
    pub fn tracking(&self, order_id: &str) -> OrdersTrackingPool {
        self.child(&[order_id, "tracking"])
    }

    /// `orders/{order_id}/ship`: confirm shipment of the order.
    #[must_use]
    pub fn ship(&self, order_id: &str) -> OrdersShipPool {
        self.child(&[order_id, "ship"])
    }

    /// `orders/{order_id}/cancel`
    #[must_use]
    pub fn cancel(&self, order_id: &str) -> OrdersCancelPool {
        self.child(&[order_id, "cancel"])
    }

    /// `orders/{order_id}/additional_fields`
    #[must_use]
    pub fn additional_fields(&self, order_id: &str) -> OrdersAdditionalFieldsPool {
        self.child(&[order_id, "additional_fields"])
    }

    /// `orders/{order_id}/evaluation`: the customer's evaluation of the order.
    #[must_use]
    pub fn evaluation(&self, order_id: &str) -> OrdersEvaluationPool {
        self.child(&[order_id, "evaluation"])
    }

    /// `orders/{order_id}/lines`
    #[must_use]
    pub fn lines(&self, order_id: &str) -> OrdersLinesPool {
        self.child(&[order_id, "lines"])
    }

    /// `orders/{order_id}/documents`: upload documents attached to the order.
    ///
    /// Uploads are multipart; use
    /// [`Creatable::create_with_attachments`](crate::rest::Creatable::create_with_attachments).
    #[must_use]
    pub fn document_upload(&self, order_id: &str) -> OrdersDocumentsUploadPool {
        self.child(&[order_id, "documents"])
    }

    /// `orders/{order_id}/threads`: open a message thread about the order.
    #[must_use]
    pub fn threads(&self, order_id: &str) -> OrdersThreadsPool {
        self.child(&[order_id, "threads"])
    }
}

resource_pool! {
    OrdersShippingFromPool: Updatable
}

resource_pool! {
    OrdersAcceptPool: Updatable
}

resource_pool! {
    OrdersTrackingPool: Updatable
}

resource_pool! {
    OrdersShipPool: Updatable
}

resource_pool! {
    OrdersRefundPool: Updatable
}

resource_pool! {
    /// Shared by `orders/cancel` (line cancellation) and
    /// `orders/{order_id}/cancel` (whole order).
    OrdersCancelPool: Updatable
}

resource_pool! {
    OrdersAdditionalFieldsPool: Updatable
}

resource_pool! {
    OrdersAdjustPool: Updatable
}

resource_pool! {
    OrdersEvaluationPool: Listable
}

resource_pool! {
    /// `orders/{order_id}/lines`: fetch a single order line.
    OrdersLinesPool: Gettable
}

impl OrdersLinesPool {
    /// `orders/{order_id}/lines/{line_id}/resolve_incident`
    #[must_use]
    pub fn resolve_incident(&self, line_id: &str) -> OrdersLinesResolveIncidentPool {
        self.child(&[line_id, "resolve_incident"])
    }
}

resource_pool! {
    OrdersLinesResolveIncidentPool: Updatable
}

resource_pool! {
    /// `orders/documents`: list documents (filter with `order_ids`) or
    /// delete one by document id.
    OrdersDocumentsPool: Listable, Deletable
}

impl OrdersDocumentsPool {
    /// `orders/documents/download`: download documents as a file.
    #[must_use]
    pub fn download(&self) -> OrdersDocumentsDownloadPool {
        self.child(&["download"])
    }
}

resource_pool! {
    OrdersDocumentsDownloadPool: Listable
}

resource_pool! {
    OrdersDocumentsUploadPool: Creatable
}

resource_pool! {
    OrdersTaxesPool: Listable
}

resource_pool! {
    OrdersThreadsPool: Creatable
}
