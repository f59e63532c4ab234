//! Shipment pools for multi-shipment orders.

use crate::rest::ResourcePool;

resource_pool! {
    /// Root pool for `shipments`.
    ShipmentsPool: Gettable, Listable
}

impl ShipmentsPool {
    /// `shipments/tracking`: attach tracking information to shipments.
    #[must_use]
    pub fn tracking(&self) -> ShipmentsTrackingPool {
        self.child(&["tracking"])
    }

    /// `shipments/ship`: mark shipments as shipped.
    #[must_use]
    pub fn ship(&self) -> ShipmentsShipPool {
        self.child(&["ship"])
    }
}

resource_pool! {
    ShipmentsTrackingPool: Creatable
}

resource_pool! {
    ShipmentsShipPool: Updatable
}
