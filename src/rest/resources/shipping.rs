//! Shipping configuration pools.

use crate::rest::ResourcePool;

resource_pool! {
    /// Router for `shipping`. Composes no operation.
    ShippingPool
}

impl ShippingPool {
    /// `shipping/zones`
    #[must_use]
    pub fn zones(&self) -> ShippingZonesPool {
        self.child(&["zones"])
    }

    /// `shipping/types`: shipping methods (standard, express, ...).
    #[must_use]
    pub fn types(&self) -> ShippingTypesPool {
        self.child(&["types"])
    }

    /// `shipping/carriers`
    #[must_use]
    pub fn carriers(&self) -> ShippingCarriersPool {
        self.child(&["carriers"])
    }

    /// `shipping/logistic_classes`
    #[must_use]
    pub fn logistic_classes(&self) -> ShippingLogisticClassesPool {
        self.child(&["logistic_classes"])
    }
}

resource_pool! {
    ShippingZonesPool: Listable
}

resource_pool! {
    ShippingTypesPool: Listable
}

resource_pool! {
    ShippingCarriersPool: Listable
}

resource_pool! {
    ShippingLogisticClassesPool: Listable
}
