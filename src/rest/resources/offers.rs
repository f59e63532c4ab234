//! Offer pools.
//!
//! Offers are created one by one with JSON (`POST offers`) or in bulk by
//! uploading a file to `offers/imports`. Import progress and the error
//! report of a finished import are then read back by import id.

use crate::rest::ResourcePool;

resource_pool! {
    /// Root pool for `offers`.
    OffersPool: Creatable, Gettable, Listable
}

impl OffersPool {
    /// `offers/imports`: file-based offer imports.
    #[must_use]
    pub fn imports(&self) -> OffersImportsPool {
        self.child(&["imports"])
    }

    /// `offers/export`: export the shop's offers.
    #[must_use]
    pub fn export(&self) -> OffersExportPool {
        self.child(&["export"])
    }

    /// `offers/states`: the offer condition list (new, used, ...).
    #[must_use]
    pub fn states(&self) -> OffersStatesPool {
        self.child(&["states"])
    }
}

resource_pool! {
    /// `offers/imports`: upload an import file, then poll its status.
    OffersImportsPool: Creatable, Gettable, Listable
}

impl OffersImportsPool {
    /// `offers/imports/{import_id}/error_report`
    #[must_use]
    pub fn error_report(&self, import_id: &str) -> OffersImportsErrorReportPool {
        self.child(&[import_id, "error_report"])
    }
}

resource_pool! {
    OffersImportsErrorReportPool: Listable
}

resource_pool! {
    OffersExportPool: Listable
}

resource_pool! {
    OffersStatesPool: Listable
}
