//! Product pools.
//!
//! Product imports expose four per-import reports, each reached as
//! `products/imports/{import_id}/<report>` and fetched with
//! [`Listable::fetch_list`](crate::rest::Listable::fetch_list). Reports are
//! files (CSV or XLSX): read them with
//! [`HttpResponse::text`](crate::clients::HttpResponse::text) or the raw
//! body rather than as JSON.

use crate::rest::ResourcePool;

resource_pool! {
    /// Root pool for `products`.
    ProductsPool: Listable
}

impl ProductsPool {
    /// `products/imports`
    #[must_use]
    pub fn imports(&self) -> ProductsImportsPool {
        self.child(&["imports"])
    }

    /// `products/attributes`: attributes configured for product categories.
    #[must_use]
    pub fn attributes(&self) -> ProductsAttributesPool {
        self.child(&["attributes"])
    }

    /// `products/offers`: offers attached to given products.
    #[must_use]
    pub fn offers(&self) -> ProductsOffersPool {
        self.child(&["offers"])
    }
}

resource_pool! {
    /// `products/imports`: upload a product file, then poll its status.
    ProductsImportsPool: Creatable, Gettable, Listable
}

impl ProductsImportsPool {
    /// `products/imports/{import_id}/error_report`
    #[must_use]
    pub fn error_report(&self, import_id: &str) -> ProductsImportsErrorReportPool {
        self.child(&[import_id, "error_report"])
    }

    /// `products/imports/{import_id}/new_product_report`
    #[must_use]
    pub fn new_product_report(&self, import_id: &str) -> ProductsImportsNewProductReportPool {
        self.child(&[import_id, "new_product_report"])
    }

    /// `products/imports/{import_id}/transformed_file`
    #[must_use]
    pub fn transformed_file(&self, import_id: &str) -> ProductsImportsTransformedFilePool {
        self.child(&[import_id, "transformed_file"])
    }

    /// `products/imports/{import_id}/transformation_error_report`
    #[must_use]
    pub fn transformation_error_report(
        &self,
        import_id: &str,
    ) -> ProductsImportsTransformationErrorReportPool {
        self.child(&[import_id, "transformation_error_report"])
    }
}

resource_pool! {
    ProductsImportsErrorReportPool: Listable
}

resource_pool! {
    ProductsImportsNewProductReportPool: Listable
}

resource_pool! {
    ProductsImportsTransformedFilePool: Listable
}

resource_pool! {
    ProductsImportsTransformationErrorReportPool: Listable
}

resource_pool! {
    ProductsAttributesPool: Listable
}

resource_pool! {
    ProductsOffersPool: Listable
}
