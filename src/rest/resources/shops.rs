//! Shop administration pools.

use crate::rest::ResourcePool;

resource_pool! {
    /// Router for `shops`. Composes no operation.
    ShopsPool
}

impl ShopsPool {
    /// `shops/documents`: the shop's own business documents.
    #[must_use]
    pub fn documents(&self) -> ShopsDocumentsPool {
        self.child(&["documents"])
    }
}

resource_pool! {
    /// `shops/documents`: list, upload (multipart), or delete by document id.
    ShopsDocumentsPool: Listable, Creatable, Deletable
}

impl ShopsDocumentsPool {
    /// `shops/documents/download`
    #[must_use]
    pub fn download(&self) -> ShopsDocumentsDownloadPool {
        self.child(&["download"])
    }
}

resource_pool! {
    ShopsDocumentsDownloadPool: Listable
}
