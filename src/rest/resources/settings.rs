//! Platform setting pools.
//!
//! Mirakl serves its configuration lists straight under the API root
//! (`/api/channels`, `/api/locales`, ...), so [`SettingsPool`] is bound to
//! the API base URL itself and only routes to its children.

use crate::rest::ResourcePool;

resource_pool! {
    /// Router for the platform settings. Composes no operation.
    SettingsPool
}

impl SettingsPool {
    /// `additional_fields`: custom fields configured by the operator.
    #[must_use]
    pub fn additional_fields(&self) -> SettingsAdditionalFieldsPool {
        self.child(&["additional_fields"])
    }

    /// `channels`: sales channels.
    #[must_use]
    pub fn channels(&self) -> SettingsChannelsPool {
        self.child(&["channels"])
    }

    /// `documents`: document types the operator accepts.
    #[must_use]
    pub fn documents(&self) -> SettingsDocumentsPool {
        self.child(&["documents"])
    }

    /// `locales`
    #[must_use]
    pub fn locales(&self) -> SettingsLocalesPool {
        self.child(&["locales"])
    }

    /// `reasons`: reason codes by type (refund, incident, message, ...).
    #[must_use]
    pub fn reasons(&self) -> SettingsReasonsPool {
        self.child(&["reasons"])
    }

    /// `version`: the platform version.
    #[must_use]
    pub fn version(&self) -> SettingsVersionPool {
        self.child(&["version"])
    }

    /// `hierarchies`: the operator's category tree.
    #[must_use]
    pub fn hierarchies(&self) -> SettingsHierarchiesPool {
        self.child(&["hierarchies"])
    }

    /// `values_lists`
    #[must_use]
    pub fn values_lists(&self) -> SettingsValuesListsPool {
        self.child(&["values_lists"])
    }
}

resource_pool! {
    SettingsAdditionalFieldsPool: Listable
}

resource_pool! {
    SettingsChannelsPool: Listable
}

resource_pool! {
    SettingsDocumentsPool: Listable
}

resource_pool! {
    SettingsLocalesPool: Listable
}

resource_pool! {
    /// Reasons are fetched by type: `fetch_one("REFUND")`.
    SettingsReasonsPool: Gettable
}

resource_pool! {
    SettingsVersionPool: Listable
}

resource_pool! {
    SettingsHierarchiesPool: Listable
}

resource_pool! {
    SettingsValuesListsPool: Listable
}
