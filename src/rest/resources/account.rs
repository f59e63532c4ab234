//! Shop account and promotion pools.

resource_pool! {
    /// Root pool for `account`: the authenticated shop's information.
    AccountPool: Listable
}

resource_pool! {
    /// Root pool for `promotions`.
    PromotionsPool: Listable
}
