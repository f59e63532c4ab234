//! Accounting pools: invoices and seller payment transactions.

resource_pool! {
    /// Root pool for `invoices`: accounting documents issued to the shop.
    InvoicesPool: Gettable, Listable
}

resource_pool! {
    /// Root pool for `sellerpayment/transactions_logs`.
    TransactionsLogsPool: Listable
}
