//! System-wide constants for the marketd ledger modules.

/// Name of the order module, reported in the `app` tag.
pub const ORDER_APP_NAME: &str = "order";

/// Query namespace reserved for the order module.
pub const ORDER_PATH: &str = "/orders/";

/// Separator between identifier components in a query path.
pub const PATH_SEPARATOR: char = '/';

/// Tag key naming the module that handled a transaction.
pub const TAG_NAME_APP: &str = "app";

/// Tag key naming the transaction type.
pub const TAG_NAME_TX_TYPE: &str = "tx.type";

/// Transaction type tag for order creation.
pub const TX_TYPE_CREATE_ORDER: &str = "create-order";
