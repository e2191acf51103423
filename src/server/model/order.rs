use serde::{Deserialize, Serialize};

pub(crate) type OrderId = i32;

/// A customer purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub amount: f64,
}

#[cfg(test)]
impl Order {
    pub fn new(id: OrderId, customer_name: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            amount,
        }
    }
}

/// PUT body, any `id` field sent along is ignored
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PutOrderRequest {
    pub customer_name: String,
    pub amount: f64,
}
