//! in-memory storage for orders

mod order_store;

pub(crate) use order_store::{OrderStore, StoreError};
