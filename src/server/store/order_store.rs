use crate::server::model::order::{Order, OrderId};
use derive_more::{Display, Error};
use log::debug;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum StoreError {
    #[display("record not found, id={_0}")]
    RecordNotFound(#[error(not(source))] OrderId),
}

/// Process-local order collection. Insertion order is kept and ids are not
/// required to be unique.
///
/// Clones share the same underlying sequence, all access goes through one lock.
#[derive(Default)]
pub(crate) struct OrderStore(Arc<RwLock<Vec<Order>>>);

impl Clone for OrderStore {
    fn clone(&self) -> OrderStore {
        OrderStore(self.0.clone())
    }
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// snapshot of every order, in insertion order
    pub async fn list_all(&self) -> Vec<Order> {
        self.0.read().await.clone()
    }

    /// first order carrying `id`
    pub async fn find_by_id(&self, id: OrderId) -> Result<Order, StoreError> {
        self.0
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(StoreError::RecordNotFound(id))
    }

    pub async fn insert(&self, order: Order) {
        self.0.write().await.push(order);
    }

    /// Overwrite name and amount of the first order carrying `id`; the id itself never changes.
    pub async fn update_by_id(
        &self,
        id: OrderId,
        customer_name: String,
        amount: f64,
    ) -> Result<(), StoreError> {
        let mut orders = self.0.write().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(StoreError::RecordNotFound(id))?;
        order.customer_name = customer_name;
        order.amount = amount;
        Ok(())
    }

    /// Remove every order carrying `id`, unlike lookups which stop at the first match.
    pub async fn delete_by_id(&self, id: OrderId) {
        let mut orders = self.0.write().await;
        let before = orders.len();
        orders.retain(|o| o.id != id);
        debug!("removed {} order(s) with id={}", before - orders.len(), id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::JoinSet;

    async fn store_with(orders: &[Order]) -> OrderStore {
        let store = OrderStore::new();
        for order in orders {
            store.insert(order.clone()).await;
        }
        store
    }

    #[tokio::test]
    async fn test_new_is_empty() {
        assert!(OrderStore::new().list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let orders = [Order::new(3, "c", 3.0), Order::new(1, "a", 1.0), Order::new(2, "b", 2.0)];
        let store = store_with(&orders).await;
        assert_eq!(store.list_all().await, orders.to_vec());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = store_with(&[Order::new(1, "Alice", 10.0)]).await;
        assert_eq!(store.find_by_id(1).await, Ok(Order::new(1, "Alice", 10.0)));
        assert_eq!(store.find_by_id(999).await, Err(StoreError::RecordNotFound(999)));
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_kept_and_first_wins() {
        let store = store_with(&[Order::new(1, "first", 1.0), Order::new(1, "second", 2.0)]).await;
        assert_eq!(store.list_all().await.len(), 2);
        assert_eq!(store.find_by_id(1).await.unwrap().customer_name, "first");

        store.update_by_id(1, "updated".to_string(), 5.0).await.unwrap();
        let orders = store.list_all().await;
        assert_eq!(orders[0], Order::new(1, "updated", 5.0));
        assert_eq!(orders[1], Order::new(1, "second", 2.0));
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_untouched() {
        let store = store_with(&[Order::new(1, "Alice", 10.0)]).await;
        assert_eq!(
            store.update_by_id(999, "Bob".to_string(), 20.0).await,
            Err(StoreError::RecordNotFound(999))
        );
        assert_eq!(store.list_all().await, vec![Order::new(1, "Alice", 10.0)]);
    }

    #[tokio::test]
    async fn test_delete_removes_every_match() {
        let store = store_with(&[
            Order::new(1, "a", 1.0),
            Order::new(2, "b", 2.0),
            Order::new(1, "c", 3.0),
        ])
        .await;
        store.delete_by_id(1).await;
        assert_eq!(store.list_all().await, vec![Order::new(2, "b", 2.0)]);

        // absent id is a silent no-op
        store.delete_by_id(999).await;
        assert_eq!(store.list_all().await.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_are_not_lost() {
        let store = OrderStore::new();
        let mut set = JoinSet::new();
        for id in 0..100 {
            let store = store.clone();
            set.spawn(async move { store.insert(Order::new(id, "c", id as f64)).await });
        }
        while let Some(res) = set.join_next().await {
            res.unwrap();
        }
        let mut ids = store.list_all().await.into_iter().map(|o| o.id).collect::<Vec<_>>();
        ids.sort();
        assert_eq!(ids, (0..100).collect::<Vec<_>>());
    }
}
