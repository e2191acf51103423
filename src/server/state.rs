use crate::server::store::OrderStore;

#[derive(Clone)]
pub(crate) struct AppState {
    order_store: OrderStore,
}

impl AppState {
    pub fn new(order_store: OrderStore) -> Self {
        Self {
            order_store,
        }
    }

    pub fn get_order_store(&self) -> &OrderStore {
        &self.order_store
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::model::order::Order;

    #[actix_web::test]
    async fn app_state_shares_store() {
        let state = AppState::new(OrderStore::new());
        let cloned = state.clone();
        cloned.get_order_store().insert(Order::new(1, "Alice", 10.0)).await;
        assert_eq!(state.get_order_store().list_all().await, vec![Order::new(1, "Alice", 10.0)]);
    }
}
