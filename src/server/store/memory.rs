use crate::server::model::catalog::{Menu, Restaurant, RestaurantView};
use crate::server::model::order::{
    GroupOrder, GroupOrderStatus, GroupOrderView, SubmitError, Submission,
};
use crate::server::store::Store;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store. One lock over the whole state keeps every write a single
/// atomic step, which is what closes the lock-then-submit race.
#[derive(Clone, Default)]
pub(crate) struct MemStore(Arc<RwLock<Inner>>);

#[derive(Default)]
struct Inner {
    restaurants: HashMap<String, Restaurant>,
    menus: HashMap<String, Menu>,
    group_orders: HashMap<String, GroupOrder>,
    submissions: HashMap<String, Submission>,
}

impl Inner {
    fn restaurant_view(&self, restaurant: &Restaurant) -> RestaurantView {
        RestaurantView {
            restaurant: restaurant.clone(),
            menu: self
                .menus
                .values()
                .find(|m| m.restaurant_id == restaurant.id)
                .cloned(),
        }
    }

    fn group_order_view(&self, order: &GroupOrder, with_menu: bool) -> GroupOrderView {
        let mut order_items: Vec<Submission> = self
            .submissions
            .values()
            .filter(|s| s.group_order_id == order.id)
            .cloned()
            .collect();
        // display order only; correctness never depends on these timestamps
        order_items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        GroupOrderView {
            order: order.clone(),
            order_items,
            menu: with_menu
                .then(|| self.menus.get(&order.menu_id).cloned())
                .flatten(),
        }
    }
}

impl Store for MemStore {
    async fn insert_restaurant(&self, restaurant: Restaurant, menu: Option<Menu>) {
        let mut inner = self.0.write().await;
        if let Some(menu) = menu {
            inner.menus.insert(menu.id.clone(), menu);
        }
        inner.restaurants.insert(restaurant.id.clone(), restaurant);
    }

    async fn restaurants(&self) -> Vec<RestaurantView> {
        let inner = self.0.read().await;
        let mut views: Vec<RestaurantView> = inner
            .restaurants
            .values()
            .map(|r| inner.restaurant_view(r))
            .collect();
        views.sort_by(|a, b| b.restaurant.created_at.cmp(&a.restaurant.created_at));
        views
    }

    async fn restaurant(&self, id: &str) -> Option<RestaurantView> {
        let inner = self.0.read().await;
        inner.restaurants.get(id).map(|r| inner.restaurant_view(r))
    }

    async fn delete_restaurant(&self, id: &str) -> bool {
        let mut inner = self.0.write().await;
        if inner.restaurants.remove(id).is_none() {
            return false;
        }
        inner.menus.retain(|_, m| m.restaurant_id != id);
        let doomed_orders: Vec<String> = inner
            .group_orders
            .values()
            .filter(|o| o.restaurant_id == id)
            .map(|o| o.id.clone())
            .collect();
        inner
            .submissions
            .retain(|_, s| !doomed_orders.contains(&s.group_order_id));
        inner.group_orders.retain(|_, o| o.restaurant_id != id);
        true
    }

    async fn menu(&self, id: &str) -> Option<Menu> {
        self.0.read().await.menus.get(id).cloned()
    }

    async fn insert_group_order(&self, order: GroupOrder) {
        let mut inner = self.0.write().await;
        inner.group_orders.insert(order.id.clone(), order);
    }

    async fn group_orders(&self) -> Vec<GroupOrderView> {
        let inner = self.0.read().await;
        let mut views: Vec<GroupOrderView> = inner
            .group_orders
            .values()
            .map(|o| inner.group_order_view(o, false))
            .collect();
        views.sort_by(|a, b| b.order.created_at.cmp(&a.order.created_at));
        views
    }

    async fn group_order(&self, id: &str) -> Option<GroupOrderView> {
        let inner = self.0.read().await;
        inner
            .group_orders
            .get(id)
            .map(|o| inner.group_order_view(o, true))
    }

    async fn set_group_order_status(
        &self,
        id: &str,
        status: GroupOrderStatus,
    ) -> Option<GroupOrderView> {
        let mut inner = self.0.write().await;
        inner.group_orders.get_mut(id)?.status = status;
        inner
            .group_orders
            .get(id)
            .map(|o| inner.group_order_view(o, false))
    }

    async fn delete_group_order(&self, id: &str) -> bool {
        let mut inner = self.0.write().await;
        if inner.group_orders.remove(id).is_none() {
            return false;
        }
        inner.submissions.retain(|_, s| s.group_order_id != id);
        true
    }

    async fn create_submission(
        &self,
        group_order_id: &str,
        submission: Submission,
    ) -> Result<GroupOrderView, SubmitError> {
        if submission.items.iter().any(|line| line.quantity < 1) {
            return Err(SubmitError::BadQuantity);
        }
        let mut inner = self.0.write().await;
        let order = inner
            .group_orders
            .get(group_order_id)
            .ok_or(SubmitError::NotFound)?;
        if !order.status.accepts_submissions() {
            return Err(SubmitError::Locked);
        }
        let order = order.clone();
        inner
            .submissions
            .insert(submission.id.clone(), submission);
        Ok(inner.group_order_view(&order, false))
    }

    async fn delete_submission(&self, id: &str) -> bool {
        self.0.write().await.submissions.remove(id).is_some()
    }
}
