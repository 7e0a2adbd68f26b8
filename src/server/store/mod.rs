//! Storage port. Components never touch shared state directly; they go
//! through this seam, which also owns the referential-integrity rules.

pub(crate) mod memory;

use crate::server::model::catalog::{Menu, Restaurant, RestaurantView};
use crate::server::model::order::{
    GroupOrder, GroupOrderStatus, GroupOrderView, SubmitError, Submission,
};

pub(crate) trait Store: Clone + Send + Sync + 'static {
    async fn insert_restaurant(&self, restaurant: Restaurant, menu: Option<Menu>);
    async fn restaurants(&self) -> Vec<RestaurantView>;
    async fn restaurant(&self, id: &str) -> Option<RestaurantView>;
    /// Cascades to the restaurant's menu, its group orders and their
    /// submissions. Returns false when the id is unknown.
    async fn delete_restaurant(&self, id: &str) -> bool;

    async fn menu(&self, id: &str) -> Option<Menu>;

    async fn insert_group_order(&self, order: GroupOrder);
    async fn group_orders(&self) -> Vec<GroupOrderView>;
    async fn group_order(&self, id: &str) -> Option<GroupOrderView>;
    async fn set_group_order_status(
        &self,
        id: &str,
        status: GroupOrderStatus,
    ) -> Option<GroupOrderView>;
    /// Cascades to the order's submissions.
    async fn delete_group_order(&self, id: &str) -> bool;

    /// The lock gate. Status check and insert happen atomically so a
    /// submission can never land after a lock has been observed.
    async fn create_submission(
        &self,
        group_order_id: &str,
        submission: Submission,
    ) -> Result<GroupOrderView, SubmitError>;
    async fn delete_submission(&self, id: &str) -> bool;
}
