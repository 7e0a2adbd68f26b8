pub(crate) mod error;
pub(crate) mod group_orders;
pub(crate) mod recognition;
pub(crate) mod restaurants;
