//! Shopping order that merges line items sharing the same product and price.

pub mod domain;
pub mod event_sourcing;

pub use domain::order::{
    Item, ItemDefect, LineItem, Order, OrderCommand, OrderError, OrderEvent, Product,
};
pub use event_sourcing::{Aggregate, DomainEvent};
