use serde::{Deserialize, Serialize};

use crate::event_sourcing::core::DomainEvent;

// ============================================================================
// Order Events - Domain Events for Order Aggregate
// ============================================================================

/// Order Event - exactly one is decided per accepted item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent<I> {
    /// No line matched; the candidate becomes a new line.
    ItemAdded(I),
    /// The candidate matched the line at `index`; its quantity is folded in.
    ItemMerged { index: usize, added_quantity: i32 },
}

impl<I> DomainEvent for OrderEvent<I> {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::ItemAdded(_) => "OrderItemAdded",
            OrderEvent::ItemMerged { .. } => "OrderItemMerged",
        }
    }
}
