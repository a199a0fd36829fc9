use tracing::{debug, warn};

use crate::event_sourcing::core::Aggregate;
use super::value_objects::{Item, LineItem, Product};
use super::events::OrderEvent;
use super::commands::OrderCommand;
use super::errors::{ItemDefect, OrderError};

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================

/// A cart of line items.
///
/// No two lines share both product and price: adding a line that matches an
/// existing one on both folds its quantity into the existing line instead.
#[derive(Debug, Clone)]
pub struct Order<I = LineItem> {
    items: Vec<I>,
    version: i64,
}

impl<I> Default for Order<I> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            version: 0,
        }
    }
}

impl<I: Item> Order<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `candidate` and merge it into the order.
    ///
    /// Rejects a negative price first, then a non-positive quantity. On error
    /// the order is untouched.
    pub fn add_item(&mut self, candidate: I) -> Result<(), OrderError> {
        let product_id = candidate.product().id;

        self.execute(OrderCommand::AddItem { item: candidate })
            .inspect_err(|e| warn!(product_id, error = %e, "item rejected"))
    }

    /// Current lines, in the order they were first added
    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<I> {
        self.items
    }

    /// Validate business rules before emitting events
    fn validate_item(item: &I) -> Result<(), OrderError> {
        let price = item.price();
        if price < 0.0 {
            return Err(OrderError::IncorrectItem(ItemDefect::NegativePrice(price)));
        }

        let quantity = item.quantity();
        if quantity <= 0 {
            return Err(OrderError::IncorrectItem(ItemDefect::NonPositiveQuantity(quantity)));
        }

        Ok(())
    }

    /// Exact match on both product id and price.
    fn find_line(&self, product: &Product, price: f64) -> Option<usize> {
        self.items
            .iter()
            .position(|line| line.product() == product && line.price() == price)
    }

    fn merged_quantity(existing: i32, added: i32) -> Result<i32, OrderError> {
        existing
            .checked_add(added)
            .ok_or(OrderError::QuantityOverflow { existing, added })
    }
}

// ============================================================================
// Aggregate Trait Implementation
// ============================================================================

impl<I: Item> Aggregate for Order<I> {
    type Event = OrderEvent<I>;
    type Command = OrderCommand<I>;
    type Error = OrderError;

    fn handle_command(&self, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::AddItem { item } => {
                Self::validate_item(&item)?;

                match self.find_line(item.product(), item.price()) {
                    Some(index) => {
                        let added_quantity = item.quantity();
                        Self::merged_quantity(self.items[index].quantity(), added_quantity)?;

                        Ok(vec![OrderEvent::ItemMerged { index, added_quantity }])
                    }
                    None => Ok(vec![OrderEvent::ItemAdded(item)]),
                }
            }
        }
    }

    // Replayed events get the same item rules as add_item; nothing is
    // mutated until every check has passed.
    fn apply_event(&mut self, event: Self::Event) -> Result<(), Self::Error> {
        match event {
            OrderEvent::ItemAdded(item) => {
                Self::validate_item(&item)?;
                if self.find_line(item.product(), item.price()).is_some() {
                    return Err(OrderError::IncorrectItem(ItemDefect::DuplicateLine {
                        product_id: item.product().id,
                        price: item.price(),
                    }));
                }

                debug!(
                    product_id = item.product().id,
                    quantity = item.quantity(),
                    price = item.price(),
                    "line added"
                );
                self.items.push(item);
            }
            OrderEvent::ItemMerged { index, added_quantity } => {
                if added_quantity <= 0 {
                    return Err(OrderError::IncorrectItem(ItemDefect::NonPositiveQuantity(
                        added_quantity,
                    )));
                }

                let line = self
                    .items
                    .get_mut(index)
                    .ok_or(OrderError::UnknownLine(index))?;
                let merged = Self::merged_quantity(line.quantity(), added_quantity)?;
                line.set_quantity(merged);

                debug!(
                    product_id = line.product().id,
                    added_quantity,
                    quantity = merged,
                    "line merged"
                );
            }
        }

        self.version += 1;
        Ok(())
    }

    fn version(&self) -> i64 {
        self.version
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
