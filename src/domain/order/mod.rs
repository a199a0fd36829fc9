// ============================================================================
// Order Domain - Business Logic for the Order Aggregate
// ============================================================================
//
// - Value objects (Product, the Item trait, LineItem)
// - Events (ItemAdded, ItemMerged)
// - Commands (AddItem)
// - Errors (OrderError, ItemDefect)
// - Aggregate (Order with the merge rules)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
