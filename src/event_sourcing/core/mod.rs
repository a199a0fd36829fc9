// ============================================================================
// Aggregate Core - Generic Abstractions
// ============================================================================
//
// Nothing in here knows about orders. Domain code lives in src/domain/.
//
// ============================================================================

pub mod aggregate;
pub mod event;

// Re-export core types for convenience
pub use aggregate::Aggregate;
pub use event::DomainEvent;
