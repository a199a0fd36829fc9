// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with value objects, events,
// commands, errors and the aggregate implementation. This layer only
// depends on the generic plumbing in src/event_sourcing/.
//
// ============================================================================

pub mod order;
