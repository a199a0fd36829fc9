// ============================================================================
// Aggregate Infrastructure
// ============================================================================
//
// Generic command → event → state plumbing, in-process only.
// Domain-specific code is in src/domain/
//
// ============================================================================

pub mod core;

pub use self::core::*;
