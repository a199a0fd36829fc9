// ============================================================================
// Domain Event Trait
// ============================================================================

/// Generic Domain Event trait
///
/// Event enums name each variant so callers can tag logs without matching.
pub trait DomainEvent {
    fn event_type(&self) -> &'static str;
    fn event_version(&self) -> i32 { 1 }
}
