use super::event::DomainEvent;

// ============================================================================
// Aggregate Root Pattern - Core
// ============================================================================
//
// Key Principles:
// 1. Commands are validated against current state before any event exists
// 2. Events represent decisions that have already been taken
// 3. State only changes by applying events
//
// ============================================================================

/// Generic Aggregate trait
///
/// Type Parameters:
/// - `Event`: The domain event type for this aggregate
/// - `Command`: The command type for this aggregate
/// - `Error`: The error type for business rule violations
pub trait Aggregate: Default + Sized {
    type Event: DomainEvent;
    type Command;
    type Error;

    /// Handle command and emit events (business logic, no mutation)
    fn handle_command(&self, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Apply an event to update state
    fn apply_event(&mut self, event: Self::Event) -> Result<(), Self::Error>;

    /// Number of events applied so far
    fn version(&self) -> i64;

    /// Decide and apply in one step.
    ///
    /// Nothing is applied unless `handle_command` succeeds.
    fn execute(&mut self, command: Self::Command) -> Result<(), Self::Error> {
        let events = self.handle_command(command)?;

        for event in events {
            tracing::trace!(
                event_type = event.event_type(),
                event_version = event.event_version(),
                "applying event"
            );
            self.apply_event(event)?;
        }

        Ok(())
    }

    /// Rebuild an aggregate by replaying events onto an empty one
    fn load_from_events<E>(events: E) -> Result<Self, Self::Error>
    where
        E: IntoIterator<Item = Self::Event>,
    {
        let mut aggregate = Self::default();

        for event in events {
            aggregate.apply_event(event)?;
        }

        Ok(aggregate)
    }
}
