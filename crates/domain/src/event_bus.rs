//! Event publication contracts.

use async_trait::async_trait;
use thiserror::Error;

use crate::aggregate::DomainEvent;

/// Error returned by a subscriber that could not handle an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SubscriberError(String);

impl SubscriberError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// A handler interested in a fixed set of event names.
#[async_trait]
pub trait DomainEventSubscriber: Send + Sync {
    /// Name used when logging failures.
    fn name(&self) -> &str;

    /// Event names this subscriber wants to receive.
    fn subscribed_to(&self) -> Vec<&'static str>;

    async fn on(&self, event: &DomainEvent) -> Result<(), SubscriberError>;
}

/// Delivers recorded domain events to subscribers.
///
/// Publishing is best-effort: implementations must not fail the caller when a
/// subscriber fails.
#[async_trait]
pub trait EventBus: Send + Sync {
    async fn publish(&self, events: &[DomainEvent]);
}
