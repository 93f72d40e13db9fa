//! Domain event subscribers wired into the server's event bus.

use async_trait::async_trait;
use domain::{CatEvent, DomainEvent, DomainEventSubscriber, SubscriberError};

/// Writes every cat lifecycle event to the log.
pub struct CatEventLogger;

#[async_trait]
impl DomainEventSubscriber for CatEventLogger {
    fn name(&self) -> &str {
        "CatEventLogger"
    }

    fn subscribed_to(&self) -> Vec<&'static str> {
        vec![CatEvent::CREATED, CatEvent::UPDATED, CatEvent::DELETED]
    }

    async fn on(&self, event: &DomainEvent) -> Result<(), SubscriberError> {
        let cat_event = CatEvent::from_domain_event(event).ok_or_else(|| {
            SubscriberError::new(format!("unreadable payload for {}", event.event_name()))
        })?;

        tracing::info!(
            event_id = %event.event_id(),
            event_name = event.event_name(),
            cat_id = event.aggregate_id(),
            occurred_on = %event.occurred_on(),
            details = ?cat_event,
            "cat event"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{CatId, CatProps};

    #[tokio::test]
    async fn accepts_cat_events() {
        let props = CatProps::new("Mia", 2, "Tabby");
        let event = CatEvent::created(&props).into_domain_event(&CatId::new());

        assert!(CatEventLogger.on(&event).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_unreadable_payloads() {
        let event = DomainEvent::new(CatEvent::CREATED, "cat-1")
            .with_payload(serde_json::json!({"unexpected": true}));

        let err = CatEventLogger.on(&event).await.unwrap_err();
        assert!(err.message().contains(CatEvent::CREATED));
    }
}
