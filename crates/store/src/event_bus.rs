//! In-process event bus fanning domain events out to subscribers.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain::{DomainEvent, DomainEventSubscriber, EventBus};
use futures_util::future::join_all;

/// Delivers domain events to the subscribers registered for their name.
///
/// The routing table is built once from each subscriber's
/// [`DomainEventSubscriber::subscribed_to`] and never changes afterwards.
/// All deliveries of one `publish` call run concurrently and are awaited
/// together; a failing subscriber is logged and counted but does not affect
/// the others or the caller.
#[derive(Clone, Default)]
pub struct InMemoryEventBus {
    subscribers: Arc<HashMap<String, Vec<Arc<dyn DomainEventSubscriber>>>>,
}

impl InMemoryEventBus {
    pub fn new(subscribers: Vec<Arc<dyn DomainEventSubscriber>>) -> Self {
        let mut routes: HashMap<String, Vec<Arc<dyn DomainEventSubscriber>>> = HashMap::new();
        for subscriber in subscribers {
            for event_name in subscriber.subscribed_to() {
                routes
                    .entry(event_name.to_string())
                    .or_default()
                    .push(Arc::clone(&subscriber));
            }
        }
        Self {
            subscribers: Arc::new(routes),
        }
    }

    /// Returns the number of subscribers registered for an event name.
    pub fn subscriber_count(&self, event_name: &str) -> usize {
        self.subscribers.get(event_name).map_or(0, Vec::len)
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    #[tracing::instrument(skip(self, events), fields(events = events.len()))]
    async fn publish(&self, events: &[DomainEvent]) {
        let deliveries = events.iter().flat_map(|event| {
            self.subscribers
                .get(event.event_name())
                .into_iter()
                .flatten()
                .map(move |subscriber| async move {
                    let result = subscriber.on(event).await;
                    (subscriber, event, result)
                })
        });

        for (subscriber, event, result) in join_all(deliveries).await {
            if let Err(err) = result {
                tracing::error!(
                    subscriber = subscriber.name(),
                    event_name = event.event_name(),
                    aggregate_id = event.aggregate_id(),
                    error = %err,
                    "subscriber failed to handle event"
                );
                metrics::counter!(
                    "event_bus_subscriber_failures_total",
                    "event_name" => event.event_name().to_string()
                )
                .increment(1);
            }
        }

        for event in events {
            metrics::counter!(
                "event_bus_events_published_total",
                "event_name" => event.event_name().to_string()
            )
            .increment(1);
        }
    }
}
