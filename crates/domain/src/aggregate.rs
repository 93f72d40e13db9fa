//! Aggregate roots and the domain events they record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A record that something of domain significance happened.
///
/// Events are immutable and named in past tense, e.g. `cat.created`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique identifier for this event.
    event_id: Uuid,

    /// Routing name subscribers register for.
    event_name: String,

    /// Id of the aggregate that recorded the event.
    aggregate_id: String,

    /// When the event happened.
    occurred_on: DateTime<Utc>,

    /// Event data as JSON.
    payload: serde_json::Value,
}

impl DomainEvent {
    /// Creates an event occurring now with an empty payload.
    pub fn new(event_name: impl Into<String>, aggregate_id: impl ToString) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_name: event_name.into(),
            aggregate_id: aggregate_id.to_string(),
            occurred_on: Utc::now(),
            payload: serde_json::Value::Null,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// Overrides the occurrence timestamp.
    pub fn occurred_at(mut self, occurred_on: DateTime<Utc>) -> Self {
        self.occurred_on = occurred_on;
        self
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn aggregate_id(&self) -> &str {
        &self.aggregate_id
    }

    pub fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}

/// Ordered buffer of events an aggregate has recorded but not yet handed off.
#[derive(Debug, Clone, Default)]
pub struct DomainEvents(Vec<DomainEvent>);

impl DomainEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: DomainEvent) {
        self.0.push(event);
    }

    /// Returns every pending event in insertion order and leaves the buffer empty.
    pub fn drain(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainEvent> {
        self.0.iter()
    }
}

/// An entity that is the consistency boundary and event-recording point for
/// a cluster of domain objects.
///
/// Events are accumulated with [`record`](Self::record) and handed off exactly
/// once through [`pull_domain_events`](Self::pull_domain_events).
pub trait AggregateRoot {
    /// Returns the aggregate type name, e.g. `"Cat"`.
    fn aggregate_type() -> &'static str;

    fn domain_events(&self) -> &DomainEvents;

    fn domain_events_mut(&mut self) -> &mut DomainEvents;

    /// Appends an event. The event content is not validated.
    fn record(&mut self, event: DomainEvent) {
        self.domain_events_mut().record(event);
    }

    /// Drains the pending events. A second consecutive call returns nothing.
    fn pull_domain_events(&mut self) -> Vec<DomainEvent> {
        self.domain_events_mut().drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Default)]
    struct TestAggregate {
        events: DomainEvents,
    }

    impl AggregateRoot for TestAggregate {
        fn aggregate_type() -> &'static str {
            "TestAggregate"
        }

        fn domain_events(&self) -> &DomainEvents {
            &self.events
        }

        fn domain_events_mut(&mut self) -> &mut DomainEvents {
            &mut self.events
        }
    }

    #[test]
    fn pull_drains_in_insertion_order() {
        let mut aggregate = TestAggregate::default();
        aggregate.record(DomainEvent::new("test.first", "agg-1"));
        aggregate.record(DomainEvent::new("test.second", "agg-1"));
        assert_eq!(aggregate.domain_events().len(), 2);

        let events = aggregate.pull_domain_events();
        let names: Vec<_> = events.iter().map(DomainEvent::event_name).collect();
        assert_eq!(names, vec!["test.first", "test.second"]);

        assert!(aggregate.pull_domain_events().is_empty());
        assert!(aggregate.domain_events().is_empty());
    }

    #[test]
    fn event_defaults_to_construction_time() {
        let before = Utc::now();
        let event = DomainEvent::new("test.happened", "agg-1");
        let after = Utc::now();

        assert!(event.occurred_on() >= before && event.occurred_on() <= after);
        assert_eq!(event.payload(), &serde_json::Value::Null);
        assert_eq!(event.aggregate_id(), "agg-1");
    }

    #[test]
    fn event_accepts_explicit_timestamp_and_payload() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let event = DomainEvent::new("test.happened", 42)
            .occurred_at(at)
            .with_payload(serde_json::json!({ "value": 1 }));

        assert_eq!(event.occurred_on(), at);
        assert_eq!(event.aggregate_id(), "42");
        assert_eq!(event.payload()["value"], 1);
    }

    #[test]
    fn test_aggregate_type() {
        assert_eq!(TestAggregate::aggregate_type(), "TestAggregate");
    }
}
