//! Cat aggregate implementation.

use common::{Outcome, guard};

use crate::aggregate::{AggregateRoot, DomainEvents};
use crate::entity::Entity;

use super::{CatEvent, CatId, CatProps, CatUpdate};

/// Cat aggregate root.
///
/// A `Cat` can only be obtained through [`Cat::create`] or [`Cat::update`],
/// both of which validate the full property set, so an invalid cat cannot
/// exist. Equality is by identity.
#[derive(Debug, Clone)]
pub struct Cat {
    entity: Entity<CatProps, CatId>,
    events: DomainEvents,
}

impl AggregateRoot for Cat {
    fn aggregate_type() -> &'static str {
        "Cat"
    }

    fn domain_events(&self) -> &DomainEvents {
        &self.events
    }

    fn domain_events_mut(&mut self) -> &mut DomainEvents {
        &mut self.events
    }
}

impl PartialEq for Cat {
    fn eq(&self, other: &Self) -> bool {
        self.entity == other.entity
    }
}

impl Eq for Cat {}

// Query methods
impl Cat {
    pub fn id(&self) -> &CatId {
        self.entity.id()
    }

    pub fn name(&self) -> &str {
        &self.entity.props().name
    }

    pub fn age(&self) -> i64 {
        self.entity.props().age
    }

    pub fn breed(&self) -> &str {
        &self.entity.props().breed
    }

    pub fn props(&self) -> &CatProps {
        self.entity.props()
    }

    /// Returns a copy of this cat with no pending events.
    ///
    /// Repositories store this form so that loading a cat never hands back
    /// events that were already raised when it was first built.
    pub fn without_pending_events(&self) -> Cat {
        Cat {
            entity: self.entity.clone(),
            events: DomainEvents::new(),
        }
    }
}

// Factory and command methods
impl Cat {
    /// Minimum number of characters in a cat's name.
    pub const MIN_NAME_LENGTH: usize = 2;

    /// Validates `props` and builds a new cat with a fresh id.
    ///
    /// Records a `cat.created` event on success.
    pub fn create(props: CatProps) -> Outcome<Cat> {
        Self::create_with_id(CatId::new(), props)
    }

    /// Validates `props` and builds a new cat with the given id.
    pub fn create_with_id(id: CatId, props: CatProps) -> Outcome<Cat> {
        Self::validate(&props).map(|()| {
            let event = CatEvent::created(&props).into_domain_event(&id);
            let mut cat = Cat {
                entity: Entity::with_id(id, props),
                events: DomainEvents::new(),
            };
            cat.record(event);
            cat
        })
    }

    /// Applies `changes` on top of the current props and re-validates.
    ///
    /// Returns a new cat with the same id; `self` is left untouched. A
    /// `cat.updated` event is recorded only when some property changed.
    pub fn update(&self, changes: &CatUpdate) -> Outcome<Cat> {
        let merged = self.props().merge(changes);
        Self::validate(&merged).map(|()| {
            let mut cat = Cat {
                entity: self.entity.with_props(merged),
                events: DomainEvents::new(),
            };
            if !cat.entity.has_same_props(&self.entity) {
                let event = CatEvent::updated(self.props(), cat.props()).into_domain_event(cat.id());
                cat.record(event);
            }
            cat
        })
    }

    /// Records that this cat is being removed.
    pub fn mark_deleted(&mut self) {
        let event = CatEvent::deleted(self.props()).into_domain_event(self.id());
        self.record(event);
    }

    fn validate(props: &CatProps) -> Outcome<()> {
        let checks = [
            guard::against_at_least(Self::MIN_NAME_LENGTH, &props.name).map_failure(|_| {
                format!(
                    "name must be at least {} characters long",
                    Self::MIN_NAME_LENGTH
                )
            }),
            guard::greater_than(-1, props.age)
                .map_failure(|_| "age must be a non-negative number".to_string()),
        ];
        Outcome::combine(&checks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mia() -> Cat {
        Cat::create(CatProps::new("Mia", 2, "Tabby")).into_value()
    }

    #[test]
    fn create_with_valid_props() {
        let cat = mia();
        assert_eq!(cat.name(), "Mia");
        assert_eq!(cat.age(), 2);
        assert_eq!(cat.breed(), "Tabby");
    }

    #[test]
    fn create_accepts_boundary_values() {
        let cat = Cat::create(CatProps::new("Al", 0, "")).into_value();
        assert_eq!(cat.name(), "Al");
        assert_eq!(cat.age(), 0);
        assert_eq!(cat.breed(), "");
    }

    #[test]
    fn create_rejects_short_name() {
        for name in ["", "M"] {
            let outcome = Cat::create(CatProps::new(name, 2, "Tabby"));
            assert_eq!(
                outcome.error_value(),
                "name must be at least 2 characters long"
            );
        }
    }

    #[test]
    fn create_rejects_negative_age() {
        let outcome = Cat::create(CatProps::new("Mia", -1, "Tabby"));
        assert_eq!(outcome.error_value(), "age must be a non-negative number");
    }

    #[test]
    fn name_rule_is_checked_first() {
        let outcome = Cat::create(CatProps::new("M", -1, "Tabby"));
        assert!(outcome.error_value().starts_with("name"));
    }

    #[test]
    fn create_records_created_event() {
        let mut cat = mia();
        let events = cat.pull_domain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name(), CatEvent::CREATED);
        assert_eq!(events[0].aggregate_id(), cat.id().as_str());
        assert!(cat.pull_domain_events().is_empty());
    }

    #[test]
    fn update_is_copy_on_write() {
        let cat = mia();
        let updated = cat.update(&CatUpdate::default().age(3)).into_value();

        assert_eq!(updated.id(), cat.id());
        assert_eq!(updated, cat);
        assert_eq!(updated.age(), 3);
        assert_eq!(updated.name(), "Mia");
        assert_eq!(cat.age(), 2);
    }

    #[test]
    fn update_revalidates_merged_props() {
        let cat = mia();
        let outcome = cat.update(&CatUpdate::default().name("X"));
        assert!(outcome.is_failure());

        let outcome = cat.update(&CatUpdate::default().age(-5));
        assert_eq!(outcome.error_value(), "age must be a non-negative number");
    }

    #[test]
    fn update_records_event_only_on_change() {
        let cat = mia();

        let mut unchanged = cat.update(&CatUpdate::default().age(2)).into_value();
        assert!(unchanged.pull_domain_events().is_empty());

        let mut changed = cat.update(&CatUpdate::default().breed("Siamese")).into_value();
        let events = changed.pull_domain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name(), CatEvent::UPDATED);
        assert_eq!(events[0].payload()["changes"]["breed"], "Siamese");
    }

    #[test]
    fn cats_with_same_props_but_different_ids_differ() {
        assert_ne!(mia(), mia());
    }

    #[test]
    fn copy_without_pending_events_keeps_state() {
        let cat = mia();
        let mut stored = cat.without_pending_events();

        assert_eq!(stored, cat);
        assert_eq!(stored.props(), cat.props());
        assert!(stored.pull_domain_events().is_empty());
        assert_eq!(cat.domain_events().len(), 1);
    }

    #[test]
    fn mark_deleted_records_event() {
        let mut cat = mia();
        cat.pull_domain_events();
        cat.mark_deleted();
        let events = cat.pull_domain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name(), CatEvent::DELETED);
    }
}
