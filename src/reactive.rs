//! Reactive state container with explicit subscribe/notify.
//!
//! A [`Store`] owns a value. Every [`Store::update`] compares the value
//! before and after the mutation and notifies subscribers with the list of
//! fields that actually changed. Updates that change nothing notify nobody.

/// Reports which fields differ from a previous snapshot.
pub trait Changes {
    type Field: Copy + PartialEq;

    fn changes(&self, previous: &Self) -> Vec<Self::Field>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T, F> = Box<dyn FnMut(&T, &[F])>;

pub struct Store<T: Changes> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber<T, T::Field>)>,
}

impl<T: Changes + Clone> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Applies `mutate` and returns the fields it changed.
    pub fn update(&mut self, mutate: impl FnOnce(&mut T)) -> Vec<T::Field> {
        let previous = self.value.clone();
        mutate(&mut self.value);

        let changed = self.value.changes(&previous);
        if !changed.is_empty() {
            for (_, subscriber) in &mut self.subscribers {
                subscriber(&self.value, &changed);
            }
        }
        changed
    }

    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&T, &[T::Field]) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }
}

impl<T: Changes + Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardField, CardState};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_update_notifies_changed_fields() {
        let mut store = Store::<CardState>::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |_, fields| sink.borrow_mut().extend_from_slice(fields));

        store.update(|state| state.user_answer = "4".to_string());

        assert_eq!(*seen.borrow(), vec![CardField::UserAnswer]);
    }

    #[test]
    fn test_noop_update_is_silent() {
        let mut store = Store::<CardState>::default();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        let changed = store.update(|state| state.correct = false);

        assert!(changed.is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_subscriber_sees_new_value() {
        let mut store = Store::<CardState>::default();
        let last = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&last);
        store.subscribe(move |state, _| *sink.borrow_mut() = Some(state.show_result));

        store.update(|state| state.show_result = true);

        assert_eq!(*last.borrow(), Some(true));
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = Store::<CardState>::default();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_, _| *counter.borrow_mut() += 1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));

        store.update(|state| state.back = true);

        assert_eq!(*calls.borrow(), 0);
    }
}
