use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Handle returned by `ChartData::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Change notifications emitted by `ChartData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartDataEvent {
    DataSetsReplaced { points_len: usize },
    StyleChanged,
    XAxisLabelsChanged { count: usize },
    ViewDataChanged,
}

/// Listener notified synchronously after every `ChartData` mutation.
pub trait ChartDataObserver {
    fn on_change(&mut self, event: ChartDataEvent);

    /// Observers reporting `false` are dropped from the registry before the
    /// next notification.
    fn is_alive(&self) -> bool {
        true
    }
}

impl<F> ChartDataObserver for F
where
    F: FnMut(ChartDataEvent),
{
    fn on_change(&mut self, event: ChartDataEvent) {
        self(event);
    }
}

/// Ordered set of observers keyed by subscription.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: u64,
    observers: IndexMap<SubscriptionId, Box<dyn ChartDataObserver>>,
}

impl ObserverRegistry {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn ChartDataObserver>) -> SubscriptionId {
        self.prune();
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, observer);
        trace!(%id, count = self.observers.len(), "chart data subscriber added");
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.observers.shift_remove(&id).is_some();
        if removed {
            trace!(%id, count = self.observers.len(), "chart data subscriber removed");
        }
        removed
    }

    pub(crate) fn contains(&self, id: SubscriptionId) -> bool {
        self.observers
            .get(&id)
            .is_some_and(|observer| observer.is_alive())
    }

    /// Live observers only; dead entries awaiting pruning are not counted.
    pub(crate) fn len(&self) -> usize {
        self.observers
            .values()
            .filter(|observer| observer.is_alive())
            .count()
    }

    /// Removes observers whose owner is gone.
    pub(crate) fn prune(&mut self) {
        let before = self.observers.len();
        self.observers.retain(|_, observer| observer.is_alive());
        let pruned = before - self.observers.len();
        if pruned > 0 {
            trace!(pruned, count = self.observers.len(), "chart data subscribers pruned");
        }
    }

    pub(crate) fn notify(&mut self, event: ChartDataEvent) {
        self.prune();
        for observer in self.observers.values_mut() {
            observer.on_change(event);
        }
    }
}
