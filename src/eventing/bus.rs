//! Event Bus
//!
//! Explicit observer registry for resolver events. Each subscriber gets its
//! own unbounded channel; disconnected subscribers are pruned on broadcast.

use crate::eventing::event::CultureEvent;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Mutex;
use uuid::Uuid;

/// Token identifying a subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

/// Fan-out registry for [`CultureEvent`]s
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Mutex<Vec<(SubscriptionId, Sender<CultureEvent>)>>,
}

impl EventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its id and receiving end
    pub fn subscribe(&self) -> (SubscriptionId, Receiver<CultureEvent>) {
        let id = SubscriptionId(Uuid::new_v4());
        let (tx, rx) = unbounded();
        self.lock().push((id, tx));
        (id, rx)
    }

    /// Remove a subscriber; unknown ids are a no-op
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().retain(|(sub_id, _)| *sub_id != id);
    }

    /// Deliver an event to every live subscriber.
    ///
    /// Subscribers whose receiver was dropped are removed here rather than
    /// accumulating until unsubscribe.
    pub fn broadcast(&self, event: CultureEvent) {
        self.lock()
            .retain(|(_, tx)| tx.send(event.clone()).is_ok());
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, Sender<CultureEvent>)>> {
        self.subscribers
            .lock()
            .expect("subscriber registry poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CultureRecord, TextDirection};
    use std::sync::Arc;

    fn record() -> Arc<CultureRecord> {
        Arc::new(CultureRecord::new(
            12,
            "he",
            "Hebrew",
            TextDirection::RightToLeft,
        ))
    }

    #[test]
    fn test_broadcast_reaches_all_subscribers() {
        let bus = EventBus::new();
        let (_id_a, rx_a) = bus.subscribe();
        let (_id_b, rx_b) = bus.subscribe();

        bus.broadcast(CultureEvent::ready(record()));

        assert_eq!(rx_a.recv().expect("event").culture().culture_id, 12);
        assert_eq!(rx_b.recv().expect("event").culture().culture_id, 12);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let (id, rx) = bus.subscribe();
        bus.unsubscribe(id);

        bus.broadcast(CultureEvent::ready(record()));

        assert!(rx.try_recv().is_err());
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_dropped_receiver_is_pruned() {
        let bus = EventBus::new();
        let (_id, rx) = bus.subscribe();
        drop(rx);

        bus.broadcast(CultureEvent::ready(record()));
        assert_eq!(bus.subscriber_count(), 0);
    }
}
