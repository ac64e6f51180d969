//! In-memory notification bus for tests/dev and single-process deployments.

use std::sync::{Mutex, MutexGuard, PoisonError, mpsc};

use thiserror::Error;

use crate::bus::{EventBus, Subscription};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InMemoryBusError {
    #[error("notification bus is closed")]
    Closed,
}

#[derive(Debug)]
struct Listeners<M> {
    senders: Vec<mpsc::Sender<M>>,
    closed: bool,
}

/// In-memory broadcast bus.
///
/// Subscribers whose receiving end was dropped are pruned on the next publish.
/// [`close`](Self::close) disconnects every subscription, which ends a blocking
/// `recv` loop on the consumer side.
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    listeners: Mutex<Listeners<M>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscribers as of the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.listeners().senders.len()
    }

    pub fn is_closed(&self) -> bool {
        self.listeners().closed
    }

    /// Stop delivering: current subscriptions disconnect, later publishes fail.
    pub fn close(&self) {
        let mut listeners = self.listeners();
        listeners.closed = true;
        listeners.senders.clear();
    }

    // The list stays consistent even if a holder panicked: every mutation is a
    // single push, retain or clear.
    fn listeners(&self) -> MutexGuard<'_, Listeners<M>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            listeners: Mutex::new(Listeners {
                senders: Vec::new(),
                closed: false,
            }),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut listeners = self.listeners();
        if listeners.closed {
            return Err(InMemoryBusError::Closed);
        }
        listeners.senders.retain(|sender| sender.send(message.clone()).is_ok());
        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (sender, receiver) = mpsc::channel();
        let mut listeners = self.listeners();
        if !listeners.closed {
            listeners.senders.push(sender);
        }
        Subscription::new(receiver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{ChangeKind, ChangeNotification, WatchedTable};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn every_subscriber_receives_each_notification() {
        let bus: InMemoryEventBus<ChangeNotification> = InMemoryEventBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish(ChangeNotification::inventory(ChangeKind::Insert)).unwrap();

        assert_eq!(first.try_recv().unwrap().table, WatchedTable::Inventory);
        assert_eq!(second.try_recv().unwrap().table, WatchedTable::Inventory);
    }

    #[test]
    fn late_subscriber_misses_earlier_messages() {
        let bus: InMemoryEventBus<ChangeNotification> = InMemoryEventBus::new();
        bus.publish(ChangeNotification::activities(ChangeKind::Delete)).unwrap();

        let late = bus.subscribe();
        assert!(late.try_recv().is_err());
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let bus: InMemoryEventBus<ChangeNotification> = InMemoryEventBus::new();
        let keep = bus.subscribe();
        drop(bus.subscribe());

        bus.publish(ChangeNotification::inventory(ChangeKind::Update)).unwrap();

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(keep.drain().len(), 1);
    }

    #[test]
    fn publishes_across_threads() {
        let bus: Arc<InMemoryEventBus<ChangeNotification>> = Arc::new(InMemoryEventBus::new());
        let subscription = bus.subscribe();

        let publisher = Arc::clone(&bus);
        std::thread::spawn(move || {
            publisher
                .publish(ChangeNotification::activities(ChangeKind::Insert))
                .unwrap();
        })
        .join()
        .unwrap();

        let got = subscription.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(got.table, WatchedTable::Activities);
    }

    #[test]
    fn close_disconnects_subscribers() {
        let bus: InMemoryEventBus<ChangeNotification> = InMemoryEventBus::new();
        let subscription = bus.subscribe();

        bus.close();

        assert!(bus.is_closed());
        assert!(subscription.recv().is_err());
        assert_eq!(
            bus.publish(ChangeNotification::inventory(ChangeKind::Update)),
            Err(InMemoryBusError::Closed)
        );
        assert!(matches!(bus.subscribe().try_recv(), Err(mpsc::TryRecvError::Disconnected)));
    }

    fn panic_while_holding<M>(bus: &InMemoryEventBus<M>) {
        let _guard = bus.listeners.lock();
        panic!("listener holder panicked");
    }

    #[test]
    fn keeps_delivering_after_a_panicking_holder() {
        let bus: Arc<InMemoryEventBus<ChangeNotification>> = Arc::new(InMemoryEventBus::new());
        let early = bus.subscribe();

        let holder = Arc::clone(&bus);
        let joined = std::thread::spawn(move || panic_while_holding(&holder)).join();
        assert!(joined.is_err());

        let late = bus.subscribe();
        bus.publish(ChangeNotification::inventory(ChangeKind::Insert)).unwrap();

        assert_eq!(early.drain().len(), 1);
        assert_eq!(late.drain().len(), 1);
    }
}
