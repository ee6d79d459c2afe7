//! Event Broadcast Fan-out
//!
//! Delivers each published classification event to every live subscriber,
//! best-effort. Each subscriber owns a bounded channel; `publish` serializes
//! the event once, snapshots the registry under a short lock, then attempts
//! a non-blocking send per channel. A full channel means that one subscriber
//! misses that one message — a stalled observer can never block the
//! publisher or other observers.
//!
//! The broadcaster is an explicit, injected instance: the host constructs it
//! once and hands it to both the publish path and the subscribe path. There
//! is no ambient global registry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, error};

/// Serialized event payload, shared across all subscriber channels
pub type Payload = Arc<str>;

/// Outcome of waiting for the next event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecvOutcome {
    /// Next event payload
    Event(Payload),
    /// Nothing arrived within the timeout — caller should emit a keep-alive
    /// and retry. Expected control flow, not an error.
    KeepAlive,
    /// The broadcaster itself is gone; no further events will arrive
    Closed,
}

/// Snapshot of fan-out diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BroadcastStats {
    pub subscribers: usize,
    pub published: u64,
    pub delivered: u64,
    pub dropped: u64,
}

struct Registry {
    capacity: usize,
    subscribers: RwLock<HashMap<u64, mpsc::Sender<Payload>>>,
    next_id: AtomicU64,
    published: AtomicU64,
    delivered: AtomicU64,
    dropped: AtomicU64,
}

impl Registry {
    /// Idempotent removal — safe from the delivery loop's cleanup path and
    /// from an explicit unsubscribe, in either order.
    fn unsubscribe(&self, id: u64) {
        let removed = self.write_subscribers().remove(&id).is_some();
        if removed {
            debug!(subscriber = id, "Subscriber removed");
        }
    }

    fn read_subscribers(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, HashMap<u64, mpsc::Sender<Payload>>> {
        // A poisoned registry map is still structurally valid
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_subscribers(
        &self,
    ) -> std::sync::RwLockWriteGuard<'_, HashMap<u64, mpsc::Sender<Payload>>> {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Fan-out hub for classified report events
pub struct Broadcaster {
    registry: Arc<Registry>,
}

impl Broadcaster {
    /// Create a broadcaster whose subscriber channels hold up to `capacity`
    /// undelivered messages each.
    pub fn new(capacity: usize) -> Self {
        Self {
            registry: Arc::new(Registry {
                capacity: capacity.max(1),
                subscribers: RwLock::new(HashMap::new()),
                next_id: AtomicU64::new(1),
                published: AtomicU64::new(0),
                delivered: AtomicU64::new(0),
                dropped: AtomicU64::new(0),
            }),
        }
    }

    /// Register a new subscriber and return its receiving handle.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel(self.registry.capacity);
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.write_subscribers().insert(id, tx);
        debug!(subscriber = id, "Subscriber registered");
        Subscription {
            id,
            rx,
            registry: Arc::clone(&self.registry),
        }
    }

    /// Publish one event to every currently registered subscriber.
    ///
    /// Serializes once, then try-sends to a point-in-time snapshot of the
    /// registry. Never blocks and never fails: a full channel drops the
    /// message for that subscriber only. Returns the delivered count.
    pub fn publish<T: Serialize>(&self, event: &T) -> usize {
        let json = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                // Not reachable for the event types this crate defines
                error!(error = %e, "Event serialization failed — nothing published");
                return 0;
            }
        };
        self.publish_payload(Arc::from(json.as_str()))
    }

    fn publish_payload(&self, payload: Payload) -> usize {
        self.registry.published.fetch_add(1, Ordering::Relaxed);

        // Snapshot-then-release: the lock is never held across sends
        let snapshot: Vec<(u64, mpsc::Sender<Payload>)> = self
            .registry
            .read_subscribers()
            .iter()
            .map(|(&id, tx)| (id, tx.clone()))
            .collect();

        let mut delivered = 0usize;
        let mut stale: Vec<u64> = Vec::new();
        for (id, tx) in snapshot {
            match tx.try_send(Arc::clone(&payload)) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    self.registry.dropped.fetch_add(1, Ordering::Relaxed);
                    debug!(subscriber = id, "Subscriber channel full — event dropped");
                }
                Err(TrySendError::Closed(_)) => stale.push(id),
            }
        }

        if !stale.is_empty() {
            let mut subscribers = self.registry.write_subscribers();
            for id in stale {
                subscribers.remove(&id);
            }
        }

        self.registry
            .delivered
            .fetch_add(delivered as u64, Ordering::Relaxed);
        delivered
    }

    /// Remove a subscriber by id. Idempotent.
    pub fn unsubscribe(&self, id: u64) {
        self.registry.unsubscribe(id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.read_subscribers().len()
    }

    pub fn stats(&self) -> BroadcastStats {
        BroadcastStats {
            subscribers: self.subscriber_count(),
            published: self.registry.published.load(Ordering::Relaxed),
            delivered: self.registry.delivered.load(Ordering::Relaxed),
            dropped: self.registry.dropped.load(Ordering::Relaxed),
        }
    }
}

/// Receiving handle for one subscriber.
///
/// Dropping the handle unsubscribes, so every exit path of a delivery loop
/// — normal, error, cancellation — deregisters the channel.
pub struct Subscription {
    id: u64,
    rx: mpsc::Receiver<Payload>,
    registry: Arc<Registry>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Wait up to `timeout` for the next event.
    ///
    /// `KeepAlive` on timeout is the liveness signal for long-lived
    /// connections; only `Closed` means no more events will ever arrive.
    pub async fn recv(&mut self, timeout: Duration) -> RecvOutcome {
        match tokio::time::timeout(timeout, self.rx.recv()).await {
            Ok(Some(payload)) => RecvOutcome::Event(payload),
            Ok(None) => RecvOutcome::Closed,
            Err(_) => RecvOutcome::KeepAlive,
        }
    }

    /// Explicitly deregister. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.registry.unsubscribe(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let broadcaster = Broadcaster::new(8);
        let mut sub = broadcaster.subscribe();

        let delivered = broadcaster.publish(&json!({"id": 1}));
        assert_eq!(delivered, 1);

        match sub.recv(Duration::from_millis(100)).await {
            RecvOutcome::Event(payload) => assert!(payload.contains("\"id\":1")),
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_recv_timeout_is_keepalive() {
        let broadcaster = Broadcaster::new(8);
        let mut sub = broadcaster.subscribe();
        let outcome = sub.recv(Duration::from_millis(10)).await;
        assert_eq!(outcome, RecvOutcome::KeepAlive);
    }

    #[tokio::test]
    async fn test_full_channel_drops_without_blocking() {
        let broadcaster = Broadcaster::new(2);
        let _slow = broadcaster.subscribe();

        for i in 0..5 {
            broadcaster.publish(&json!({"seq": i}));
        }

        let stats = broadcaster.stats();
        assert_eq!(stats.published, 5);
        assert_eq!(stats.delivered, 2);
        assert_eq!(stats.dropped, 3);
    }

    #[tokio::test]
    async fn test_slow_subscriber_does_not_affect_fast_one() {
        let broadcaster = Broadcaster::new(2);
        let _slow = broadcaster.subscribe();
        let mut fast = broadcaster.subscribe();

        for i in 0..4 {
            broadcaster.publish(&json!({"seq": i}));
            // The fast subscriber drains as it goes and misses nothing
            match fast.recv(Duration::from_millis(100)).await {
                RecvOutcome::Event(payload) => {
                    assert!(payload.contains(&format!("\"seq\":{i}")));
                }
                other => panic!("expected event, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_drop_unsubscribes() {
        let broadcaster = Broadcaster::new(8);
        {
            let _sub = broadcaster.subscribe();
            assert_eq!(broadcaster.subscriber_count(), 1);
        }
        assert_eq!(broadcaster.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_unsubscribe_idempotent() {
        let broadcaster = Broadcaster::new(8);
        let sub = broadcaster.subscribe();
        let id = sub.id();

        broadcaster.unsubscribe(id);
        broadcaster.unsubscribe(id);
        drop(sub);
        assert_eq!(broadcaster.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_closed_after_removal() {
        let broadcaster = Broadcaster::new(8);
        let mut sub = broadcaster.subscribe();
        broadcaster.unsubscribe(sub.id());
        let outcome = sub.recv(Duration::from_millis(50)).await;
        assert_eq!(outcome, RecvOutcome::Closed);
    }

    #[tokio::test]
    async fn test_publish_with_no_subscribers() {
        let broadcaster = Broadcaster::new(8);
        assert_eq!(broadcaster.publish(&json!({"id": 1})), 0);
        assert_eq!(broadcaster.stats().published, 1);
    }
}
