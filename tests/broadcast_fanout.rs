//! Broadcast Fan-out Integration Tests
//!
//! Exercises the subscriber lifecycle end-to-end: registration, bounded
//! delivery, slow-subscriber isolation, keep-alive timeouts, and idempotent
//! deregistration on every exit path.

use std::time::Duration;

use alertify::{Broadcaster, Classification, RecvOutcome, ReportEvent};

fn event(id: u64) -> ReportEvent {
    ReportEvent::new(
        id,
        "CDRRMO Watch".to_string(),
        format!("test report {id}"),
        Classification::NotDisaster,
    )
}

#[tokio::test]
async fn delivered_payload_round_trips() {
    let broadcaster = Broadcaster::new(16);
    let mut subscription = broadcaster.subscribe();

    broadcaster.publish(&event(42));

    match subscription.recv(Duration::from_millis(200)).await {
        RecvOutcome::Event(payload) => {
            let parsed: ReportEvent = serde_json::from_str(&payload).expect("payload is JSON");
            assert_eq!(parsed.id, 42);
            assert_eq!(parsed.author, "CDRRMO Watch");
            assert!(!parsed.classification.is_disaster());
        }
        other => panic!("expected event, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_subscriber_never_blocks_publisher_or_peers() {
    let capacity = 8usize;
    let total = 50usize;
    let broadcaster = Broadcaster::new(capacity);

    // Never drained — its channel fills and overflow is dropped
    let slow = broadcaster.subscribe();

    let mut fast = broadcaster.subscribe();
    let drain = tokio::spawn(async move {
        let mut received = 0usize;
        loop {
            match fast.recv(Duration::from_secs(2)).await {
                RecvOutcome::Event(_) => {
                    received += 1;
                    if received == 50 {
                        break;
                    }
                }
                RecvOutcome::KeepAlive => continue,
                RecvOutcome::Closed => break,
            }
        }
        received
    });

    // Publish in sub-capacity bursts so the draining peer keeps up
    let mut published = 0usize;
    while published < total {
        for _ in 0..5 {
            published += 1;
            broadcaster.publish(&event(published as u64));
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let received = drain.await.expect("drain task");
    assert_eq!(received, total, "fast subscriber must miss nothing");

    let stats = broadcaster.stats();
    assert_eq!(stats.published, total as u64);
    // The slow channel accepted only its capacity; the rest were dropped
    // for that subscriber alone
    assert_eq!(stats.dropped, (total - capacity) as u64);
    assert_eq!(stats.delivered, (total + capacity) as u64);

    drop(slow);
    assert_eq!(broadcaster.subscriber_count(), 0);
}

#[tokio::test]
async fn timeout_yields_keepalive_then_events_resume() {
    let broadcaster = Broadcaster::new(4);
    let mut subscription = broadcaster.subscribe();

    assert_eq!(
        subscription.recv(Duration::from_millis(20)).await,
        RecvOutcome::KeepAlive
    );

    broadcaster.publish(&event(1));
    assert!(matches!(
        subscription.recv(Duration::from_millis(200)).await,
        RecvOutcome::Event(_)
    ));
}

#[tokio::test]
async fn unsubscribe_is_idempotent_across_paths() {
    let broadcaster = Broadcaster::new(4);
    let subscription = broadcaster.subscribe();
    let id = subscription.id();
    assert_eq!(broadcaster.subscriber_count(), 1);

    // Explicit removal, then the handle's own drop-removal
    broadcaster.unsubscribe(id);
    assert_eq!(broadcaster.subscriber_count(), 0);
    subscription.unsubscribe();
    assert_eq!(broadcaster.subscriber_count(), 0);
}

#[tokio::test]
async fn removal_drains_buffered_events_then_closes() {
    let broadcaster = Broadcaster::new(8);
    let mut subscription = broadcaster.subscribe();

    broadcaster.publish(&event(1));
    broadcaster.publish(&event(2));
    broadcaster.unsubscribe(subscription.id());

    // Buffered events are still delivered before the channel reports closed
    for _ in 0..2 {
        assert!(matches!(
            subscription.recv(Duration::from_millis(100)).await,
            RecvOutcome::Event(_)
        ));
    }
    assert_eq!(
        subscription.recv(Duration::from_millis(100)).await,
        RecvOutcome::Closed
    );
}

#[tokio::test]
async fn concurrent_subscribe_publish_unsubscribe() {
    let broadcaster = std::sync::Arc::new(Broadcaster::new(16));

    let mut churn = Vec::new();
    for _ in 0..4 {
        let hub = std::sync::Arc::clone(&broadcaster);
        churn.push(tokio::spawn(async move {
            for i in 0..25u64 {
                let mut subscription = hub.subscribe();
                hub.publish(&event(i));
                // Drain whatever arrived before deregistering
                while let RecvOutcome::Event(_) =
                    subscription.recv(Duration::from_millis(1)).await
                {}
            }
        }));
    }
    for task in churn {
        task.await.expect("churn task");
    }

    assert_eq!(broadcaster.subscriber_count(), 0);
    assert_eq!(broadcaster.stats().published, 100);
}
