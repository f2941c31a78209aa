use chrono::{DateTime, Utc};
use crossbeam_channel as cbc;
use parking_lot::Mutex;
use serde;
use std::sync::Arc;

use crate::elevator::elevator_info::ElevatorInfo;

/// The whole fleet as it looked right after one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSnapshot {
    pub tick: u64,
    pub taken_at: DateTime<Utc>,
    pub elevators: Vec<ElevatorInfo>,
}

/// Fans every published snapshot out to all current subscribers.
///
/// Subscribers get an unbounded channel, so publishing never blocks the tick.
/// A subscriber that dropped its receiver is forgotten on the next publish.
#[derive(Clone, Debug, Default)]
pub struct SnapshotBroadcaster {
    subscribers: Arc<Mutex<Vec<cbc::Sender<FleetSnapshot>>>>,
}

impl SnapshotBroadcaster {
    pub fn new() -> SnapshotBroadcaster {
        SnapshotBroadcaster::default()
    }

    pub fn subscribe(&self) -> cbc::Receiver<FleetSnapshot> {
        let (tx, rx) = cbc::unbounded::<FleetSnapshot>();
        self.subscribers.lock().push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    pub fn publish(&self, snapshot: &FleetSnapshot) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
        log::debug!(
            "Published snapshot for tick {} to {} subscribers",
            snapshot.tick,
            subscribers.len()
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn snapshot(tick: u64) -> FleetSnapshot {
        FleetSnapshot {
            tick,
            taken_at: Utc::now(),
            elevators: vec![ElevatorInfo::new(0, 0)],
        }
    }

    #[test]
    fn it_delivers_every_snapshot_to_every_subscriber() {
        let broadcaster = SnapshotBroadcaster::new();
        let rx_a = broadcaster.subscribe();
        let rx_b = broadcaster.subscribe();
        broadcaster.publish(&snapshot(1));
        broadcaster.publish(&snapshot(2));
        for rx in &[rx_a, rx_b] {
            assert_eq!(rx.recv().unwrap().tick, 1);
            assert_eq!(rx.recv().unwrap().tick, 2);
            assert!(rx.is_empty());
        }
    }

    #[test]
    fn it_forgets_subscribers_that_went_away() {
        let broadcaster = SnapshotBroadcaster::new();
        let rx_kept = broadcaster.subscribe();
        drop(broadcaster.subscribe());
        assert_eq!(broadcaster.subscriber_count(), 2);
        broadcaster.publish(&snapshot(1));
        assert_eq!(broadcaster.subscriber_count(), 1);
        assert_eq!(rx_kept.recv().unwrap().tick, 1);
    }

    #[test]
    fn it_publishes_without_subscribers() {
        let broadcaster = SnapshotBroadcaster::new();
        broadcaster.publish(&snapshot(1));
        assert_eq!(broadcaster.subscriber_count(), 0);
    }

    #[test]
    fn it_serializes_elevators_in_observer_format() {
        let json = serde_json::to_value(&snapshot(7)).unwrap();
        assert_eq!(json["tick"], 7);
        assert_eq!(json["elevators"][0]["currentFloor"], 0);
        assert_eq!(json["elevators"][0]["status"], "IDLE");
        assert!(json["takenAt"].is_string());
    }
}
