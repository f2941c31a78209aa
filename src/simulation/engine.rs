use chrono::Utc;
use crossbeam_channel as cbc;
use std::thread;
use std::time;

use crate::fsm::elevatorfsm::{self, Transition};
use crate::simulation::fleet::SharedFleet;
use crate::simulation::snapshot::{FleetSnapshot, SnapshotBroadcaster};

/// Drives the fleet forward one tick at a time and publishes what it looks like afterwards.
pub struct Engine {
    fleet: SharedFleet,
    broadcaster: SnapshotBroadcaster,
    tick_period: time::Duration,
    ticks: u64,
}

impl Engine {
    pub fn new(fleet: SharedFleet, broadcaster: SnapshotBroadcaster, tick_period: time::Duration) -> Engine {
        Engine {
            fleet,
            broadcaster,
            tick_period,
            ticks: 0,
        }
    }

    pub fn fleet(&self) -> &SharedFleet {
        &self.fleet
    }

    pub fn broadcaster(&self) -> &SnapshotBroadcaster {
        &self.broadcaster
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Steps every car once and publishes the result.
    ///
    /// The whole pass, publication included, happens under the fleet lock, so a
    /// call can never be assigned halfway through a tick and every snapshot
    /// reflects exactly one completed tick.
    pub fn tick(&mut self) -> FleetSnapshot {
        self.ticks += 1;
        let tick = self.ticks;
        let max_floor = self.fleet.max_floor();
        let broadcaster = &self.broadcaster;

        self.fleet.with_elevators(|elevators| {
            for elev in elevators.iter_mut() {
                match elevatorfsm::on_tick(elev, max_floor) {
                    Transition::Arrived { floor } => {
                        log::info!("Elevator {} stopped at target floor {}", elev.id, floor)
                    }
                    Transition::Departed { direction } => {
                        log::debug!("Elevator {} departing {:?} from floor {}", elev.id, direction, elev.current_floor)
                    }
                    Transition::DoorsHeld { floor } => {
                        log::debug!("Elevator {} holding doors at floor {}", elev.id, floor)
                    }
                    Transition::Idled => log::debug!("Elevator {} is idle at floor {}", elev.id, elev.current_floor),
                    Transition::Moved { .. } | Transition::Unchanged => {}
                }
            }
            let snapshot = FleetSnapshot {
                tick,
                taken_at: Utc::now(),
                elevators: elevators.to_vec(),
            };
            broadcaster.publish(&snapshot);
            snapshot
        })
    }

    /// Runs the tick loop on its own thread, one tick per `tick_period`.
    pub fn spawn(mut self) -> EngineHandle {
        let (stop_tx, stop_rx) = cbc::bounded::<()>(1);
        let ticker = cbc::tick(self.tick_period);
        log::info!(
            "Starting simulation of {} elevators, one tick every {:?}",
            self.fleet.len(),
            self.tick_period
        );

        let handle = thread::spawn(move || {
            loop {
                cbc::select! {
                    recv(ticker) -> _ => {
                        self.tick();
                    },
                    // Also fires when the handle is dropped.
                    recv(stop_rx) -> _ => break,
                }
            }
            log::info!("Simulation stopped after {} ticks", self.ticks);
            self.ticks
        });

        EngineHandle { stop_tx, handle }
    }
}

pub struct EngineHandle {
    stop_tx: cbc::Sender<()>,
    handle: thread::JoinHandle<u64>,
}

impl EngineHandle {
    /// Stops the tick loop and waits for it. Returns the number of ticks that ran.
    pub fn stop(self) -> thread::Result<u64> {
        // Fails only if the loop is already gone, in which case join returns right away.
        let _ = self.stop_tx.send(());
        self.handle.join()
    }
}
