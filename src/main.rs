use std::path::PathBuf;
use std::thread::spawn;

use clap::Parser;
use crossbeam_channel as cbc;
use rand::Rng;

use elevator::elevator::elevator_info::{CallDirection, ElevatorInfo};
use elevator::network::{bcast, request};
use elevator::network::request::Request;
use elevator::order_assigner::cost_function::Penalties;
use elevator::order_assigner::order_assigner::Dispatcher;
use elevator::simulation::engine::Engine;
use elevator::simulation::fleet::SharedFleet;
use elevator::simulation::snapshot::{FleetSnapshot, SnapshotBroadcaster};
use elevator::util::config::SimConfig;

#[derive(Parser)]
#[command(name = "elevator-bank")]
#[command(about = "Simulates a bank of elevators dispatched with the LOOK policy")]
struct Cli {
    /// JSON file with simulation settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of elevators in the fleet
    #[arg(long)]
    elevators: Option<usize>,

    /// Number of floors, numbered from 0
    #[arg(long)]
    floors: Option<i32>,

    /// Milliseconds between simulation ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Cost added when a car is committed to the opposite direction of a call
    #[arg(long)]
    direction_change_penalty: Option<i32>,

    /// Cost added when that car is also moving away from the call
    #[arg(long)]
    away_penalty: Option<i32>,

    /// UDP port to receive JSON requests on
    #[arg(long)]
    request_port: Option<u16>,

    /// UDP port to broadcast fleet state on
    #[arg(long)]
    snapshot_port: Option<u16>,

    /// Run without UDP request intake and state broadcast
    #[arg(long)]
    no_network: bool,

    /// Generate random calls and selections
    #[arg(long)]
    demo_traffic: bool,

    /// Stop after this many ticks instead of running forever
    #[arg(long)]
    ticks: Option<u64>,
}

impl Cli {
    fn to_config(&self) -> anyhow::Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_file(path)?,
            None => SimConfig::default(),
        };
        if let Some(v) = self.elevators {
            config.num_elevators = v;
        }
        if let Some(v) = self.floors {
            config.num_floors = v;
        }
        if let Some(v) = self.tick_ms {
            config.tick_period_ms = v;
        }
        if let Some(v) = self.direction_change_penalty {
            config.direction_change_penalty = v;
        }
        if let Some(v) = self.away_penalty {
            config.away_penalty = v;
        }
        if let Some(v) = self.request_port {
            config.request_port = v;
        }
        if let Some(v) = self.snapshot_port {
            config.snapshot_port = v;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.to_config()?;
    log::info!("Configuration: {:?}", config);

    let fleet = SharedFleet::new(config.num_elevators, config.max_floor());
    let broadcaster = SnapshotBroadcaster::new();
    let dispatcher = Dispatcher::new(
        fleet.clone(),
        Penalties {
            direction_change: config.direction_change_penalty,
            away: config.away_penalty,
        },
    );

    let (request_tx, request_rx) = cbc::unbounded::<Request>();
    spawn(move || request::request_handler(dispatcher, request_rx));

    if !cli.no_network {
        {
            let request_tx = request_tx.clone();
            let port = config.request_port;
            spawn(move || {
                if let Err(e) = bcast::rx(port, request_tx) {
                    log::error!("Request intake on port {} stopped: {}", port, e);
                }
            });
        }

        // Observers get the bare elevator array, one datagram per tick.
        let snapshots = broadcaster.subscribe();
        let (state_tx, state_rx) = cbc::unbounded::<Vec<ElevatorInfo>>();
        spawn(move || {
            for snapshot in snapshots.iter() {
                if state_tx.send(snapshot.elevators).is_err() {
                    break;
                }
            }
        });
        let port = config.snapshot_port;
        let burst = config.snapshot_burst;
        spawn(move || {
            if let Err(e) = bcast::tx(port, state_rx, burst) {
                log::error!("State broadcast on port {} stopped: {}", port, e);
            }
        });
    }

    if cli.demo_traffic {
        let request_tx = request_tx.clone();
        let config = config.clone();
        spawn(move || demo_traffic(&config, request_tx));
    }
    drop(request_tx);

    let summary = broadcaster.subscribe();
    let engine = Engine::new(fleet, broadcaster, config.tick_period());
    let handle = engine.spawn();

    for snapshot in summary.iter() {
        log::info!("{}", describe(&snapshot));
        if cli.ticks.map_or(false, |limit| snapshot.tick >= limit) {
            break;
        }
    }

    match handle.stop() {
        Ok(ticks) => log::info!("Ran {} ticks", ticks),
        Err(_) => anyhow::bail!("simulation thread panicked"),
    }
    Ok(())
}

/// Random hall calls and cab selections, roughly one every other tick.
fn demo_traffic(config: &SimConfig, request_tx: cbc::Sender<Request>) {
    let ticker = cbc::tick(config.tick_period());
    let mut rng = rand::thread_rng();
    for _ in ticker.iter() {
        if !rng.gen_bool(0.5) {
            continue;
        }
        let floor = rng.gen_range(0, config.num_floors);
        let request = if rng.gen() {
            let direction = if floor == 0 {
                CallDirection::Up
            } else if floor == config.max_floor() || rng.gen() {
                CallDirection::Down
            } else {
                CallDirection::Up
            };
            Request::CallElevator { floor, direction }
        } else {
            let elevator_id = rng.gen_range(0, config.num_elevators as i32);
            Request::SelectFloor { elevator_id, floor }
        };
        if request_tx.send(request).is_err() {
            return;
        }
    }
}

fn describe(snapshot: &FleetSnapshot) -> String {
    let cars: Vec<String> = snapshot
        .elevators
        .iter()
        .map(|e| {
            format!(
                "#{} floor {} {:?}/{:?} {:?}",
                e.id,
                e.current_floor,
                e.status,
                e.direction,
                e.target_floors.iter().collect::<Vec<_>>()
            )
        })
        .collect();
    format!("tick {}: {}", snapshot.tick, cars.join(" | "))
}
