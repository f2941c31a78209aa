pub mod elevator {
    pub mod elevator_info;
    pub mod target_floors;
}

pub mod fsm {
    pub mod direction_decider;
    pub mod elevatorfsm;
}

pub mod order_assigner {
    pub mod cost_function;
    pub mod order_assigner;
}

pub mod simulation {
    pub mod engine;
    pub mod fleet;
    pub mod snapshot;
}

pub mod network {
    pub mod bcast;
    pub mod request;
    pub mod sock;
}

pub mod util {
    pub mod config;
    pub mod constants;
    pub mod error;
}
