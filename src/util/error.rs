use thiserror::Error;

/// Reasons a call or an in-cab selection could not be turned into a target floor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("no elevators available to serve the call")]
    NoElevatorsAvailable,

    #[error("invalid elevator id {id} (fleet has {fleet_size} elevators)")]
    InvalidElevatorId { id: i32, fleet_size: usize },

    #[error("floor {floor} is outside [0, {max_floor}]")]
    FloorOutOfRange { floor: i32, max_floor: i32 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
