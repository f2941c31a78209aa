//! Tunables for the simulation, with defaults taken from `util::constants`.
use serde;
use std::path::Path;
use std::time;

use crate::util::constants as setting;
use crate::util::error::ConfigError;

/// Largest accepted penalty. Keeps every cost comparison well inside `i32`.
pub const MAX_PENALTY: i32 = i32::MAX / 4;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimConfig {
    pub num_elevators: usize,
    pub num_floors: i32,
    pub tick_period_ms: u64,
    pub direction_change_penalty: i32,
    pub away_penalty: i32,
    pub request_port: u16,
    pub snapshot_port: u16,
    pub snapshot_burst: usize,
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            num_elevators: setting::NUM_ELEVATORS,
            num_floors: setting::NUM_FLOORS,
            tick_period_ms: setting::TICK_PERIOD_MS,
            direction_change_penalty: setting::DIRECTION_CHANGE_PENALTY,
            away_penalty: setting::AWAY_PENALTY,
            request_port: setting::REQUEST_PORT,
            snapshot_port: setting::SNAPSHOT_PORT,
            snapshot_burst: setting::SNAPSHOT_BURST,
        }
    }
}

impl SimConfig {
    /// Reads a JSON config file. Keys that are left out keep their default value.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SimConfig, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_elevators == 0 {
            return Err(ConfigError::Invalid("fleet needs at least one elevator".to_string()));
        }
        if self.num_floors < 2 {
            return Err(ConfigError::Invalid(format!(
                "need at least two floors, got {}",
                self.num_floors
            )));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::Invalid("tick period must be at least 1 ms".to_string()));
        }
        if self.direction_change_penalty < 0 || self.away_penalty < 0 {
            return Err(ConfigError::Invalid("penalties can not be negative".to_string()));
        }
        if self.direction_change_penalty > MAX_PENALTY || self.away_penalty > MAX_PENALTY {
            return Err(ConfigError::Invalid(format!(
                "penalties can not exceed {}",
                MAX_PENALTY
            )));
        }
        if self.snapshot_burst == 0 {
            return Err(ConfigError::Invalid("snapshot burst must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Highest reachable floor. Floors are numbered `0..=max_floor`.
    pub fn max_floor(&self) -> i32 {
        self.num_floors - 1
    }

    pub fn tick_period(&self) -> time::Duration {
        time::Duration::from_millis(self.tick_period_ms)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_defaults_to_three_elevators_and_ten_floors() {
        let config = SimConfig::default();
        assert_eq!(config.num_elevators, 3);
        assert_eq!(config.max_floor(), 9);
        assert_eq!(config.tick_period(), time::Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn it_fills_missing_keys_with_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{"numElevators": 5, "awayPenalty": 10}"#).unwrap();
        assert_eq!(config.num_elevators, 5);
        assert_eq!(config.away_penalty, 10);
        assert_eq!(config.direction_change_penalty, setting::DIRECTION_CHANGE_PENALTY);
        assert_eq!(config.num_floors, setting::NUM_FLOORS);
    }

    #[test]
    fn it_rejects_an_empty_fleet() {
        let config = SimConfig { num_elevators: 0, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn it_rejects_a_single_floor_building() {
        let config = SimConfig { num_floors: 1, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn it_rejects_a_zero_tick_period() {
        let config = SimConfig { tick_period_ms: 0, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn it_rejects_penalties_that_could_overflow_the_cost() {
        let config = SimConfig { direction_change_penalty: i32::MAX, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        let config = SimConfig { away_penalty: MAX_PENALTY + 1, ..SimConfig::default() };
        assert!(config.validate().is_err());
        let config = SimConfig { away_penalty: MAX_PENALTY, ..SimConfig::default() };
        assert!(config.validate().is_ok());
    }
}
