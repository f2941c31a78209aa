pub const NUM_ELEVATORS: usize = 3;
pub const NUM_FLOORS: i32 = 10;

pub const TICK_PERIOD_MS: u64 = 1000;

pub const DIRECTION_CHANGE_PENALTY: i32 = 100;
pub const AWAY_PENALTY: i32 = 50;

pub const REQUEST_PORT: u16 = 19839;
pub const SNAPSHOT_PORT: u16 = 19847;
pub const SNAPSHOT_BURST: usize = 1;
