/// Sentinel for an absent connection or colony id
pub const NO_COLONY: u32 = u32::MAX;

/// Default number of moves before an ant settles
pub const DEFAULT_MOVE_LIMIT: u32 = 10_000;
