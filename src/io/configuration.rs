//! Algorithm constants and runtime configuration defaults

/// Number of triangles covered by a single tile
pub const TILE_SIZE: usize = 3;

// Degree <= 3 bounds inclusion pairs to 3 and exclusion chains to 6
/// Maximum forcing candidates a single pivot can produce
pub const MAX_PLACEMENTS_PER_PIVOT: usize = 9;

/// Search nodes between progress display updates
pub const PROGRESS_UPDATE_INTERVAL: u64 = 4096;
