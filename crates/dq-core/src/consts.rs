//! Game constants

/// Number of buckets in the suspect directory
pub const SUSPECT_BUCKETS: usize = 13;

/// Name returned by the suspect directory for clues it does not know
pub const UNKNOWN_SUSPECT: &str = "unknown";

/// Minimum number of matching clues for a confirmed accusation
pub const CONFIRMING_CLUES: usize = 2;

/// Name of the room where every exploration starts
pub const ENTRANCE: &str = "Entrance Hall";
