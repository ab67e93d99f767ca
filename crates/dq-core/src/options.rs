//! Game options
//!
//! Set once at startup from the command line and read by the explorer and the
//! front end.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::consts::SUSPECT_BUCKETS;

/// When an exploration ends on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StopPolicy {
    /// Entering a room with no exits ends the exploration
    #[default]
    AtDeadEnd,
    /// Only an explicit quit ends the exploration
    ExplicitQuit,
}

/// Startup options for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    pub stop_policy: StopPolicy,

    /// Clear the screen before each room is shown
    pub clear_screen: bool,

    /// Bucket count of the suspect directory
    pub bucket_count: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            stop_policy: StopPolicy::default(),
            clear_screen: true,
            bucket_count: SUSPECT_BUCKETS,
        }
    }
}

impl GameOptions {
    pub fn with_stop_policy(mut self, stop_policy: StopPolicy) -> Self {
        self.stop_policy = stop_policy;
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }
}
