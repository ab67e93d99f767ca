//! Case report
//!
//! Summary of a finished game, shown to the player and optionally written out
//! as JSON.

use serde::{Deserialize, Serialize};

use crate::accusation::Accusation;
use crate::clues::ClueIndex;
use crate::explore::{ExploreState, Explorer, FinishReason};
use crate::suspects::SuspectDirectory;

/// A collected clue and the suspect it points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    pub clue: String,
    pub suspect: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Rooms entered, in order
    pub trail: Vec<String>,
    pub finish: Option<FinishReason>,
    /// Collected clues, sorted
    pub clues: Vec<String>,
    /// Suspect of every collected clue, in clue order
    pub associations: Vec<Association>,
    pub accusation: Option<Accusation>,
}

impl CaseReport {
    pub fn new(
        trail: Vec<String>,
        finish: Option<FinishReason>,
        clues: &ClueIndex,
        directory: &SuspectDirectory,
    ) -> Self {
        let associations = clues
            .iter()
            .map(|clue| Association {
                clue: clue.to_string(),
                suspect: directory.lookup(clue).to_string(),
            })
            .collect();

        Self {
            trail,
            finish,
            clues: clues.to_vec(),
            associations,
            accusation: None,
        }
    }

    /// Report on the exploration `explorer` has made so far
    pub fn from_explorer(explorer: &Explorer<'_>, directory: &SuspectDirectory) -> Self {
        let finish = match explorer.state() {
            ExploreState::Finished(reason) => Some(reason),
            ExploreState::AtRoom(_) => None,
        };
        let trail = explorer.trail().iter().map(|name| name.to_string()).collect();
        Self::new(trail, finish, explorer.clues(), directory)
    }

    pub fn with_accusation(mut self, accusation: Accusation) -> Self {
        self.accusation = Some(accusation);
        self
    }
}
