//! Exploration of the mansion
//!
//! The explorer is a small state machine: it stands in a room until it is told
//! to move or quit, and every room it enters has its clue added to the clue
//! index.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::clues::ClueIndex;
use crate::mansion::{Mansion, Room, Side};
use crate::options::StopPolicy;

/// A navigation command from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Command {
    Go(Side),
    Quit,
}

/// Why an exploration ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FinishReason {
    /// The player asked to stop
    Quit,
    /// The explorer walked into a room with no exits
    DeadEnd,
}

/// Where the explorer currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreState<'a> {
    AtRoom(&'a Room),
    Finished(FinishReason),
}

/// What a single command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome<'a> {
    /// Moved into `room`; `new_clue` is set when its clue was not collected before
    Entered { room: &'a Room, new_clue: bool },
    /// There is no room on that side; nothing changed
    NoRoom(Side),
    /// The exploration is over
    Finished(FinishReason),
}

/// Walks a mansion and collects the clues of every room it enters
#[derive(Debug)]
pub struct Explorer<'a> {
    current: &'a Room,
    finished: Option<FinishReason>,
    policy: StopPolicy,
    clues: ClueIndex,
    trail: Vec<&'a str>,
}

impl<'a> Explorer<'a> {
    /// Start at the entrance of `mansion`, collecting its clue
    pub fn new(mansion: &'a Mansion, policy: StopPolicy) -> Self {
        Self::with_clues(mansion, policy, ClueIndex::new())
    }

    /// Start at the entrance, adding to clues collected earlier
    pub fn with_clues(mansion: &'a Mansion, policy: StopPolicy, clues: ClueIndex) -> Self {
        let mut explorer = Self {
            current: mansion.root(),
            finished: None,
            policy,
            clues,
            trail: Vec::new(),
        };
        explorer.enter(mansion.root());
        explorer
    }

    pub fn state(&self) -> ExploreState<'a> {
        match self.finished {
            Some(reason) => ExploreState::Finished(reason),
            None => ExploreState::AtRoom(self.current),
        }
    }

    /// The room the explorer is in, or stopped in
    pub fn current_room(&self) -> &'a Room {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    pub fn policy(&self) -> StopPolicy {
        self.policy
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    /// Names of the rooms entered so far, in order
    pub fn trail(&self) -> &[&'a str] {
        &self.trail
    }

    /// Number of successful moves between rooms
    pub fn moves(&self) -> usize {
        self.trail.len().saturating_sub(1)
    }

    /// Apply one command
    pub fn step(&mut self, command: Command) -> StepOutcome<'a> {
        if let Some(reason) = self.finished {
            return StepOutcome::Finished(reason);
        }

        match command {
            Command::Quit => {
                tracing::info!(room = self.current.name(), "exploration quit");
                self.finished = Some(FinishReason::Quit);
                StepOutcome::Finished(FinishReason::Quit)
            }
            Command::Go(side) => match self.current.child(side) {
                Some(room) => {
                    let new_clue = self.enter(room);
                    StepOutcome::Entered { room, new_clue }
                }
                None => {
                    tracing::debug!(room = self.current.name(), %side, "no room that way");
                    StepOutcome::NoRoom(side)
                }
            },
        }
    }

    /// Finish the exploration and hand back the collected clues
    pub fn into_clues(self) -> ClueIndex {
        self.clues
    }

    fn enter(&mut self, room: &'a Room) -> bool {
        self.current = room;
        self.trail.push(room.name());
        tracing::debug!(room = room.name(), "entered room");

        let new_clue = room.clue().is_some_and(|clue| self.clues.insert(clue));

        if room.is_dead_end() && self.policy == StopPolicy::AtDeadEnd {
            tracing::info!(room = room.name(), "dead end reached, exploration over");
            self.finished = Some(FinishReason::DeadEnd);
        }
        new_clue
    }
}
