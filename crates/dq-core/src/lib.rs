//! dq-core: Core game logic for Detective Quest
//!
//! This crate contains all game logic with no terminal I/O.
//! It is designed to be pure and testable.
//!
//! The game is built from three structures:
//! - the mansion, a fixed binary tree of rooms ([`mansion`])
//! - the clue index, a binary search tree of collected clues ([`clues`])
//! - the suspect directory, a chained hash table from clue to suspect ([`suspects`])
//!
//! [`explore`] walks the mansion and fills the clue index, and
//! [`accusation`] tallies the collected clues against the directory.

pub mod accusation;
pub mod clues;
pub mod errors;
pub mod explore;
pub mod mansion;
pub mod options;
pub mod report;
pub mod suspects;

mod consts;

pub use accusation::{Accusation, Verdict, accuse, evidence_for, tally};
pub use clues::ClueIndex;
pub use consts::*;
pub use errors::{AccusationError, DirectoryError, GameError};
pub use explore::{Command, ExploreState, Explorer, FinishReason, StepOutcome};
pub use mansion::{Mansion, Room, Side};
pub use options::{GameOptions, StopPolicy};
pub use report::{Association, CaseReport};
pub use suspects::SuspectDirectory;
