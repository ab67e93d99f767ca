//! Error types for the game core
//!
//! Only construction of the suspect directory and the accusation input can
//! fail. Moves into missing rooms and unknown clues are ordinary outcomes and
//! never surface here.

use thiserror::Error;

/// Errors raised while building a suspect directory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Suspect directory needs at least one bucket")]
    NoBuckets,
}

/// Errors raised while reading an accusation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccusationError {
    #[error("No suspect named, accusation aborted")]
    BlankName,
}

/// Any error the game core can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Accusation(#[from] AccusationError),
}
