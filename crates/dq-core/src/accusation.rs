//! Accusations
//!
//! An accusation counts how many collected clues the suspect directory ties
//! to the accused and turns that count into a verdict.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::clues::ClueIndex;
use crate::consts::CONFIRMING_CLUES;
use crate::errors::AccusationError;
use crate::suspects::SuspectDirectory;

/// How well the collected clues support an accusation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// No collected clue points at the suspect
    Unsupported,
    /// A single clue points at the suspect
    Weak,
    /// At least [`CONFIRMING_CLUES`] clues point at the suspect
    Confirmed,
}

impl Verdict {
    pub fn from_tally(count: usize) -> Self {
        match count {
            0 => Verdict::Unsupported,
            n if n < CONFIRMING_CLUES => Verdict::Weak,
            _ => Verdict::Confirmed,
        }
    }
}

/// A finished accusation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accusation {
    pub suspect: String,
    pub tally: usize,
    pub verdict: Verdict,
    /// The clues that point at the suspect, sorted
    pub evidence: Vec<String>,
}

/// Count the collected clues whose suspect is exactly `suspect`
pub fn tally(directory: &SuspectDirectory, clues: &ClueIndex, suspect: &str) -> usize {
    let mut count = 0;
    clues.traverse_in_order(|clue| {
        if directory.lookup(clue) == suspect {
            count += 1;
        }
    });
    count
}

/// Collected clues whose suspect is exactly `suspect`, sorted
pub fn evidence_for(
    directory: &SuspectDirectory,
    clues: &ClueIndex,
    suspect: &str,
) -> Vec<String> {
    clues
        .iter()
        .filter(|clue| directory.lookup(clue) == suspect)
        .map(str::to_string)
        .collect()
}

/// Accuse `name` using the collected clues
///
/// Surrounding whitespace is ignored. A blank name is rejected before any
/// tallying happens.
pub fn accuse(
    directory: &SuspectDirectory,
    clues: &ClueIndex,
    name: &str,
) -> Result<Accusation, AccusationError> {
    let suspect = name.trim();
    if suspect.is_empty() {
        tracing::warn!("blank accusation rejected");
        return Err(AccusationError::BlankName);
    }

    let count = tally(directory, clues, suspect);
    let verdict = Verdict::from_tally(count);
    tracing::info!(suspect, tally = count, %verdict, "accusation made");

    Ok(Accusation {
        suspect: suspect.to_string(),
        tally: count,
        verdict,
        evidence: evidence_for(directory, clues, suspect),
    })
}
