//! Suspect directory
//!
//! Maps each clue of the mansion to the suspect it incriminates.

mod directory;

use std::num::NonZeroUsize;

pub use directory::{Entries, SuspectDirectory, byte_sum_hash};

use crate::consts::SUSPECT_BUCKETS;
use crate::errors::DirectoryError;

const STANDARD_BUCKETS: NonZeroUsize = match NonZeroUsize::new(SUSPECT_BUCKETS) {
    Some(count) => count,
    None => panic!("SUSPECT_BUCKETS must be non-zero"),
};

/// The clue to suspect associations of the standard case
pub const CASEBOOK: [(&str, &str); 6] = [
    ("mud footprints by the front door", "Gardener"),
    ("torn diary page", "Housekeeper"),
    ("broken glass with a lipstick mark", "Madame Sinclair"),
    ("sealed envelope with red wax", "Housekeeper"),
    ("old key dropped among the flowers", "Gardener"),
    ("torn portrait of an unknown woman", "Madame Sinclair"),
];

impl SuspectDirectory {
    /// Directory of the standard case with the default bucket count
    pub fn standard() -> Self {
        let mut directory = Self::with_buckets(STANDARD_BUCKETS);
        directory.register_casebook();
        directory
    }

    /// Directory of the standard case spread over `bucket_count` buckets
    pub fn standard_with_buckets(bucket_count: usize) -> Result<Self, DirectoryError> {
        let mut directory = Self::new(bucket_count)?;
        directory.register_casebook();
        Ok(directory)
    }

    fn register_casebook(&mut self) {
        for (clue, suspect) in CASEBOOK {
            self.insert(clue, suspect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::UNKNOWN_SUSPECT;
    use crate::mansion::Mansion;

    #[test]
    fn test_standard_directory() {
        let directory = SuspectDirectory::standard();
        assert_eq!(directory.bucket_count(), SUSPECT_BUCKETS);
        assert_eq!(directory.len(), 6);
        assert_eq!(directory.lookup("torn diary page"), "Housekeeper");
        assert_eq!(directory.lookup("old key dropped among the flowers"), "Gardener");
        assert_eq!(directory.lookup("a clean floor"), UNKNOWN_SUSPECT);
        assert_eq!(
            directory.suspects(),
            vec!["Gardener", "Housekeeper", "Madame Sinclair"]
        );
    }

    #[test]
    fn test_every_mansion_clue_is_registered() {
        let directory = SuspectDirectory::standard();
        for clue in Mansion::standard().clues() {
            assert!(directory.resolve(clue).is_some(), "unregistered clue: {clue}");
        }
    }

    #[test]
    fn test_bucket_count_does_not_change_answers() {
        let wide = SuspectDirectory::standard();
        let narrow = SuspectDirectory::standard_with_buckets(1).unwrap();
        assert_eq!(narrow.chain_len(0), CASEBOOK.len());
        for (clue, suspect) in CASEBOOK {
            assert_eq!(wide.lookup(clue), suspect);
            assert_eq!(narrow.lookup(clue), suspect);
        }
        assert_eq!(
            SuspectDirectory::standard_with_buckets(0),
            Err(DirectoryError::NoBuckets)
        );
    }
}
