//! Chained hash table from clue text to suspect name

use std::num::NonZeroUsize;

use crate::consts::UNKNOWN_SUSPECT;
use crate::errors::DirectoryError;

/// One clue to suspect association, linked to the next entry of its bucket
#[derive(Debug, Clone, PartialEq, Eq)]
struct SuspectEntry {
    clue_key: String,
    suspect_name: String,
    next: Option<Box<SuspectEntry>>,
}

/// Bucket index of `text`: the sum of its bytes modulo `bucket_count`
///
/// `bucket_count` must be non-zero.
pub fn byte_sum_hash(text: &str, bucket_count: usize) -> usize {
    text.bytes()
        .fold(0usize, |sum, byte| sum.wrapping_add(usize::from(byte)))
        % bucket_count
}

/// Maps every known clue to the suspect it points at
///
/// Entries are prepended to their bucket, so when a clue is registered twice
/// the newest association shadows the older one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectDirectory {
    buckets: Vec<Option<Box<SuspectEntry>>>,
    len: usize,
}

impl SuspectDirectory {
    /// Create a directory with `bucket_count` empty buckets
    pub fn new(bucket_count: usize) -> Result<Self, DirectoryError> {
        NonZeroUsize::new(bucket_count)
            .map(Self::with_buckets)
            .ok_or(DirectoryError::NoBuckets)
    }

    pub(crate) fn with_buckets(bucket_count: NonZeroUsize) -> Self {
        Self {
            buckets: vec![None; bucket_count.get()],
            len: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of registered associations, shadowed ones included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn hash(&self, text: &str) -> usize {
        byte_sum_hash(text, self.buckets.len())
    }

    /// Register `clue_key` as pointing at `suspect_name`
    pub fn insert(&mut self, clue_key: &str, suspect_name: &str) {
        let bucket = self.hash(clue_key);
        let next = self.buckets[bucket].take();
        self.buckets[bucket] = Some(Box::new(SuspectEntry {
            clue_key: clue_key.to_string(),
            suspect_name: suspect_name.to_string(),
            next,
        }));
        self.len += 1;
        tracing::debug!(clue = clue_key, suspect = suspect_name, bucket, "suspect registered");
    }

    /// Suspect for `clue_key`, or `None` if the clue is not registered
    pub fn resolve(&self, clue_key: &str) -> Option<&str> {
        let mut entry = self.buckets[self.hash(clue_key)].as_deref();
        while let Some(current) = entry {
            if current.clue_key == clue_key {
                return Some(&current.suspect_name);
            }
            entry = current.next.as_deref();
        }
        None
    }

    /// Suspect for `clue_key`, or [`UNKNOWN_SUSPECT`] if the clue is not registered
    pub fn lookup(&self, clue_key: &str) -> &str {
        self.resolve(clue_key).unwrap_or(UNKNOWN_SUSPECT)
    }

    /// Length of the chain in `bucket`; out of range buckets are empty
    pub fn chain_len(&self, bucket: usize) -> usize {
        let mut len = 0;
        let mut entry = self.buckets.get(bucket).and_then(|head| head.as_deref());
        while let Some(current) = entry {
            len += 1;
            entry = current.next.as_deref();
        }
        len
    }

    /// All `(clue, suspect)` pairs, bucket by bucket, newest first within a bucket
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            buckets: self.buckets.iter(),
            entry: None,
        }
    }

    /// Distinct suspect names, sorted
    pub fn suspects(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries().map(|(_, suspect)| suspect).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Drop every chain, returning how many entries were released
    pub fn release(self) -> usize {
        let mut released = 0;
        for head in self.buckets {
            let mut entry = head;
            while let Some(current) = entry {
                entry = current.next;
                released += 1;
            }
        }
        tracing::debug!(released, "suspect directory released");
        released
    }
}

/// Iterator over the associations of a [`SuspectDirectory`]
pub struct Entries<'a> {
    buckets: std::slice::Iter<'a, Option<Box<SuspectEntry>>>,
    entry: Option<&'a SuspectEntry>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = self.entry {
                self.entry = current.next.as_deref();
                return Some((&current.clue_key, &current.suspect_name));
            }
            self.entry = self.buckets.next()?.as_deref();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_buckets_rejected() {
        assert_eq!(SuspectDirectory::new(0), Err(DirectoryError::NoBuckets));
    }

    #[test]
    fn test_byte_sum_hash() {
        // 'a' + 'b' = 97 + 98 = 195
        assert_eq!(byte_sum_hash("ab", 1000), 195);
        assert_eq!(byte_sum_hash("ab", 13), 195 % 13);
        assert_eq!(byte_sum_hash("", 13), 0);
        // Anagrams share a bucket
        assert_eq!(byte_sum_hash("ab", 7), byte_sum_hash("ba", 7));
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut directory = SuspectDirectory::new(5).unwrap();
        directory.insert("muddy boots", "Gardener");
        directory.insert("lipstick", "Madame Sinclair");

        assert_eq!(directory.lookup("muddy boots"), "Gardener");
        assert_eq!(directory.lookup("lipstick"), "Madame Sinclair");
        assert_eq!(directory.lookup("Muddy boots"), UNKNOWN_SUSPECT);
        assert_eq!(directory.resolve("nothing"), None);
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_collisions_chain() {
        // One bucket forces every entry into the same chain
        let mut directory = SuspectDirectory::new(1).unwrap();
        directory.insert("a", "Ann");
        directory.insert("b", "Bob");
        directory.insert("c", "Cid");

        assert_eq!(directory.chain_len(0), 3);
        assert_eq!(directory.lookup("a"), "Ann");
        assert_eq!(directory.lookup("b"), "Bob");
        assert_eq!(directory.lookup("c"), "Cid");

        let entries: Vec<(&str, &str)> = directory.entries().collect();
        assert_eq!(entries, vec![("c", "Cid"), ("b", "Bob"), ("a", "Ann")]);
    }

    #[test]
    fn test_newest_entry_shadows() {
        let mut directory = SuspectDirectory::new(3).unwrap();
        directory.insert("key", "Butler");
        directory.insert("key", "Cook");

        assert_eq!(directory.lookup("key"), "Cook");
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.chain_len(directory.hash("key")), 2);
    }

    #[test]
    fn test_chain_len_out_of_range() {
        let directory = SuspectDirectory::new(3).unwrap();
        assert_eq!(directory.chain_len(99), 0);
        assert!(directory.is_empty());
    }

    #[test]
    fn test_suspects_sorted_and_distinct() {
        let mut directory = SuspectDirectory::new(4).unwrap();
        directory.insert("a", "Zed");
        directory.insert("b", "Amy");
        directory.insert("c", "Zed");
        assert_eq!(directory.suspects(), vec!["Amy", "Zed"]);
    }

    #[test]
    fn test_release() {
        let mut directory = SuspectDirectory::new(2).unwrap();
        directory.insert("a", "Ann");
        directory.insert("b", "Bob");
        directory.insert("c", "Cid");
        assert_eq!(directory.release(), 3);
        assert_eq!(SuspectDirectory::new(2).unwrap().release(), 0);
    }
}
