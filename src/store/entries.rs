use tracing::debug;

use crate::models::{
    normalize_name, Category, Entry, EntryCandidate, MAX_COMMENT_CHARS, MAX_RATING, UNSET_RATING,
};

use super::rejection::RejectionReason;

/// Owner of every admitted entry for the running session. The collection is
/// append-only and keeps insertion order, which the grouped view relies on.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a candidate and append it on success.
    ///
    /// Checks run in a fixed order and the first failure wins: blank name or
    /// unset rating, then duplicate (name, category), then comment length.
    /// Nothing is stored unless every check passes.
    pub fn try_add(&mut self, candidate: EntryCandidate) -> Result<Entry, RejectionReason> {
        let EntryCandidate {
            name,
            rating,
            comment,
            category,
        } = candidate;

        let name = name.trim();
        if name.is_empty() || rating == UNSET_RATING || rating > MAX_RATING {
            debug!(%category, rating, "rejected incomplete entry");
            return Err(RejectionReason::Incomplete);
        }

        if self.contains(name, category) {
            debug!(%category, "rejected duplicate entry");
            return Err(RejectionReason::Duplicate { category });
        }

        if comment.chars().count() > MAX_COMMENT_CHARS {
            debug!(%category, "rejected entry with oversized comment");
            return Err(RejectionReason::CommentTooLong);
        }

        let entry = Entry::new(name.to_string(), rating, comment, category);
        debug!(id = %entry.id(), %category, rating, "admitted entry");
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Whether an entry with the same normalized name exists in `category`.
    pub fn contains(&self, name: &str, category: Category) -> bool {
        let key = normalize_name(name);
        self.entries
            .iter()
            .any(|entry| entry.category() == category && normalize_name(entry.name()) == key)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
