//! Domain models for rated items. `Entry` values are immutable once admitted
//! and can only be built by the store, so everything outside the crate sees
//! read-only accessors. `EntryCandidate` is the raw form payload handed in by
//! whichever front end is collecting input.

use std::fmt;

use uuid::Uuid;

/// Lowest rating a stored entry may carry.
pub const MIN_RATING: u8 = 1;
/// Highest rating a stored entry may carry.
pub const MAX_RATING: u8 = 10;
/// Rating value a form submits while the user has not picked one yet.
pub const UNSET_RATING: u8 = 0;
/// Upper bound on comment length, counted in characters rather than bytes.
pub const MAX_COMMENT_CHARS: usize = 100;

/// Closed set of things that can be rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Anime,
    Movie,
    Show,
}

impl Category {
    /// Every category in display order. Both the form picker and the grouped
    /// ratings view walk this array so their ordering never drifts apart.
    pub const ALL: [Category; 3] = [Category::Anime, Category::Movie, Category::Show];

    /// Title-cased label used for section headers and button captions.
    pub fn label(self) -> &'static str {
        match self {
            Category::Anime => "Anime",
            Category::Movie => "Movie",
            Category::Show => "Show",
        }
    }

    /// Lowercased label for inline prose ("This movie has already been rated.").
    pub fn lowercase(self) -> &'static str {
        match self {
            Category::Anime => "anime",
            Category::Movie => "movie",
            Category::Show => "show",
        }
    }

    /// Position inside [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Anime => 0,
            Category::Movie => 1,
            Category::Show => 2,
        }
    }

    /// Cycle forward through the picker, wrapping after the last category.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle backward through the picker, wrapping before the first category.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Anime
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Opaque identifier assigned when an entry is admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated rating record. Fields are private: the store is the only
/// place that builds one, and nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    name: String,
    rating: u8,
    comment: String,
    category: Category,
}

impl Entry {
    pub(crate) fn new(name: String, rating: u8, comment: String, category: Category) -> Self {
        Self {
            id: EntryId::generate(),
            name,
            rating,
            comment,
            category,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Trimmed item name as it was admitted.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Comment exactly as typed; unlike the name it is never trimmed.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Raw field values collected by a form before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryCandidate {
    pub name: String,
    /// `0` means the user has not chosen a rating yet.
    pub rating: u8,
    pub comment: String,
    pub category: Category,
}

impl EntryCandidate {
    pub fn new(
        name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            rating,
            comment: comment.into(),
            category,
        }
    }
}

/// Key used for the uniqueness rule: the name trimmed and lowercased.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_cycling_wraps_both_ways() {
        assert_eq!(Category::Show.next(), Category::Anime);
        assert_eq!(Category::Anime.previous(), Category::Show);
        assert_eq!(Category::Anime.next().next(), Category::Show);
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::Movie.to_string(), "Movie");
        assert_eq!(Category::Movie.lowercase(), "movie");
    }

    #[test]
    fn normalize_name_trims_and_lowercases() {
        assert_eq!(normalize_name("  NaRuTo \t"), "naruto");
    }

    #[test]
    fn generated_ids_differ() {
        let first = Entry::new("a".into(), 1, String::new(), Category::Anime);
        let second = Entry::new("a".into(), 1, String::new(), Category::Anime);
        assert_ne!(first.id(), second.id());
    }
}
