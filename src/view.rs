//! Read-side projection from the entry list to the three category sections
//! shown on the ratings screen. Nothing here mutates or clones entries; groups
//! borrow from the slice they were built from and are rebuilt on every render.

use crate::models::{Category, Entry, MAX_RATING};

/// Groups with at least this many entries are rendered in a scrolling
/// viewport instead of a static list.
pub const SCROLL_THRESHOLD: usize = 3;
/// Number of cards visible at once inside a scrolling viewport.
pub const SCROLL_VIEWPORT_ROWS: usize = 2;

/// How a category section should be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// No entries; show the placeholder message.
    Empty,
    /// One or two entries rendered directly.
    Static,
    /// Enough entries to overflow a fixed-height card.
    Scrollable,
}

impl PresentationMode {
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => PresentationMode::Empty,
            n if n < SCROLL_THRESHOLD => PresentationMode::Static,
            _ => PresentationMode::Scrollable,
        }
    }
}

/// Entries of one category in insertion order, plus the layout to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub entries: Vec<&'a Entry>,
    pub mode: PresentationMode,
}

impl<'a> CategoryGroup<'a> {
    fn collect(category: Category, entries: &'a [Entry]) -> Self {
        let entries: Vec<&Entry> = entries
            .iter()
            .filter(|entry| entry.category() == category)
            .collect();
        let mode = PresentationMode::for_count(entries.len());
        Self {
            category,
            entries,
            mode,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Placeholder shown when the group has no entries.
    pub fn empty_message(&self) -> String {
        format!("No {} rated yet.", self.category.lowercase())
    }

    /// Display-ready cards in insertion order.
    pub fn cards(&self) -> impl Iterator<Item = EntryCard<'a>> + '_ {
        self.entries.iter().copied().map(EntryCard::from_entry)
    }
}

/// The three category groups, always in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroups<'a> {
    groups: [CategoryGroup<'a>; 3],
}

impl<'a> CategoryGroups<'a> {
    pub fn get(&self, category: Category) -> &CategoryGroup<'a> {
        &self.groups[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup<'a>> {
        self.groups.iter()
    }
}

/// Partition `entries` by category, keeping insertion order inside each group.
pub fn build_groups(entries: &[Entry]) -> CategoryGroups<'_> {
    CategoryGroups {
        groups: Category::ALL.map(|category| CategoryGroup::collect(category, entries)),
    }
}

/// Text surfaced for a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCard<'a> {
    pub title: &'a str,
    pub rating_label: String,
    pub comment_label: &'a str,
}

impl<'a> EntryCard<'a> {
    pub fn from_entry(entry: &'a Entry) -> Self {
        let comment_label = if entry.comment().is_empty() {
            "No comment"
        } else {
            entry.comment()
        };
        Self {
            title: entry.name(),
            rating_label: format!("{} / {}", entry.rating(), MAX_RATING),
            comment_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryCandidate;
    use crate::store::EntryStore;

    fn store_with(items: &[(&str, Category)]) -> EntryStore {
        let mut store = EntryStore::new();
        for (name, category) in items {
            store
                .try_add(EntryCandidate::new(*name, 6, "", *category))
                .expect("valid candidate");
        }
        store
    }

    #[test]
    fn mode_thresholds() {
        assert_eq!(PresentationMode::for_count(0), PresentationMode::Empty);
        assert_eq!(PresentationMode::for_count(1), PresentationMode::Static);
        assert_eq!(PresentationMode::for_count(2), PresentationMode::Static);
        assert_eq!(PresentationMode::for_count(3), PresentationMode::Scrollable);
        assert_eq!(
            PresentationMode::for_count(40),
            PresentationMode::Scrollable
        );
    }

    #[test]
    fn groups_follow_category_order() {
        let groups = build_groups(&[]);
        let order: Vec<Category> = groups.iter().map(|group| group.category).collect();
        assert_eq!(order, Category::ALL);
    }

    #[test]
    fn empty_group_message_uses_lowercase_category() {
        let groups = build_groups(&[]);
        assert_eq!(
            groups.get(Category::Anime).empty_message(),
            "No anime rated yet."
        );
        assert_eq!(
            groups.get(Category::Movie).empty_message(),
            "No movie rated yet."
        );
    }

    #[test]
    fn groups_partition_without_reordering() {
        let store = store_with(&[
            ("Zeta", Category::Show),
            ("Alpha", Category::Anime),
            ("Mid", Category::Show),
            ("Beta", Category::Show),
        ]);
        let groups = build_groups(store.entries());

        let shows: Vec<&str> = groups
            .get(Category::Show)
            .entries
            .iter()
            .map(|entry| entry.name())
            .collect();
        assert_eq!(shows, ["Zeta", "Mid", "Beta"]);
        assert_eq!(
            groups.get(Category::Show).mode,
            PresentationMode::Scrollable
        );
        assert_eq!(groups.get(Category::Anime).mode, PresentationMode::Static);
        assert_eq!(groups.get(Category::Movie).mode, PresentationMode::Empty);
        assert_eq!(
            groups.iter().map(CategoryGroup::len).sum::<usize>(),
            store.len()
        );
    }

    #[test]
    fn building_twice_yields_equal_groups() {
        let store = store_with(&[("One", Category::Movie), ("Two", Category::Movie)]);
        assert_eq!(build_groups(store.entries()), build_groups(store.entries()));
    }

    #[test]
    fn card_falls_back_when_comment_is_empty() {
        let mut store = EntryStore::new();
        let quiet = store
            .try_add(EntryCandidate::new("Quiet", 4, "", Category::Movie))
            .expect("valid");
        let loud = store
            .try_add(EntryCandidate::new("Loud", 10, "Superb", Category::Movie))
            .expect("valid");

        let card = EntryCard::from_entry(&quiet);
        assert_eq!(card.title, "Quiet");
        assert_eq!(card.rating_label, "4 / 10");
        assert_eq!(card.comment_label, "No comment");

        assert_eq!(EntryCard::from_entry(&loud).comment_label, "Superb");
    }
}
