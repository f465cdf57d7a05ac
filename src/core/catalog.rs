//! # Catalog
//!
//! A sorted entry list and its letter index, owned and replaced together.
//! Readers never see a list paired with an index built from another list.

use crate::core::index::{Entry, LetterIndex, SortedEntryList};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: SortedEntryList,
    index: LetterIndex,
}

impl Catalog {
    /// Sorts `entries` and derives the index.
    pub fn new(entries: Vec<Entry>) -> Self {
        Self::from_sorted(SortedEntryList::new(entries))
    }

    pub fn from_sorted(entries: SortedEntryList) -> Self {
        let index = LetterIndex::build(&entries);
        Self { entries, index }
    }

    pub fn entries(&self) -> &SortedEntryList {
        &self.entries
    }

    pub fn index(&self) -> &LetterIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    /// Case-insensitive substring filter on labels. The result has its own
    /// index, so letter jumps land inside the filtered view.
    pub fn filter(&self, query: &str) -> Catalog {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.clone();
        }
        Catalog::from_sorted(
            self.entries
                .retain_matching(|e| e.label.to_lowercase().contains(&needle)),
        )
    }

    /// Row to scroll to for `letter`, clamped to a list of `visible_len` rows.
    ///
    /// `None` means "leave the viewport where it is": the letter has no
    /// entries, or there is nothing on screen to scroll.
    pub fn jump_target(&self, letter: char, visible_len: usize) -> Option<usize> {
        if visible_len == 0 {
            return None;
        }
        self.index
            .lookup(letter)
            .map(|position| position.min(visible_len - 1))
    }
}
