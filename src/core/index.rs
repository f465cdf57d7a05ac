//! # Alphabetical Index
//!
//! Maps a starting letter to the position of the first entry whose label
//! begins with it, so a long list can jump to "L" in constant time.
//!
//! ```text
//!   SortedEntryList                     LetterIndex
//!   0  Amaretto Sour          ┐
//!   1  Apple Martini          ┘ a ──►   a → 0
//!   2  Bellini                ─ b ──►   b → 2
//!   3  Cosmopolitan           ─ c ──►   c → 3
//! ```
//!
//! ## Bucketing
//!
//! The key for a label is its first non-whitespace character, case-folded:
//!
//! - ASCII letters are lowercased.
//! - Latin letters with diacritics fold to their base letter (`É` → `e`).
//! - Anything else (digits, symbols, other scripts) lands in [`OTHER_KEY`].
//!
//! Blank labels have no key. They are skipped by [`LetterIndex::build`]
//! and never shift the positions recorded for later entries.
//!
//! The sort order used by [`SortedEntryList::new`] ranks entries by key first,
//! so every bucket is one contiguous run and positions increase with the key.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;

/// Key shared by every label that doesn't start with a foldable letter.
pub const OTHER_KEY: char = '#';

// ============================================================================
// Entry
// ============================================================================

/// One displayable record in a browsable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub label: String,
    /// Secondary line shown under the label (e.g. "Ordinary Drink").
    pub category: Option<String>,
}

impl Entry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Index key for this entry's label.
    pub fn key(&self) -> Result<char, InvalidEntry> {
        index_key(&self.label).ok_or_else(|| InvalidEntry::BlankLabel {
            id: self.id.clone(),
        })
    }
}

/// An entry without a usable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidEntry {
    /// The record carried no label at all.
    MissingLabel { id: String },
    /// The label is empty or whitespace only.
    BlankLabel { id: String },
}

impl fmt::Display for InvalidEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidEntry::MissingLabel { id } => write!(f, "entry {id} has no label"),
            InvalidEntry::BlankLabel { id } => write!(f, "entry {id} has a blank label"),
        }
    }
}

impl std::error::Error for InvalidEntry {}

// ============================================================================
// Folding
// ============================================================================

/// Folds a single character to its ASCII base letter, if it has one.
fn fold_letter(c: char) -> Option<char> {
    let lower = c.to_lowercase().next().unwrap_or(c);
    if lower.is_ascii_lowercase() {
        return Some(lower);
    }
    let base = match lower {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' | 'æ' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' | 'ð' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' | 'œ' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ß' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return None,
    };
    Some(base)
}

/// Folds a query or label character to an index key.
pub fn fold_key(c: char) -> char {
    fold_letter(c).unwrap_or(OTHER_KEY)
}

/// Returns the index key for a label, or `None` for a blank label.
pub fn index_key(label: &str) -> Option<char> {
    label.trim_start().chars().next().map(fold_key)
}

/// Comparison string: lowercased with letters folded to their base.
fn collation_key(label: &str) -> String {
    label
        .trim_start()
        .chars()
        .map(|c| fold_letter(c).unwrap_or_else(|| c.to_lowercase().next().unwrap_or(c)))
        .collect()
}

/// Locale-aware label ordering: bucket, then folded text, then raw text.
fn label_order(label: &str) -> (Option<char>, String, &str) {
    (index_key(label), collation_key(label), label)
}

// ============================================================================
// SortedEntryList
// ============================================================================

/// Entries in label order. The only way in is through a sorting constructor
/// or an explicit promise that the data is already sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedEntryList {
    entries: Vec<Entry>,
}

impl SortedEntryList {
    /// Sorts `entries` by label (ties broken by id).
    pub fn new(mut entries: Vec<Entry>) -> Self {
        entries.sort_by_cached_key(|e| {
            let (key, folded, raw) = label_order(&e.label);
            (key, folded, raw.to_string(), e.id.clone())
        });
        Self { entries }
    }

    /// Wraps entries the caller already sorted. Not checked.
    pub fn assume_sorted(entries: Vec<Entry>) -> Self {
        Self { entries }
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

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Keeps the entries matching `keep`, preserving order.
    pub fn retain_matching(&self, mut keep: impl FnMut(&Entry) -> bool) -> Self {
        Self {
            entries: self.entries.iter().filter(|e| keep(e)).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SortedEntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// LetterIndex
// ============================================================================

/// First-occurrence position for every key present in a [`SortedEntryList`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterIndex {
    positions: BTreeMap<char, usize>,
}

impl LetterIndex {
    /// Builds the index in one pass over `entries`. Does not sort.
    pub fn build(entries: &SortedEntryList) -> Self {
        let mut positions = BTreeMap::new();
        let mut last_seen: Option<char> = None;

        for (position, entry) in entries.iter().enumerate() {
            let key = match entry.key() {
                Ok(key) => key,
                Err(e) => {
                    debug!("Skipping entry at {}: {}", position, e);
                    continue;
                }
            };
            if last_seen != Some(key) {
                // A key seen earlier keeps its first position even if the
                // caller's list wasn't contiguous.
                positions.entry(key).or_insert(position);
                last_seen = Some(key);
            }
        }

        Self { positions }
    }

    /// Position of the first entry starting with `letter`.
    pub fn lookup(&self, letter: char) -> Option<usize> {
        self.positions.get(&fold_key(letter)).copied()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.lookup(letter).is_some()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Keys in ascending order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.positions.iter().map(|(k, v)| (*k, *v))
    }
}
