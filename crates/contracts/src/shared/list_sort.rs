//! Sorting of list views: click-to-sort state machine and a stable sort over
//! derived string values.
//!
//! Every list keeps a [`SortState`] and re-derives the displayed order from the
//! input on each render with [`sort_list`]; the input itself is never touched.

use std::cmp::Ordering;

/// Direction applied to the active sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Current sort of a list: which key, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + Eq> SortState<K> {
    /// Initial state: the given key, ascending.
    pub fn new(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Transition for a click on the header of column `key`.
    ///
    /// Re-clicking the active column flips the direction and keeps the key;
    /// any other column becomes active in ascending order.
    pub fn on_header_click(self, key: K) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.toggled(),
            }
        } else {
            Self::new(key)
        }
    }

    pub fn is_active(&self, key: K) -> bool {
        self.key == key
    }
}

impl<K: Copy + Eq + Default> Default for SortState<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

/// Records that can be ordered by a per-key derived string.
pub trait Sortable {
    type Key: Copy + Eq;

    /// Normalized (lowercase) value the list is ordered by for `key`.
    /// Absent fields yield an empty string.
    fn sort_value(&self, key: Self::Key) -> String;
}

/// Returns a sorted copy of `items`.
///
/// The sort is stable in both directions: records with equal derived values keep
/// their input order, descending only flips the comparator.
pub fn sort_list<T>(items: &[T], state: &SortState<T::Key>) -> Vec<T>
where
    T: Sortable + Clone,
{
    let mut keyed: Vec<(String, &T)> = items
        .iter()
        .map(|item| (item.sort_value(state.key), item))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| state.direction.apply(left.cmp(right)));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Joins nested names the way list cells show them: `"a, b, c"`.
pub fn joined_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().collect::<Vec<_>>().join(", ")
}

/// `aria-sort` value of a header cell.
pub fn aria_sort<K: Copy + Eq>(state: &SortState<K>, key: K) -> &'static str {
    if !state.is_active(key) {
        return "none";
    }
    if state.direction.is_ascending() {
        "ascending"
    } else {
        "descending"
    }
}

/// Glyph shown after the label of the active column only.
pub fn sort_glyph<K: Copy + Eq>(state: &SortState<K>, key: K) -> Option<&'static str> {
    if !state.is_active(key) {
        return None;
    }
    Some(if state.direction.is_ascending() {
        " ▲"
    } else {
        " ▼"
    })
}

/// Lowercases an optional field, absent meaning empty.
pub(crate) fn lower_or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase()
}
