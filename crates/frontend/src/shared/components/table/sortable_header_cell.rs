//! Sortable table header cell
//!
//! # Example
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="City"
//!     sort_key=OwnerSortKey::City
//!     sort_state=sort
//!     on_sort=on_sort
//! />
//!
//! // hidden on narrow screens
//! <SortableHeaderCell
//!     label="Pets"
//!     sort_key=OwnerSortKey::Pets
//!     class="hidden-xs"
//!     ...
//! />
//! ```

use contracts::shared::list_sort::{aria_sort, sort_glyph, SortState};
use leptos::prelude::*;

/// Class attribute of the `<th>`: left out unless there is a non-empty class.
fn header_class(class: Option<&'static str>) -> Option<&'static str> {
    class.filter(|c| !c.trim().is_empty())
}

/// Header cell with a sort button.
///
/// - `aria-sort` reflects the state of this column (none/ascending/descending)
/// - the ▲/▼ glyph is shown for the active column only and hidden from screen readers
/// - a click reports `sort_key` through `on_sort`
#[component]
pub fn SortableHeaderCell<K>(
    /// Column label
    #[prop(into)]
    label: String,

    /// Key this column sorts by
    sort_key: K,

    /// Current sort of the list
    #[prop(into)]
    sort_state: Signal<SortState<K>>,

    /// Called with `sort_key` on click
    on_sort: Callback<K>,

    /// Extra CSS classes of the `<th>`; no `class` attribute when absent
    #[prop(optional)]
    class: Option<&'static str>,
) -> impl IntoView
where
    K: Copy + Eq + Send + Sync + 'static,
{
    view! {
        <th aria-sort=move || aria_sort(&sort_state.get(), sort_key) class=header_class(class)>
            <button
                type="button"
                class="table-sort-button"
                on:click=move |_| on_sort.run(sort_key)
            >
                {label}
                {move || {
                    sort_glyph(&sort_state.get(), sort_key)
                        .map(|glyph| view! { <span aria-hidden="true">{glyph}</span> })
                }}
            </button>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_class() {
        assert_eq!(header_class(None), None);
        assert_eq!(header_class(Some("")), None);
        assert_eq!(header_class(Some("hidden-xs")), Some("hidden-xs"));
        assert_eq!(
            header_class(Some("hidden-sm hidden-xs")),
            Some("hidden-sm hidden-xs")
        );
    }
}
