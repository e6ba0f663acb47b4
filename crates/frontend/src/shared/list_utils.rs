/// Reactive glue between list views and the sort logic in `contracts`
use contracts::shared::list_sort::{sort_list, SortState, Sortable};
use leptos::prelude::*;

/// Creates the header-click handler of a list: applies the click-to-sort transition.
pub fn create_sort_toggle<K>(sort: RwSignal<SortState<K>>) -> Callback<K>
where
    K: Copy + Eq + std::fmt::Debug + Send + Sync + 'static,
{
    Callback::new(move |key: K| {
        sort.update(|state| *state = state.on_header_click(key));
        log::debug!("list sort changed: {:?}", sort.get_untracked());
    })
}

/// Sorted copy of `items`, recomputed whenever the items or the sort change.
///
/// `None` (not loaded yet) stays `None`.
pub fn derive_sorted<T>(
    items: Signal<Option<Vec<T>>>,
    sort: RwSignal<SortState<T::Key>>,
) -> Signal<Option<Vec<T>>>
where
    T: Sortable + Clone + Send + Sync + 'static,
    T::Key: Send + Sync + 'static,
{
    Signal::derive(move || {
        let state = sort.get();
        items.with(|items| items.as_ref().map(|list| sort_list(list, &state)))
    })
}
