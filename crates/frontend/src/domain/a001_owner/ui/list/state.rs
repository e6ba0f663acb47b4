use contracts::domain::a001_owner::aggregate::OwnerSortKey;
use contracts::shared::list_sort::SortState;
use leptos::prelude::*;

/// Sort of the owners table; starts at name, ascending.
pub fn create_sort() -> RwSignal<SortState<OwnerSortKey>> {
    RwSignal::new(SortState::new(OwnerSortKey::Name))
}
