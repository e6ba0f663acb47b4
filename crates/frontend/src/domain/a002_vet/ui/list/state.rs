use contracts::domain::a002_vet::aggregate::{Vet, VetSortKey};
use contracts::shared::list_sort::SortState;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct VetsListState {
    /// `None` until the first response arrives.
    pub items: Option<Vec<Vet>>,
    /// Set once the mount fetch has been issued.
    pub load_requested: bool,
}

impl VetsListState {
    /// Marks the mount fetch as issued; `false` if it already was.
    pub fn request_load(&mut self) -> bool {
        if self.load_requested {
            return false;
        }
        self.load_requested = true;
        true
    }

    /// Whether the table renders; before data arrives only the heading does.
    pub fn shows_table(&self) -> bool {
        self.items.is_some()
    }

    /// Replaces the held snapshot wholesale.
    pub fn replace_items(&mut self, items: Vec<Vet>) {
        self.items = Some(items);
    }
}

pub fn create_state() -> RwSignal<VetsListState> {
    RwSignal::new(VetsListState::default())
}

pub fn create_sort() -> RwSignal<SortState<VetSortKey>> {
    RwSignal::new(SortState::new(VetSortKey::Name))
}
