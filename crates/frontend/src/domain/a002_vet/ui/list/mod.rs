mod state;

use contracts::domain::a002_vet::aggregate::{Vet, VetSortKey};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_vet::api;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::fetch_guard::FetchGuard;
use crate::shared::list_utils::{create_sort_toggle, derive_sorted};
use state::{create_sort, create_state, VetsListState};

/// Display texts of one vets table row; the whole row is the `<For>` key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VetRow {
    pub id: i64,
    pub name: String,
    /// Joined specialty names, or "none".
    pub specialties: String,
}

impl From<&Vet> for VetRow {
    fn from(v: &Vet) -> Self {
        Self {
            id: v.id,
            name: v.display_name(),
            specialties: v.specialties_label(),
        }
    }
}

/// Veterinarians page: loads `api/vets` once on mount and shows a sortable table.
///
/// Until the response arrives only the heading is shown. A response arriving after
/// the page was torn down is dropped.
#[component]
#[allow(non_snake_case)]
pub fn VetsPage() -> impl IntoView {
    let state = create_state();
    let sort = create_sort();
    let on_sort = create_sort_toggle(sort);
    let sort_state = Signal::from(sort);

    let guard = FetchGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.dispose()
    });
    let guard = StoredValue::new(guard);

    let load_data = move || {
        let ticket = guard.with_value(|g| g.begin());
        log::debug!("fetching {}", api::VETS_PATH);
        spawn_local(async move {
            let result = api::fetch_vets().await;
            if !ticket.is_current() {
                log::debug!("vets page closed, dropping response");
                return;
            }
            match result {
                Ok(vets) => {
                    log::debug!("vets loaded: {}", vets.len());
                    state.update(|s| s.replace_items(vets));
                }
                Err(e) => log::error!("Failed to load vets: {}", e),
            }
        });
    };

    Effect::new(move |_| {
        let mut first_request = false;
        state.update_untracked(|s| first_request = s.request_load());
        if first_request {
            load_data();
        }
    });

    let items = Signal::derive(move || state.with(|s| s.items.clone()));
    let sorted = derive_sorted(items, sort);
    let rows = move || {
        sorted
            .get()
            .unwrap_or_default()
            .iter()
            .map(VetRow::from)
            .collect::<Vec<_>>()
    };

    view! {
        <span>
            <h2>"Veterinarians"</h2>
            <Show when=move || state.with(VetsListState::shows_table)>
                <table class="table table-striped">
                    <thead>
                        <tr>
                            <SortableHeaderCell
                                label="Name"
                                sort_key=VetSortKey::Name
                                sort_state=sort_state
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                label="Specialties"
                                sort_key=VetSortKey::Specialties
                                sort_state=sort_state
                                on_sort=on_sort
                            />
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|row: &VetRow| row.clone()
                            children=move |row: VetRow| {
                                view! {
                                    <tr>
                                        <td>{row.name}</td>
                                        <td>{row.specialties}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_vet::aggregate::Specialty;

    fn vet(specialties: &[&str]) -> Vet {
        Vet {
            id: 3,
            first_name: Some("Linda".to_string()),
            last_name: Some("Douglas".to_string()),
            specialties: specialties
                .iter()
                .map(|name| Specialty {
                    id: None,
                    name: Some(name.to_string()),
                })
                .collect(),
        }
    }

    #[test]
    fn test_row_texts() {
        let row = VetRow::from(&vet(&["dentistry", "surgery"]));
        assert_eq!(row.name, "Linda Douglas");
        assert_eq!(row.specialties, "dentistry, surgery");
    }

    #[test]
    fn test_changed_vet_gets_new_row_key() {
        let before = VetRow::from(&vet(&["surgery"]));
        let after = VetRow::from(&vet(&["surgery", "dentistry"]));
        assert_eq!(before.id, after.id);
        assert_ne!(before, after);
        assert_eq!(before, VetRow::from(&vet(&["surgery"])));
    }

    #[test]
    fn test_vet_without_specialties_renders_none() {
        assert_eq!(VetRow::from(&vet(&[])).specialties, "none");
    }
}
