mod state;

use contracts::domain::a001_owner::aggregate::{Owner, OwnerSortKey};
use leptos::prelude::*;

use crate::shared::components::table::SortableHeaderCell;
use crate::shared::list_utils::{create_sort_toggle, derive_sorted};
use state::create_sort;

/// Display texts of one owners table row.
///
/// The whole row is the `<For>` key, so a refetched owner with changed fields
/// is re-rendered instead of keeping its old cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OwnerRow {
    pub id: i64,
    pub href: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    /// Joined pet names; an owner without pets shows empty text.
    pub pets: String,
}

impl From<&Owner> for OwnerRow {
    fn from(o: &Owner) -> Self {
        Self {
            id: o.id,
            href: o.detail_href(),
            name: o.display_name(),
            address: o.address.clone().unwrap_or_default(),
            city: o.city.clone().unwrap_or_default(),
            telephone: o.telephone.clone().unwrap_or_default(),
            pets: o.pet_names(),
        }
    }
}

/// Whether the table renders at all: nothing until a list was fetched.
pub fn shows_owners_table(owners: &Option<Vec<Owner>>) -> bool {
    owners.is_some()
}

/// Heading above the table.
pub fn owners_found_title(count: usize) -> String {
    format!("{} Owners found", count)
}

/// Sortable owners table over a list fetched by the parent.
///
/// Renders nothing while `owners` is `None`.
#[component]
#[allow(non_snake_case)]
pub fn OwnersTable(#[prop(into)] owners: Signal<Option<Vec<Owner>>>) -> impl IntoView {
    let sort = create_sort();
    let on_sort = create_sort_toggle(sort);
    let sort_state = Signal::from(sort);
    let sorted = derive_sorted(owners, sort);

    let rows = move || {
        sorted
            .get()
            .unwrap_or_default()
            .iter()
            .map(OwnerRow::from)
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || owners.with(shows_owners_table)>
            <section>
                <h2>{move || owners_found_title(owners.with(|o| o.as_ref().map_or(0, Vec::len)))}</h2>
                <table class="table table-striped">
                    <thead>
                        <tr>
                            <SortableHeaderCell
                                label="Name"
                                sort_key=OwnerSortKey::Name
                                sort_state=sort_state
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                label="Address"
                                sort_key=OwnerSortKey::Address
                                sort_state=sort_state
                                on_sort=on_sort
                                class="hidden-sm hidden-xs"
                            />
                            <SortableHeaderCell
                                label="City"
                                sort_key=OwnerSortKey::City
                                sort_state=sort_state
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                label="Telephone"
                                sort_key=OwnerSortKey::Telephone
                                sort_state=sort_state
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                label="Pets"
                                sort_key=OwnerSortKey::Pets
                                sort_state=sort_state
                                on_sort=on_sort
                                class="hidden-xs"
                            />
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|row: &OwnerRow| row.clone()
                            children=move |row: OwnerRow| {
                                view! {
                                    <tr>
                                        <td>
                                            <a href=row.href>{row.name}</a>
                                        </td>
                                        <td class="hidden-sm hidden-xs">{row.address}</td>
                                        <td>{row.city}</td>
                                        <td>{row.telephone}</td>
                                        <td class="hidden-xs">{row.pets}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_owner::aggregate::PetSummary;

    fn owner() -> Owner {
        Owner {
            id: 6,
            first_name: Some("Jean".to_string()),
            last_name: Some("Coleman".to_string()),
            address: Some("105 N. Lake St.".to_string()),
            city: Some("Monona".to_string()),
            telephone: Some("6085552654".to_string()),
            pets: vec![
                PetSummary { id: Some(8), name: Some("Max".to_string()) },
                PetSummary { id: Some(9), name: Some("Samantha".to_string()) },
            ],
        }
    }

    #[test]
    fn test_row_texts() {
        let row = OwnerRow::from(&owner());
        assert_eq!(row.href, "/owners/6");
        assert_eq!(row.name, "Jean Coleman");
        assert_eq!(row.address, "105 N. Lake St.");
        assert_eq!(row.city, "Monona");
        assert_eq!(row.telephone, "6085552654");
        assert_eq!(row.pets, "Max, Samantha");
    }

    #[test]
    fn test_owner_without_pets_renders_empty_text() {
        let mut o = owner();
        o.pets.clear();
        o.telephone = None;
        let row = OwnerRow::from(&o);
        assert_eq!(row.pets, "");
        assert_eq!(row.telephone, "");
    }

    #[test]
    fn test_changed_owner_gets_new_row_key() {
        use std::collections::HashSet;

        let before = owner();
        let mut after = owner();
        after.telephone = Some("6085559999".to_string());

        let keys: HashSet<OwnerRow> = [OwnerRow::from(&before), OwnerRow::from(&after)]
            .into_iter()
            .collect();
        assert_eq!(keys.len(), 2);

        let unchanged: HashSet<OwnerRow> = [OwnerRow::from(&before), OwnerRow::from(&owner())]
            .into_iter()
            .collect();
        assert_eq!(unchanged.len(), 1);
    }

    #[test]
    fn test_table_hidden_until_owners_fetched() {
        assert!(!shows_owners_table(&None));
        assert!(shows_owners_table(&Some(Vec::new())));
        assert!(shows_owners_table(&Some(vec![owner()])));
    }

    #[test]
    fn test_owners_found_title() {
        assert_eq!(owners_found_title(0), "0 Owners found");
        assert_eq!(owners_found_title(10), "10 Owners found");
    }
}
