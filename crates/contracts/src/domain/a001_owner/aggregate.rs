use serde::{Deserialize, Serialize};

use crate::shared::list_sort::{joined_names, lower_or_empty, Sortable};

/// Owner record as returned by the backend.
///
/// Any string field may be absent or `null`; a missing `pets` array is empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Owner {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
    pub pets: Vec<PetSummary>,
}

/// Pet as embedded in an owner record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetSummary {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl Owner {
    /// `"First Last"` as shown in the name column.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }

    /// Pet names joined by `", "`; empty when the owner has no pets.
    pub fn pet_names(&self) -> String {
        joined_names(
            self.pets
                .iter()
                .map(|pet| pet.name.as_deref().unwrap_or_default()),
        )
    }

    /// Detail page of this owner.
    pub fn detail_href(&self) -> String {
        format!("/owners/{}", self.id)
    }
}

/// Sortable columns of the owners table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OwnerSortKey {
    #[default]
    Name,
    Address,
    City,
    Telephone,
    Pets,
}

impl Sortable for Owner {
    type Key = OwnerSortKey;

    fn sort_value(&self, key: OwnerSortKey) -> String {
        match key {
            OwnerSortKey::Name => format!(
                "{} {}",
                self.last_name.as_deref().unwrap_or_default(),
                self.first_name.as_deref().unwrap_or_default()
            )
            .to_lowercase(),
            OwnerSortKey::Address => lower_or_empty(self.address.as_deref()),
            OwnerSortKey::City => lower_or_empty(self.city.as_deref()),
            OwnerSortKey::Telephone => lower_or_empty(self.telephone.as_deref()),
            OwnerSortKey::Pets => self.pet_names().to_lowercase(),
        }
    }
}
