use serde::{Deserialize, Serialize};

use crate::shared::list_sort::{joined_names, Sortable};

/// Text shown in the specialties column of a vet without specialties.
pub const NO_SPECIALTIES: &str = "none";

/// Veterinarian record as returned by `api/vets`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vet {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialties: Vec<Specialty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Specialty {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl Vet {
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }

    /// Specialty names joined by `", "`, empty when there are none.
    pub fn specialty_names(&self) -> String {
        joined_names(
            self.specialties
                .iter()
                .map(|s| s.name.as_deref().unwrap_or_default()),
        )
    }

    /// Specialties cell text: the joined names, or [`NO_SPECIALTIES`].
    pub fn specialties_label(&self) -> String {
        if self.specialties.is_empty() {
            NO_SPECIALTIES.to_string()
        } else {
            self.specialty_names()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VetSortKey {
    #[default]
    Name,
    Specialties,
}

impl Sortable for Vet {
    type Key = VetSortKey;

    fn sort_value(&self, key: VetSortKey) -> String {
        match key {
            VetSortKey::Name => format!(
                "{} {}",
                self.last_name.as_deref().unwrap_or_default(),
                self.first_name.as_deref().unwrap_or_default()
            )
            .to_lowercase(),
            // sorts by the joined names, never by the "none" label
            VetSortKey::Specialties => self.specialty_names().to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_sort::{sort_list, SortState};

    fn vet(id: i64, first: &str, last: &str, specialties: &[&str]) -> Vet {
        Vet {
            id,
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            specialties: specialties
                .iter()
                .map(|name| Specialty {
                    id: None,
                    name: Some(name.to_string()),
                })
                .collect(),
        }
    }

    fn vets() -> Vec<Vet> {
        vec![
            vet(1, "James", "Carter", &[]),
            vet(2, "Helen", "Leary", &["radiology"]),
            vet(3, "Linda", "Douglas", &["Surgery", "dentistry"]),
            vet(4, "Rafael", "Ortega", &["surgery"]),
        ]
    }

    fn ids(list: &[Vet]) -> Vec<i64> {
        list.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_specialties_label() {
        assert_eq!(vet(1, "James", "Carter", &[]).specialties_label(), "none");
        assert_eq!(
            vet(3, "Linda", "Douglas", &["surgery", "dentistry"]).specialties_label(),
            "surgery, dentistry"
        );
    }

    #[test]
    fn test_default_sort_by_name() {
        let sorted = sort_list(&vets(), &SortState::new(VetSortKey::Name));
        assert_eq!(ids(&sorted), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_sort_by_specialties() {
        let state = SortState::new(VetSortKey::Name).on_header_click(VetSortKey::Specialties);
        let sorted = sort_list(&vets(), &state);
        // no specialties derives "", which sorts first; "surgery" is a prefix of "surgery, dentistry"
        assert_eq!(ids(&sorted), vec![1, 2, 4, 3]);

        let sorted = sort_list(&vets(), &state.on_header_click(VetSortKey::Specialties));
        assert_eq!(ids(&sorted), vec![3, 4, 2, 1]);
    }

    #[test]
    fn test_deserialize_vets() {
        let json = r#"[
            {"id": 1, "firstName": "James", "lastName": "Carter", "specialties": []},
            {"id": 2, "firstName": "Helen", "lastName": "Leary",
             "specialties": [{"id": 1, "name": "radiology"}]}
        ]"#;
        let vets: Vec<Vet> = serde_json::from_str(json).unwrap();
        assert_eq!(vets[0].specialties_label(), "none");
        assert_eq!(vets[1].specialties_label(), "radiology");
        assert_eq!(vets[1].display_name(), "Helen Leary");
    }
}
