use crate::domain::a001_owner::ui::search::FindOwnersPage;
use crate::domain::a002_vet::ui::list::VetsPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

/// Page shown for the current location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    FindOwners,
    Vets,
}

impl Page {
    /// `.../vets` (or `vets.html`) is the vets page, anything else finds owners.
    pub fn from_path(path: &str) -> Self {
        let last = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        match last.trim_end_matches(".html") {
            "vets" => Page::Vets,
            _ => Page::FindOwners,
        }
    }
}

fn current_page() -> Page {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Page::from_path(&path)
}

#[component]
pub fn App() -> impl IntoView {
    let page = current_page();
    log::debug!("rendering page {:?}", page);

    view! {
        <ConfigProvider>
            <nav>
                <a href="/owners">"Find owners"</a>
                " | "
                <a href="/vets">"Veterinarians"</a>
            </nav>
            {match page {
                Page::FindOwners => view! { <FindOwnersPage /> }.into_any(),
                Page::Vets => view! { <VetsPage /> }.into_any(),
            }}
        </ConfigProvider>
    }
}
