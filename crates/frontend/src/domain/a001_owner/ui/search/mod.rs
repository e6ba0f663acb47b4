use contracts::domain::a001_owner::aggregate::Owner;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_owner::api;
use crate::domain::a001_owner::ui::list::OwnersTable;
use crate::shared::fetch_guard::FetchGuard;

/// Owner search by last name with the results table below.
///
/// Only the response of the latest search is shown; responses arriving after
/// the page was torn down are dropped.
#[component]
#[allow(non_snake_case)]
pub fn FindOwnersPage() -> impl IntoView {
    let owners: RwSignal<Option<Vec<Owner>>> = RwSignal::new(None);
    let last_name = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);

    let guard = FetchGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.dispose()
    });
    let guard = StoredValue::new(guard);

    let search = move || {
        let ticket = guard.with_value(|g| g.begin());
        let query = last_name.get_untracked().trim().to_string();
        log::debug!("searching owners, last name '{}'", query);
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_owners(&query).await;
            if !ticket.is_current() {
                log::debug!("owner search '{}' superseded, dropping response", query);
                return;
            }
            set_loading.set(false);
            match result {
                Ok(list) => {
                    log::debug!("owners found: {}", list.len());
                    owners.set(Some(list));
                }
                Err(e) => log::error!("Failed to load owners: {}", e),
            }
        });
    };

    view! {
        <span>
            <section>
                <h2>"Find Owners"</h2>
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 320px;">
                        <Input value=last_name placeholder="Last name" />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| search()
                        disabled=Signal::derive(move || loading.get())
                    >
                        "Find Owner"
                    </Button>
                </Flex>
                <a href="/owners/new">"Add Owner"</a>
            </section>
            <OwnersTable owners=owners />
        </span>
    }
}
