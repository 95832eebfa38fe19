//! Website list: searchable cards over the mock inventory.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::data::{Website, filter_websites, mock_websites};

#[component]
pub fn WebsiteListPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let navigate = use_navigate();

    let filtered = move || filter_websites(&mock_websites(), &query.get());

    let navigate_create = navigate.clone();
    let on_create = move |_| navigate_create("/websites/create", NavigateOptions::default());

    view! {
        <div class="websites-page">
            <header class="websites-page__header">
                <h1>"Websites"</h1>
                <input
                    class="input websites-page__search"
                    type="search"
                    placeholder="Search websites..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Website"
                </button>
            </header>

            <Show
                when=move || !filtered().is_empty()
                fallback=|| view! { <p class="websites-page__empty">"No websites match."</p> }
            >
                <div class="websites-page__grid">
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|site| view! { <WebsiteCard site=site/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn WebsiteCard(site: Website) -> impl IntoView {
    let navigate = use_navigate();
    let href = format!("/websites/{}", site.id);
    let on_open = move |_| navigate(&href, NavigateOptions::default());

    view! {
        <div class="website-card">
            <div class="website-card__head">
                <h2>{site.name}</h2>
                <span class=site.status.badge_class()>{site.status.label()}</span>
            </div>
            <p class="website-card__url">{site.url}</p>
            <p class="website-card__visitors">{site.visitors} " visitors this week"</p>
            <button class="btn" on:click=on_open>
                "Manage"
            </button>
        </div>
    }
}
