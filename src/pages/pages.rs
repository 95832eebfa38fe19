//! Scanned-pages management: searchable table over the scanner inventory
//! with an add-page modal.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use leptos::prelude::*;

use crate::data::{SitePage, filter_pages, mock_pages};

fn is_valid_url(url: &str) -> bool {
    let Some(rest) = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")) else {
        return false;
    };
    let host = rest.split('/').next().unwrap_or("");
    !host.is_empty() && !host.contains(char::is_whitespace)
}

/// Validation message for the add-page URL field, `None` when acceptable.
fn page_url_error(url: &str) -> Option<&'static str> {
    if url.is_empty() {
        Some("URL is required")
    } else if !is_valid_url(url) {
        Some("Please enter a valid URL")
    } else {
        None
    }
}

fn modal_class(open: bool) -> &'static str {
    if open { "modal modal--open" } else { "modal" }
}

fn url_field_class(has_error: bool) -> &'static str {
    if has_error { "input input--error" } else { "input" }
}

#[component]
pub fn PagesPage() -> impl IntoView {
    let query = RwSignal::new(String::new());

    let modal_open = RwSignal::new(false);
    let url = RwSignal::new(String::new());
    let url_error = RwSignal::new(None::<&'static str>);

    let filtered = move || filter_pages(&mock_pages(), &query.get());

    let on_open = move |_| {
        url.set(String::new());
        url_error.set(None);
        modal_open.set(true);
    };
    let on_close = move |_| modal_open.set(false);

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = url.get_untracked();
        if let Some(message) = page_url_error(&value) {
            url_error.set(Some(message));
            return;
        }
        // The scanner backend does not exist yet; the page goes nowhere.
        #[cfg(feature = "hydrate")]
        log::info!("page added: {value}");
        modal_open.set(false);
    };

    view! {
        <div class="pages-page">
            <header class="pages-page__header">
                <h1>"Pages"</h1>
                <input
                    class="input pages-page__search"
                    type="search"
                    placeholder="Search pages..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=on_open>
                    "+ Add Page"
                </button>
            </header>

            <table class="pages-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"URL"</th>
                        <th>"Status"</th>
                        <th>"Last scanned"</th>
                        <th>"Quality"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|page| view! { <PageRow page=page/> })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=move || filtered().is_empty()>
                <p class="pages-page__empty">"No pages match."</p>
            </Show>

            <div class=move || modal_class(modal_open.get())>
                <form class="add-page-form" on:submit=on_add>
                    <header class="add-page-form__header">
                        <h2>"Add New Page"</h2>
                        <button type="button" class="add-page-form__close" on:click=on_close>
                            "×"
                        </button>
                    </header>

                    <label class="add-page-form__label">
                        "Page URL"
                        <input
                            class=move || url_field_class(url_error.get().is_some())
                            type="text"
                            placeholder="https://example.com/page"
                            prop:value=move || url.get()
                            on:input=move |ev| {
                                url.set(event_target_value(&ev));
                                url_error.set(None);
                            }
                        />
                        <Show when=move || url_error.get().is_some()>
                            <p class="add-page-form__error">
                                {move || url_error.get().unwrap_or_default()}
                            </p>
                        </Show>
                    </label>

                    <footer class="add-page-form__footer">
                        <button type="button" class="btn" on:click=on_close>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Add Page"
                        </button>
                    </footer>
                </form>
            </div>
        </div>
    }
}

#[component]
fn PageRow(page: SitePage) -> impl IntoView {
    view! {
        <tr class="pages-table__row">
            <td>{page.title}</td>
            <td>{page.url}</td>
            <td>{page.status.label()}</td>
            <td>{page.last_scanned}</td>
            <td>{page.quality_score} "/100"</td>
        </tr>
    }
}
