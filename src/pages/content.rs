//! Content management: searchable, status-filterable knowledge-base list
//! with an add/edit drawer.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use leptos::prelude::*;

use crate::data::{ContentItem, ContentKind, ContentStatus, filter_content, mock_content};

/// Map the status dropdown value to a filter; `"all"` clears it.
fn parse_status_filter(value: &str) -> Option<ContentStatus> {
    match value {
        "draft" => Some(ContentStatus::Draft),
        "published" => Some(ContentStatus::Published),
        "archived" => Some(ContentStatus::Archived),
        _ => None,
    }
}

fn parse_kind(value: &str) -> ContentKind {
    match value {
        "page" => ContentKind::Page,
        "product" => ContentKind::Product,
        _ => ContentKind::Article,
    }
}

fn kind_key(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Article => "article",
        ContentKind::Page => "page",
        ContentKind::Product => "product",
    }
}

fn status_key(status: ContentStatus) -> &'static str {
    match status {
        ContentStatus::Draft => "draft",
        ContentStatus::Published => "published",
        ContentStatus::Archived => "archived",
    }
}

fn drawer_class(open: bool) -> &'static str {
    if open { "content-drawer content-drawer--open" } else { "content-drawer" }
}

fn form_title(editing: bool) -> &'static str {
    if editing { "Edit Content" } else { "Add New Content" }
}

fn save_label(editing: bool) -> &'static str {
    if editing { "Save Changes" } else { "Create Content" }
}

#[component]
pub fn ContentPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let status = RwSignal::new(None::<ContentStatus>);

    // Drawer state: shared by the add button and the per-card edit action.
    let form_open = RwSignal::new(false);
    let form_editing = RwSignal::new(false);
    let form_title_field = RwSignal::new(String::new());
    let form_kind = RwSignal::new(kind_key(ContentKind::Article).to_owned());
    let form_body = RwSignal::new(String::new());
    let form_status = RwSignal::new(status_key(ContentStatus::Draft).to_owned());

    let filtered = move || filter_content(&mock_content(), &query.get(), status.get());

    let on_add = move |_| {
        form_editing.set(false);
        form_title_field.set(String::new());
        form_kind.set(kind_key(ContentKind::Article).to_owned());
        form_body.set(String::new());
        form_status.set(status_key(ContentStatus::Draft).to_owned());
        form_open.set(true);
    };

    let on_edit = Callback::new(move |item: ContentItem| {
        form_editing.set(true);
        form_title_field.set(item.title.to_owned());
        form_kind.set(kind_key(item.kind).to_owned());
        form_body.set(item.preview.to_owned());
        form_status.set(status_key(item.status).to_owned());
        form_open.set(true);
    });

    let on_close = move |_| form_open.set(false);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // The content backend does not exist yet; the entry goes nowhere.
        let kind = parse_kind(&form_kind.get_untracked());
        let status = parse_status_filter(&form_status.get_untracked());
        #[cfg(feature = "hydrate")]
        log::info!(
            "content saved: title={} kind={kind:?} status={status:?}",
            form_title_field.get_untracked(),
        );
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, status);
        }
        form_open.set(false);
    };

    view! {
        <div class="content-page">
            <header class="content-page__header">
                <h1>"Content"</h1>
                <input
                    class="input content-page__search"
                    type="search"
                    placeholder="Search content..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select
                    class="input content-page__status"
                    on:change=move |ev| status.set(parse_status_filter(&event_target_value(&ev)))
                >
                    <option value="all">"All statuses"</option>
                    <option value="draft">"Draft"</option>
                    <option value="published">"Published"</option>
                    <option value="archived">"Archived"</option>
                </select>
                <button class="btn btn--primary" on:click=on_add>
                    "+ Add Content"
                </button>
            </header>

            <Show
                when=move || !filtered().is_empty()
                fallback=|| view! { <p class="content-page__empty">"No content matches."</p> }
            >
                <div class="content-page__list">
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|item| view! { <ContentCard item=item on_edit=on_edit/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <div class=move || drawer_class(form_open.get())>
                <form class="content-form" on:submit=on_save>
                    <header class="content-form__header">
                        <h2>{move || form_title(form_editing.get())}</h2>
                        <button type="button" class="content-form__close" on:click=on_close>
                            "×"
                        </button>
                    </header>

                    <label class="content-form__label">
                        "Title"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || form_title_field.get()
                            on:input=move |ev| form_title_field.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="content-form__label">
                        "Content Type"
                        <select
                            class="input"
                            prop:value=move || form_kind.get()
                            on:change=move |ev| form_kind.set(event_target_value(&ev))
                        >
                            <option value="article">"Article"</option>
                            <option value="page">"Page"</option>
                            <option value="product">"Product"</option>
                        </select>
                    </label>
                    <label class="content-form__label">
                        "Content"
                        <textarea
                            class="input"
                            rows="8"
                            prop:value=move || form_body.get()
                            on:input=move |ev| form_body.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="content-form__label">
                        "Status"
                        <select
                            class="input"
                            prop:value=move || form_status.get()
                            on:change=move |ev| form_status.set(event_target_value(&ev))
                        >
                            <option value="draft">"Draft"</option>
                            <option value="published">"Published"</option>
                            <option value="archived">"Archived"</option>
                        </select>
                    </label>

                    <footer class="content-form__footer">
                        <button type="button" class="btn" on:click=on_close>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            {move || save_label(form_editing.get())}
                        </button>
                    </footer>
                </form>
            </div>
        </div>
    }
}

#[component]
fn ContentCard(item: ContentItem, on_edit: Callback<ContentItem>) -> impl IntoView {
    let edit_target = item.clone();

    view! {
        <article class="content-card">
            <header class="content-card__head">
                <h2>{item.title}</h2>
                <span class="content-card__kind">{item.kind.label()}</span>
                <span class="content-card__status">{item.status.label()}</span>
                <button class="btn content-card__edit" on:click=move |_| on_edit.run(edit_target.clone())>
                    "Edit"
                </button>
            </header>
            <p class="content-card__preview">{item.preview}</p>
            <footer class="content-card__foot">"Last modified " {item.last_modified}</footer>
        </article>
    }
}
