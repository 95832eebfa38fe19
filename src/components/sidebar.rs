//! Collapsible side menu with active-route highlighting.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

const MENU_ITEMS: [(&str, &str); 6] = [
    ("Websites", "/websites"),
    ("Create Website", "/websites/create"),
    ("Content", "/content"),
    ("Pages", "/pages"),
    ("Chat", "/chat"),
    ("Assistant Settings", "/assistant-settings"),
];

/// Whether a menu entry matches the current path, including sub-routes.
fn is_active(path: &str, href: &str) -> bool {
    path == href || path.starts_with(&format!("{href}/"))
}

fn item_class(active: bool) -> &'static str {
    if active { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<crate::state::ui::UiState>>();
    let location = use_location();

    let aside_class = move || {
        if ui.get().sidebar_open { "sidebar sidebar--open" } else { "sidebar" }
    };

    view! {
        <aside class=aside_class>
            <nav class="sidebar__nav">
                {MENU_ITEMS
                    .iter()
                    .map(|(label, href)| {
                        let label = *label;
                        let href = *href;
                        let pathname = location.pathname;
                        view! {
                            <a
                                href=href
                                class=move || item_class(is_active(&pathname.get(), href))
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
