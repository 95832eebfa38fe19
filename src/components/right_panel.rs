//! Slide-in auxiliary panel on the right edge of the shell.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn RightPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let panel_class = move || {
        if ui.get().right_panel_open {
            "right-panel right-panel--open"
        } else {
            "right-panel"
        }
    };

    let on_close = move |_| ui.update(|u| u.right_panel_open = false);

    view! {
        <aside class=panel_class>
            <header class="right-panel__header">
                <h3>"Details"</h3>
                <button class="right-panel__close" on:click=on_close title="Close panel">
                    "×"
                </button>
            </header>
            <div class="right-panel__body">
                <p>"Contextual details for the current screen appear here."</p>
            </div>
        </aside>
    }
}
