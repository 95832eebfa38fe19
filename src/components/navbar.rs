//! Top navigation bar: sidebar toggle, website switcher, profile menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::data::mock_websites;
use crate::state::session::{AuthEvents, SessionState};
use crate::state::ui::UiState;

fn dropdown_class(open: bool, extra: &'static str) -> String {
    if open {
        format!("navbar__dropdown {extra}")
    } else {
        format!("navbar__dropdown navbar__dropdown--hidden {extra}")
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let events = expect_context::<AuthEvents>();
    let navigate = use_navigate();

    let site_menu_open = RwSignal::new(false);
    let profile_menu_open = RwSignal::new(false);
    let signing_out = RwSignal::new(false);

    let display_name = move || {
        session
            .get()
            .identity
            .map(|identity| identity.display_name())
            .unwrap_or_default()
    };

    let on_toggle_sidebar = move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open);
    let on_toggle_panel = move |_| ui.update(|u| u.right_panel_open = !u.right_panel_open);

    let on_sign_out = move |_| {
        if signing_out.get() {
            return;
        }
        signing_out.set(true);
        profile_menu_open.set(false);
        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            leptos::task::spawn_local(async move {
                if let Err(message) = crate::net::auth::sign_out().await {
                    log::warn!("sign-out request failed: {message}");
                }
                // The local token is gone either way; the session ends.
                events.emit(None);
                signing_out.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &events;
        }
    };

    let navigate_site = navigate.clone();
    let navigate_profile = navigate.clone();
    let navigate_settings = navigate;

    view! {
        <nav class="navbar">
            <button class="navbar__menu-toggle" on:click=on_toggle_sidebar title="Toggle sidebar">
                "☰"
            </button>
            <span class="navbar__brand">"SiteChat"</span>

            <div class="navbar__site-switcher">
                <button
                    class="navbar__dropdown-toggle"
                    on:click=move |_| site_menu_open.update(|open| *open = !*open)
                >
                    "Websites ▾"
                </button>
                <ul class=move || dropdown_class(site_menu_open.get(), "navbar__dropdown--sites")>
                    {mock_websites()
                        .into_iter()
                        .map(|site| {
                            let navigate = navigate_site.clone();
                            view! {
                                <li>
                                    <button
                                        class="navbar__dropdown-item"
                                        on:click=move |_| {
                                            site_menu_open.set(false);
                                            navigate(
                                                &format!("/websites/{}", site.id),
                                                NavigateOptions::default(),
                                            );
                                        }
                                    >
                                        <span class="navbar__site-name">{site.name}</span>
                                        <span class="navbar__site-url">{site.url}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>

            <span class="navbar__spacer"></span>

            <button class="navbar__panel-toggle" on:click=on_toggle_panel title="Toggle panel">
                "◧"
            </button>

            <div class="navbar__profile">
                <button
                    class="navbar__dropdown-toggle"
                    on:click=move |_| profile_menu_open.update(|open| *open = !*open)
                >
                    {display_name}
                    " ▾"
                </button>
                <ul class=move || dropdown_class(profile_menu_open.get(), "navbar__dropdown--right")>
                    <li>
                        <button
                            class="navbar__dropdown-item"
                            on:click=move |_| {
                                profile_menu_open.set(false);
                                navigate_profile("/profile", NavigateOptions::default());
                            }
                        >
                            "Profile"
                        </button>
                    </li>
                    <li>
                        <button
                            class="navbar__dropdown-item"
                            on:click=move |_| {
                                profile_menu_open.set(false);
                                navigate_settings("/settings", NavigateOptions::default());
                            }
                        >
                            "Settings"
                        </button>
                    </li>
                    <li>
                        <button
                            class="navbar__dropdown-item"
                            disabled=move || signing_out.get()
                            on:click=on_sign_out
                        >
                            {move || if signing_out.get() { "Signing out..." } else { "Sign out" }}
                        </button>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
