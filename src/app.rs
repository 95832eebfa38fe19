//! Root application component: session bootstrap, auth gate, and routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate renders exactly one of three things: a loading screen while the
//! first session check is in flight, the login/signup flow when no identity
//! is present, or the authenticated shell with the routed content area. The
//! session store is written only by the auth-state subscription installed
//! here; it is unsubscribed on teardown.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::right_panel::RightPanel;
use crate::components::sidebar::Sidebar;
use crate::pages::assistant::AssistantSettingsPage;
use crate::pages::auth::AuthPage;
use crate::pages::chat::ChatPage;
use crate::pages::content::ContentPage;
use crate::pages::pages::PagesPage;
use crate::pages::profile::ProfilePage;
use crate::pages::settings::SettingsPage;
use crate::pages::website_create::WebsiteCreatePage;
use crate::pages::website_detail::WebsiteDetailPage;
use crate::pages::websites::WebsiteListPage;
use crate::state::chat::ChatState;
use crate::state::session::{AuthEvents, Gate, SessionState};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, kicks off the initial session check,
/// and routes on the session gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // A missing provider endpoint/key must never degrade into a client
    // quietly talking to a placeholder; stop at a configuration error.
    if let Err(message) = crate::config::provider_config() {
        return view! {
            <div class="config-error">
                <h1>"Configuration error"</h1>
                <p>{message}</p>
            </div>
        }
        .into_any();
    }

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());
    let auth_events = AuthEvents::new();

    provide_context(session);
    provide_context(ui);
    provide_context(chat);
    provide_context(auth_events.clone());

    // Single writer for the session store. Torn down with the gate so a
    // late event can never write into a discarded store.
    let subscription = auth_events.subscribe(move |identity| {
        session.update(|s| s.apply_auth_change(identity));
    });
    on_cleanup(move || subscription.unsubscribe());

    // Initial session check; a failed fetch resolves to signed-out.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let identity = crate::net::auth::fetch_session().await;
        session.update(|s| s.resolve(identity));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sitechat-console.css"/>
        <Title text="SiteChat Console"/>

        {move || match session.get().gate() {
            Gate::Loading => view! {
                <div class="loading-screen">
                    <div class="loading-screen__spinner" aria-hidden="true"></div>
                    <p>"Loading..."</p>
                </div>
            }
            .into_any(),
            Gate::SignedOut => view! { <AuthPage/> }.into_any(),
            Gate::SignedIn => view! { <AppShell/> }.into_any(),
        }}
    }
    .into_any()
}

/// Authenticated shell: navigation chrome around the routed content area.
#[component]
fn AppShell() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let main_class = move || {
        if ui.get().sidebar_open {
            "app-shell__main app-shell__main--sidebar"
        } else {
            "app-shell__main"
        }
    };

    view! {
        <Router>
            <div class="app-shell">
                <Navbar/>
                <Sidebar/>
                <main class=main_class>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <Redirect path="/websites"/> }
                        />
                        <Route path=StaticSegment("websites") view=WebsiteListPage/>
                        <Route
                            path=(StaticSegment("websites"), StaticSegment("create"))
                            view=WebsiteCreatePage
                        />
                        <Route
                            path=(StaticSegment("websites"), ParamSegment("id"))
                            view=WebsiteDetailPage
                        />
                        <Route path=StaticSegment("content") view=ContentPage/>
                        <Route path=StaticSegment("pages") view=PagesPage/>
                        <Route path=StaticSegment("chat") view=ChatPage/>
                        <Route path=StaticSegment("assistant-settings") view=AssistantSettingsPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                    </Routes>
                </main>
                <RightPanel/>
                <Footer/>
            </div>
        </Router>
    }
}
