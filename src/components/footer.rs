//! Fixed footer for the authenticated shell.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"SiteChat Console"</span>
            <span class="footer__links">
                <a class="link" href="/settings">"Settings"</a>
                <a class="link" href="/profile">"Profile"</a>
            </span>
        </footer>
    }
}
