//! Single-website management view for the `/websites/:id` route.

#[cfg(test)]
#[path = "website_detail_test.rs"]
mod website_detail_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::data::{Website, find_website};

/// Tabs on the website management screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Overview,
    Widget,
    Analytics,
}

impl DetailTab {
    const ALL: [Self; 3] = [Self::Overview, Self::Widget, Self::Analytics];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Widget => "Chat Widget",
            Self::Analytics => "Analytics",
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "website-detail__tab website-detail__tab--active"
    } else {
        "website-detail__tab"
    }
}

#[component]
pub fn WebsiteDetailPage() -> impl IntoView {
    let params = use_params_map();
    let website = move || params.read().get("id").and_then(|id| find_website(&id));

    view! {
        <div class="website-detail">
            {move || match website() {
                Some(site) => view! { <WebsiteDetail site=site/> }.into_any(),
                None => view! {
                    <div>
                        <h1>"Website not found"</h1>
                        <a class="link" href="/websites">"Back to all websites"</a>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn WebsiteDetail(site: Website) -> impl IntoView {
    let tab = RwSignal::new(DetailTab::Overview);

    view! {
        <div>
            <header class="website-detail__header">
                <h1>{site.name}</h1>
                <span class=site.status.badge_class()>{site.status.label()}</span>
            </header>

            <nav class="website-detail__tabs">
                {DetailTab::ALL
                    .iter()
                    .map(|entry| {
                        let entry = *entry;
                        view! {
                            <button
                                class=move || tab_class(tab.get() == entry)
                                on:click=move |_| tab.set(entry)
                            >
                                {entry.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            {move || match tab.get() {
                DetailTab::Overview => view! {
                    <dl class="website-detail__facts">
                        <dt>"URL"</dt>
                        <dd>{site.url}</dd>
                        <dt>"Status"</dt>
                        <dd>{site.status.label()}</dd>
                    </dl>
                }
                .into_any(),
                DetailTab::Widget => view! {
                    <dl class="website-detail__facts">
                        <dt>"Embed"</dt>
                        <dd>
                            <code>
                                {format!("<script src=\"https://widget.sitechat.app/{}.js\"></script>", site.id)}
                            </code>
                        </dd>
                    </dl>
                }
                .into_any(),
                DetailTab::Analytics => view! {
                    <dl class="website-detail__facts">
                        <dt>"Visitors this week"</dt>
                        <dd>{site.visitors}</dd>
                    </dl>
                }
                .into_any(),
            }}

            <a class="link" href="/websites">"Back to all websites"</a>
        </div>
    }
}
