//! Workspace settings: billing details form and credit packages.
//!
//! Card fields normalize as the user types via the pure formatters in
//! [`crate::util::format`]. There is no payment backend; saving and
//! package selection only log.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::data::{CreditPackage, credit_packages};
use crate::util::format::{format_card_number, format_cvc, format_expiry};

fn package_class(popular: bool, selected: bool) -> &'static str {
    match (popular, selected) {
        (true, true) => "credit-package credit-package--popular credit-package--selected",
        (true, false) => "credit-package credit-package--popular",
        (false, true) => "credit-package credit-package--selected",
        (false, false) => "credit-package",
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <section class="settings-page__billing">
                <h2>"Billing"</h2>
                <BillingForm/>
            </section>
            <section class="settings-page__credits">
                <h2>"Credit Packages"</h2>
                <CreditPackages/>
            </section>
        </div>
    }
}

#[component]
fn BillingForm() -> impl IntoView {
    let card_holder = RwSignal::new(String::new());
    let card_number = RwSignal::new(String::new());
    let expiry = RwSignal::new(String::new());
    let cvc = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // No billing backend; nothing leaves the browser.
        #[cfg(feature = "hydrate")]
        log::info!("billing details saved for {}", card_holder.get_untracked());
    };

    view! {
        <form class="billing-form" on:submit=on_submit>
            <label class="billing-form__label">
                "Cardholder Name"
                <input
                    class="input"
                    type="text"
                    prop:value=move || card_holder.get()
                    on:input=move |ev| card_holder.set(event_target_value(&ev))
                />
            </label>
            <label class="billing-form__label">
                "Card Number"
                <input
                    class="input"
                    type="text"
                    inputmode="numeric"
                    placeholder="4242 4242 4242 4242"
                    prop:value=move || card_number.get()
                    on:input=move |ev| {
                        card_number.set(format_card_number(&event_target_value(&ev)));
                    }
                />
            </label>
            <div class="billing-form__row">
                <label class="billing-form__label">
                    "Expiry"
                    <input
                        class="input"
                        type="text"
                        inputmode="numeric"
                        placeholder="MM/YY"
                        prop:value=move || expiry.get()
                        on:input=move |ev| expiry.set(format_expiry(&event_target_value(&ev)))
                    />
                </label>
                <label class="billing-form__label">
                    "CVC"
                    <input
                        class="input"
                        type="text"
                        inputmode="numeric"
                        placeholder="123"
                        prop:value=move || cvc.get()
                        on:input=move |ev| cvc.set(format_cvc(&event_target_value(&ev)))
                    />
                </label>
            </div>
            <button class="btn btn--primary" type="submit">
                "Save Billing Details"
            </button>
        </form>
    }
}

#[component]
fn CreditPackages() -> impl IntoView {
    let selected = RwSignal::new(None::<&'static str>);

    view! {
        <div class="settings-page__packages">
            {credit_packages()
                .into_iter()
                .map(|package| view! { <CreditPackageCard package=package selected=selected/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn CreditPackageCard(package: CreditPackage, selected: RwSignal<Option<&'static str>>) -> impl IntoView {
    let name = package.name;

    let on_select = move |_| {
        selected.set(Some(name));
        // No purchase backend; the choice only logs.
        #[cfg(feature = "hydrate")]
        log::info!("credit package selected: {name}");
    };

    view! {
        <div class=move || package_class(package.popular, selected.get() == Some(name))>
            <Show when=move || package.popular>
                <span class="credit-package__badge">"Most Popular"</span>
            </Show>
            <h3>{package.name}</h3>
            <p class="credit-package__price">"$" {package.price} <span>"/one-time"</span></p>
            <p class="credit-package__credits">{package.credits} " credits"</p>
            <ul class="credit-package__features">
                {package
                    .features
                    .iter()
                    .map(|feature| view! { <li>{*feature}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <button class="btn" on:click=on_select>
                "Select Package"
            </button>
        </div>
    }
}
