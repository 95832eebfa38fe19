//! Profile screen: identity summary and password change.
//!
//! The password update is a real provider call; everything else on this
//! screen is read-only identity data.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::validate::{PasswordChangeErrors, validate_password_change};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let display_name =
        move || session.get().identity.map(|i| i.display_name()).unwrap_or_default();
    let email = move || session.get().identity.map(|i| i.email).unwrap_or_default();

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <section class="profile-page__identity">
                <p class="profile-page__name">{display_name}</p>
                <p class="profile-page__email">{email}</p>
            </section>
            <section class="profile-page__password">
                <h2>"Change password"</h2>
                <PasswordForm/>
            </section>
        </div>
    }
}

/// Change-password form: validate locally, then call the provider.
#[component]
fn PasswordForm() -> impl IntoView {
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(PasswordChangeErrors::default());
    let general = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let field_errors = validate_password_change(
            &current_password.get(),
            &new_password.get(),
            &confirm_password.get(),
        );
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(PasswordChangeErrors::default());
        general.set(String::new());
        success.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let password_value = new_password.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::auth::update_password(&password_value).await {
                    Ok(()) => {
                        success.set("Password updated successfully".to_owned());
                        current_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                    }
                    Err(message) => general.set(message),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <form class="password-form" on:submit=on_submit>
            <Show when=move || !general.get().is_empty()>
                <p class="password-form__error">{move || general.get()}</p>
            </Show>
            <Show when=move || !success.get().is_empty()>
                <p class="password-form__success">{move || success.get()}</p>
            </Show>

            <label class="password-form__label">
                "Current Password"
                <input
                    class="input"
                    type="password"
                    prop:value=move || current_password.get()
                    on:input=move |ev| {
                        current_password.set(event_target_value(&ev));
                        errors.update(|e| e.current_password = None);
                    }
                />
                <Show when=move || errors.get().current_password.is_some()>
                    <p class="password-form__field-error">
                        {move || errors.get().current_password.unwrap_or_default()}
                    </p>
                </Show>
            </label>

            <label class="password-form__label">
                "New Password"
                <input
                    class="input"
                    type="password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| {
                        new_password.set(event_target_value(&ev));
                        errors.update(|e| e.new_password = None);
                    }
                />
                <Show when=move || errors.get().new_password.is_some()>
                    <p class="password-form__field-error">
                        {move || errors.get().new_password.unwrap_or_default()}
                    </p>
                </Show>
            </label>

            <label class="password-form__label">
                "Confirm New Password"
                <input
                    class="input"
                    type="password"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| {
                        confirm_password.set(event_target_value(&ev));
                        errors.update(|e| e.confirm_password = None);
                    }
                />
                <Show when=move || errors.get().confirm_password.is_some()>
                    <p class="password-form__field-error">
                        {move || errors.get().confirm_password.unwrap_or_default()}
                    </p>
                </Show>
            </label>

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Update Password" }}
            </button>
        </form>
    }
}
