//! Unauthenticated flow: login and signup forms with a pure UI toggle.
//!
//! ERROR HANDLING
//! ==============
//! Field validation renders inline next to the offending input; provider
//! failures render as one general message above the form, verbatim, with no
//! automatic retry. Each form disables its submit control while its own
//! request is pending, so at most one auth call is in flight.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::session::AuthEvents;
use crate::state::ui::{AuthScreen, UiState};
use crate::util::validate::{
    LoginErrors, PasswordStrength, SignupErrors, SignupInput, password_strength, validate_login,
    validate_signup,
};

/// Input class switching to the error border when the field has one.
fn field_class(has_error: bool) -> &'static str {
    if has_error { "input input--error" } else { "input" }
}

/// Fill class for the cosmetic strength meter under the signup password.
fn strength_fill_class(strength: PasswordStrength) -> &'static str {
    match strength {
        PasswordStrength::Weak => "strength-bar__fill strength-bar__fill--weak",
        PasswordStrength::Medium => "strength-bar__fill strength-bar__fill--medium",
        PasswordStrength::Strong => "strength-bar__fill strength-bar__fill--strong",
    }
}

/// Unauthenticated landing screen toggling between login and signup.
#[component]
pub fn AuthPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="auth-layout">
            <div class="auth-card">
                <h1 class="auth-card__brand">"SiteChat Console"</h1>
                {move || match ui.get().auth_screen {
                    AuthScreen::Login => view! { <LoginForm/> }.into_any(),
                    AuthScreen::Signup => view! { <SignupForm/> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Email + password sign-in.
#[component]
fn LoginForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let events = expect_context::<AuthEvents>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let general = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let field_errors = validate_login(&email.get(), &password.get());
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(LoginErrors::default());
        general.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            let email_value = email.get_untracked().trim().to_owned();
            let password_value = password.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::auth::sign_in(&email_value, &password_value).await {
                    Ok(identity) => events.emit(Some(identity)),
                    Err(message) => general.set(message),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &events;
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Sign in"</h2>
            <Show when=move || !general.get().is_empty()>
                <p class="auth-form__general-error">{move || general.get()}</p>
            </Show>

            <label class="auth-form__label">
                "Email address"
                <input
                    class=move || field_class(errors.get().email.is_some())
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        errors.update(|e| e.email = None);
                        general.set(String::new());
                    }
                />
                <Show when=move || errors.get().email.is_some()>
                    <p class="auth-form__field-error">
                        {move || errors.get().email.unwrap_or_default()}
                    </p>
                </Show>
            </label>

            <label class="auth-form__label">
                "Password"
                <input
                    class=move || field_class(errors.get().password.is_some())
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        errors.update(|e| e.password = None);
                        general.set(String::new());
                    }
                />
                <Show when=move || errors.get().password.is_some()>
                    <p class="auth-form__field-error">
                        {move || errors.get().password.unwrap_or_default()}
                    </p>
                </Show>
            </label>

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Sign in" }}
            </button>

            <p class="auth-form__switch">
                "Don't have an account? "
                <button
                    type="button"
                    class="link"
                    on:click=move |_| ui.update(|u| u.auth_screen = AuthScreen::Signup)
                >
                    "Create one"
                </button>
            </p>
        </form>
    }
}

/// Account creation with inline validation and a cosmetic strength meter.
#[component]
fn SignupForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let events = expect_context::<AuthEvents>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let accept_terms = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(SignupErrors::default());
    let general = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = SignupInput {
            full_name: full_name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            accept_terms: accept_terms.get(),
        };
        let field_errors = validate_signup(&input);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(SignupErrors::default());
        general.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::sign_up(&input.email, &input.password, &input.full_name)
                    .await
                {
                    Ok(identity) => events.emit(Some(identity)),
                    Err(message) => general.set(message),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&events, input);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Create account"</h2>
            <Show when=move || !general.get().is_empty()>
                <p class="auth-form__general-error">{move || general.get()}</p>
            </Show>

            <label class="auth-form__label">
                "Full name"
                <input
                    class=move || field_class(errors.get().full_name.is_some())
                    type="text"
                    prop:value=move || full_name.get()
                    on:input=move |ev| {
                        full_name.set(event_target_value(&ev));
                        errors.update(|e| e.full_name = None);
                        general.set(String::new());
                    }
                />
                <Show when=move || errors.get().full_name.is_some()>
                    <p class="auth-form__field-error">
                        {move || errors.get().full_name.unwrap_or_default()}
                    </p>
                </Show>
            </label>

            <label class="auth-form__label">
                "Email address"
                <input
                    class=move || field_class(errors.get().email.is_some())
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        errors.update(|e| e.email = None);
                        general.set(String::new());
                    }
                />
                <Show when=move || errors.get().email.is_some()>
                    <p class="auth-form__field-error">
                        {move || errors.get().email.unwrap_or_default()}
                    </p>
                </Show>
            </label>

            <label class="auth-form__label">
                "Password"
                <div class="auth-form__password">
                    <input
                        class=move || field_class(errors.get().password.is_some())
                        type=move || if show_password.get() { "text" } else { "password" }
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            errors.update(|e| e.password = None);
                            general.set(String::new());
                        }
                    />
                    <button
                        type="button"
                        class="auth-form__reveal"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                <Show when=move || !password.get().is_empty()>
                    <div class="strength-bar">
                        <div class=move || strength_fill_class(password_strength(&password.get()))>
                        </div>
                    </div>
                    <p class="strength-bar__label">
                        "Password strength: "
                        {move || password_strength(&password.get()).label()}
                    </p>
                </Show>
                <Show when=move || errors.get().password.is_some()>
                    <p class="auth-form__field-error">
                        {move || errors.get().password.unwrap_or_default()}
                    </p>
                </Show>
            </label>

            <label class="auth-form__label">
                "Confirm password"
                <input
                    class=move || field_class(errors.get().confirm_password.is_some())
                    type=move || if show_password.get() { "text" } else { "password" }
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| {
                        confirm_password.set(event_target_value(&ev));
                        errors.update(|e| e.confirm_password = None);
                        general.set(String::new());
                    }
                />
                <Show when=move || errors.get().confirm_password.is_some()>
                    <p class="auth-form__field-error">
                        {move || errors.get().confirm_password.unwrap_or_default()}
                    </p>
                </Show>
            </label>

            <label class="auth-form__terms">
                <input
                    type="checkbox"
                    prop:checked=move || accept_terms.get()
                    on:change=move |ev| {
                        accept_terms.set(event_target_checked(&ev));
                        errors.update(|e| e.terms = None);
                    }
                />
                "I accept the Terms and Conditions and Privacy Policy"
            </label>
            <Show when=move || errors.get().terms.is_some()>
                <p class="auth-form__field-error">
                    {move || errors.get().terms.unwrap_or_default()}
                </p>
            </Show>

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Creating account..." } else { "Create account" }}
            </button>

            <p class="auth-form__switch">
                "Already have an account? "
                <button
                    type="button"
                    class="link"
                    on:click=move |_| ui.update(|u| u.auth_screen = AuthScreen::Login)
                >
                    "Sign in"
                </button>
            </p>
        </form>
    }
}
