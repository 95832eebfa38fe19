//! Website-creation wizard page: stepper chrome around the wizard state
//! machine in [`crate::state::wizard`].
//!
//! The draft lives in a page-local signal, so navigating away discards it;
//! there is no cross-visit persistence. Submitting hands the payload to the
//! website-creation collaborator and returns to the list without waiting for
//! an outcome.

#[cfg(test)]
#[path = "website_create_test.rs"]
mod website_create_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::wizard::{WizardState, WizardStep};

/// Badge class for a stepper entry relative to the current step.
fn step_badge_class(current: WizardStep, step: WizardStep) -> &'static str {
    if current.number() > step.number() {
        "stepper__badge stepper__badge--done"
    } else if current == step {
        "stepper__badge stepper__badge--active"
    } else {
        "stepper__badge"
    }
}

/// Connector line class between a step and its successor.
fn connector_class(current: WizardStep, step: WizardStep) -> &'static str {
    if current.number() > step.number() + 1 {
        "stepper__connector stepper__connector--done"
    } else {
        "stepper__connector"
    }
}

#[component]
pub fn WebsiteCreatePage() -> impl IntoView {
    let wizard = RwSignal::new(WizardState::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Reachable only from the Confirm step; a submit fired anywhere else
        // is a no-op.
        let Some(payload) = wizard.get_untracked().creation_payload() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        match serde_json::to_string(&payload) {
            Ok(json) => log::info!("creating website: {json}"),
            Err(err) => log::warn!("could not serialize creation payload: {err}"),
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
        navigate("/websites", NavigateOptions::default());
    };

    let on_back = move |_| wizard.update(WizardState::back);
    let on_next = move |_| wizard.update(WizardState::next);

    view! {
        <div class="wizard-page">
            <h1>"Create New Website"</h1>

            <div class="stepper">
                {WizardStep::ALL
                    .iter()
                    .map(|step| {
                        let step = *step;
                        view! {
                            <div class="stepper__entry">
                                <div class=move || step_badge_class(wizard.get().step, step)>
                                    {move || {
                                        if wizard.get().step.number() > step.number() {
                                            "✓".to_owned()
                                        } else {
                                            step.number().to_string()
                                        }
                                    }}
                                </div>
                                <div class="stepper__meta">
                                    <div class="stepper__title">{step.title()}</div>
                                    <div class="stepper__description">{step.description()}</div>
                                </div>
                            </div>
                            <Show when=move || step.next().is_some()>
                                <div class=move || connector_class(wizard.get().step, step)></div>
                            </Show>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <form class="wizard-form" on:submit=on_submit>
                {move || match wizard.get().step {
                    WizardStep::BasicInfo => view! { <BasicInfoStep wizard=wizard/> }.into_any(),
                    WizardStep::Configuration => {
                        view! { <ConfigurationStep wizard=wizard/> }.into_any()
                    }
                    WizardStep::Appearance => view! { <AppearanceStep wizard=wizard/> }.into_any(),
                    WizardStep::Confirm => view! { <ConfirmStep wizard=wizard/> }.into_any(),
                }}

                <div class="wizard-form__actions">
                    <button
                        type="button"
                        class="btn"
                        disabled=move || wizard.get().step == WizardStep::BasicInfo
                        on:click=on_back
                    >
                        "Back"
                    </button>
                    {move || {
                        if wizard.get().step == WizardStep::Confirm {
                            view! {
                                <button type="submit" class="btn btn--primary">
                                    "Create Website"
                                </button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <button type="button" class="btn btn--primary" on:click=on_next>
                                    "Next"
                                </button>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </form>
        </div>
    }
}

/// Step 1: website details and URL.
#[component]
fn BasicInfoStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="wizard-step">
            <label class="wizard-step__label">
                "Website Name"
                <input
                    class="input"
                    type="text"
                    prop:value=move || wizard.get().fields.name
                    on:input=move |ev| {
                        wizard.update(|w| w.apply_edit("name", &event_target_value(&ev)));
                    }
                />
            </label>
            <label class="wizard-step__label">
                "Website URL"
                <input
                    class="input"
                    type="url"
                    prop:value=move || wizard.get().fields.url
                    on:input=move |ev| {
                        wizard.update(|w| w.apply_edit("url", &event_target_value(&ev)));
                    }
                />
            </label>
            <label class="wizard-step__label">
                "Description"
                <textarea
                    class="input"
                    rows="3"
                    prop:value=move || wizard.get().fields.description
                    on:input=move |ev| {
                        wizard.update(|w| w.apply_edit("description", &event_target_value(&ev)));
                    }
                ></textarea>
            </label>
        </div>
    }
}

/// Step 2: chat widget settings.
#[component]
fn ConfigurationStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="wizard-step">
            <label class="wizard-step__label">
                "Chat Widget Title"
                <input
                    class="input"
                    type="text"
                    prop:value=move || wizard.get().fields.chat_title
                    on:input=move |ev| {
                        wizard.update(|w| w.apply_edit("chat_title", &event_target_value(&ev)));
                    }
                />
            </label>
            <label class="wizard-step__label">
                "Welcome Message"
                <textarea
                    class="input"
                    rows="3"
                    prop:value=move || wizard.get().fields.welcome_message
                    on:input=move |ev| {
                        wizard
                            .update(|w| w.apply_edit("welcome_message", &event_target_value(&ev)));
                    }
                ></textarea>
            </label>
        </div>
    }
}

/// Step 3: widget appearance.
#[component]
fn AppearanceStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="wizard-step">
            <label class="wizard-step__label">
                "Primary Color"
                <div class="wizard-step__color-row">
                    <input
                        class="wizard-step__color-swatch"
                        type="color"
                        prop:value=move || wizard.get().fields.primary_color
                        on:input=move |ev| {
                            wizard
                                .update(|w| w.apply_edit("primary_color", &event_target_value(&ev)));
                        }
                    />
                    <input
                        class="input"
                        type="text"
                        prop:value=move || wizard.get().fields.primary_color
                        on:input=move |ev| {
                            wizard
                                .update(|w| w.apply_edit("primary_color", &event_target_value(&ev)));
                        }
                    />
                </div>
            </label>
            <label class="wizard-step__label">
                "Widget Position"
                <select
                    class="input"
                    prop:value=move || wizard.get().fields.position.value()
                    on:change=move |ev| {
                        wizard.update(|w| w.apply_edit("position", &event_target_value(&ev)));
                    }
                >
                    <option value="left">"Bottom Left"</option>
                    <option value="right">"Bottom Right"</option>
                </select>
            </label>
        </div>
    }
}

/// Step 4: review before creation.
#[component]
fn ConfirmStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="wizard-step wizard-step--review">
            <h3>"Review Your Settings"</h3>
            <dl class="wizard-review">
                <dt>"Website Name"</dt>
                <dd>{move || wizard.get().fields.name}</dd>
                <dt>"Website URL"</dt>
                <dd>{move || wizard.get().fields.url}</dd>
                <dt>"Chat Title"</dt>
                <dd>{move || wizard.get().fields.chat_title}</dd>
                <dt>"Widget Position"</dt>
                <dd>{move || wizard.get().fields.position.label()}</dd>
            </dl>
        </div>
    }
}
