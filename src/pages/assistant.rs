//! Assistant configuration screen: local form state, no backend yet.

use leptos::prelude::*;

const EXPERTISE_OPTIONS: [&str; 6] = [
    "Technical Support",
    "Product Information",
    "Sales",
    "Customer Service",
    "General Knowledge",
    "Industry Specific",
];

#[component]
pub fn AssistantSettingsPage() -> impl IntoView {
    let name = RwSignal::new("Support Assistant".to_owned());
    let role = RwSignal::new("Customer Support Specialist".to_owned());
    let instructions = RwSignal::new(
        "You are a helpful customer support specialist. Always be polite and professional."
            .to_owned(),
    );
    let tone = RwSignal::new("professional".to_owned());
    let greeting = RwSignal::new("Hello! How can I assist you today?".to_owned());
    let expertise = RwSignal::new(vec![
        "Technical Support".to_owned(),
        "Customer Service".to_owned(),
    ]);

    let toggle_expertise = move |option: &'static str| {
        expertise.update(|selected| {
            if let Some(index) = selected.iter().position(|s| s == option) {
                selected.remove(index);
            } else {
                selected.push(option.to_owned());
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // No assistant backend yet; the payload goes nowhere.
        #[cfg(feature = "hydrate")]
        log::info!(
            "assistant settings saved: name={} tone={} expertise={:?}",
            name.get_untracked(),
            tone.get_untracked(),
            expertise.get_untracked()
        );
    };

    view! {
        <div class="assistant-page">
            <h1>"Assistant Settings"</h1>
            <form class="assistant-form" on:submit=on_submit>
                <label class="assistant-form__label">
                    "Assistant Name"
                    <input
                        class="input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="assistant-form__label">
                    "Role"
                    <input
                        class="input"
                        type="text"
                        prop:value=move || role.get()
                        on:input=move |ev| role.set(event_target_value(&ev))
                    />
                </label>
                <label class="assistant-form__label">
                    "Instructions"
                    <textarea
                        class="input"
                        rows="4"
                        prop:value=move || instructions.get()
                        on:input=move |ev| instructions.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="assistant-form__label">
                    "Tone"
                    <select
                        class="input"
                        prop:value=move || tone.get()
                        on:change=move |ev| tone.set(event_target_value(&ev))
                    >
                        <option value="professional">"Professional"</option>
                        <option value="friendly">"Friendly"</option>
                        <option value="casual">"Casual"</option>
                    </select>
                </label>
                <label class="assistant-form__label">
                    "Greeting"
                    <input
                        class="input"
                        type="text"
                        prop:value=move || greeting.get()
                        on:input=move |ev| greeting.set(event_target_value(&ev))
                    />
                </label>

                <fieldset class="assistant-form__expertise">
                    <legend>"Areas of Expertise"</legend>
                    {EXPERTISE_OPTIONS
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! {
                                <label class="assistant-form__checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            expertise.get().iter().any(|s| s == option)
                                        }
                                        on:change=move |_| toggle_expertise(option)
                                    />
                                    {option}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>

                <button class="btn btn--primary" type="submit">
                    "Save Settings"
                </button>
            </form>
        </div>
    }
}
