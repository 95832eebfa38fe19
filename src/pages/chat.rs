//! Assistant test-chat screen over the local transcript state.
//!
//! Replies come from the chat backend, which this console does not call;
//! the transcript records only what the user typed.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Sender};

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get();
        let added = chat.try_update(|c| c.push_user(&text)).unwrap_or(false);
        if added {
            input.set(String::new());
        }
    };

    let on_reset = move |_| chat.update(ChatState::reset);

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"Chat"</h1>
                <button class="btn" on:click=on_reset title="Reset conversation">
                    "Reset"
                </button>
            </header>

            <div class="chat-page__transcript">
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|message| {
                            let bubble_class = match message.sender {
                                Sender::User => "chat-bubble chat-bubble--user",
                                Sender::Assistant => "chat-bubble chat-bubble--assistant",
                            };
                            view! { <div class=bubble_class>{message.text}</div> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <form class="chat-page__composer" on:submit=on_submit>
                <input
                    class="input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Send"
                </button>
            </form>
        </div>
    }
}
