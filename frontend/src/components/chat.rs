use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use zus_chat::Message;

use crate::state::AppState;

/// Chat window with the message log and the input form.
#[component]
pub fn ChatWindow() -> impl IntoView {
    let state = expect_context::<AppState>();
    let conversation = state.conversation;
    let end_ref = NodeRef::<leptos::html::Div>::new();

    let log_len = Memo::new(move |_| conversation.with(|c| c.messages().len()));

    // Keep the newest message in view
    Effect::new(move || {
        log_len.track();
        if let Some(anchor) = end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            anchor.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    view! {
        <div class="chat-window">
            <div class="chat-header">"ZUsCoffee Chat"</div>

            <div class="messages-container">
                <For
                    each=move || {
                        conversation.with(|c| {
                            c.messages().iter().cloned().enumerate().collect::<Vec<_>>()
                        })
                    }
                    key=|(index, _)| *index
                    let:entry
                >
                    <MessageBubble message=entry.1 />
                </For>
                <div class="messages-end" node_ref=end_ref></div>
            </div>

            <ChatInput />
        </div>
    }
}

/// A single chat message bubble.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let row_class = if message.is_user() {
        "message-row user"
    } else {
        "message-row bot"
    };

    view! {
        <div class=row_class>
            <div class="message">{message.text().to_owned()}</div>
        </div>
    }
}

/// Chat input form with text field and send button.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let conversation = state.conversation;

    let input = move || conversation.with(|c| c.input().to_owned());
    let is_blank = move || conversation.with(|c| c.input().trim().is_empty());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.send_message();
    };

    view! {
        <form class="input-area" on:submit=on_submit>
            <input
                type="text"
                placeholder="Type a message..."
                prop:value=input
                on:input=move |ev| state.set_input(event_target_value(&ev))
            />
            <button type="submit" class="send-btn" disabled=is_blank>
                "Send"
            </button>
        </form>
    }
}
