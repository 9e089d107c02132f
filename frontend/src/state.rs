use leptos::prelude::*;
use leptos::task::spawn_local;
use zus_chat::{ChatConfig, Conversation};

use crate::api::HttpChatClient;

/// Chat window state, provided via Leptos context.
///
/// The conversation lives in one signal owned by the mounted window; it is
/// disposed together with the component tree.
#[derive(Clone, Copy)]
pub struct AppState {
    pub conversation: RwSignal<Conversation>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide(config: ChatConfig) -> Self {
        let state = Self {
            conversation: RwSignal::new(Conversation::new(config)),
        };
        provide_context(state);
        state
    }

    pub fn set_input(&self, text: String) {
        self.conversation.update(|c| c.on_input_change(text));
    }

    /// Submit the input buffer and post it to the chat endpoint.
    ///
    /// Requests are fire-and-forget: a reply that settles after the window
    /// was unmounted is dropped.
    pub fn send_message(&self) {
        let Some(submission) = self.conversation.try_update(Conversation::submit).flatten() else {
            return;
        };

        let conversation = self.conversation;
        let endpoint = conversation.with_untracked(|c| c.config().endpoint.clone());
        let client = HttpChatClient::new(endpoint);

        spawn_local(async move {
            let settlement = submission.dispatch(&client).await;
            let id = settlement.id;
            let settled = conversation.try_update(|c| {
                c.settle(settlement);
            });
            if settled.is_none() {
                log::debug!("Chat window unmounted before reply {id} settled; dropping it");
            }
        });
    }
}
