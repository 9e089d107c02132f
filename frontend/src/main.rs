mod api;
mod components;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatWindow;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let config = api::config();
    log::info!("Chat endpoint: {}", config.endpoint);
    AppState::provide(config);

    view! {
        <div class="app-container">
            <ChatWindow />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
