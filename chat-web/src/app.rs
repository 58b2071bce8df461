//! Widget layout

use leptos::prelude::*;

use crate::components::{ChatWindow, Header, HistoryBanner, InputRow, Toolbar};
use crate::state::chat::provide_chat_context;

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_chat_context();

    // The theme is the sole class of the document body
    Effect::new(move || {
        let theme = ctx.with(|s| s.prefs.theme.clone());
        gloo_utils::body().set_class_name(&theme);
    });

    ctx.spawn(|c| async move { c.refresh_history(false).await });

    view! {
        <div class="chat-app">
            <Header/>
            <main class="chat-main">
                <section class="chat-pane">
                    <ChatWindow/>
                    <InputRow/>
                </section>
                <aside class="history-pane">
                    <HistoryBanner/>
                </aside>
            </main>
            <Toolbar/>
        </div>
    }
}
