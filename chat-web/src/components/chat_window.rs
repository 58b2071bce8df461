//! Chat window: bubbles, toasts and the typing indicator.

use leptos::{html, prelude::*};
use lib_core::notices;
use lib_core::session::{ChatMessage, MessageKind, Speaker};

use crate::services::speech::speak;
use crate::state::chat::use_chat_context;
use crate::utils::constants::{BOT_AVATAR, DEFAULT_USER_AVATAR, SPEAKER_ICON};

#[component]
pub fn ChatWindow() -> impl IntoView {
    let ctx = use_chat_context();
    let window_ref = NodeRef::<html::Div>::new();

    let messages = move || ctx.with(|s| s.transcript.clone());
    let typing = move || ctx.with(|s| s.is_typing());

    // Keep the latest message in view
    Effect::new(move || {
        ctx.with(|s| s.transcript.len());
        if let Some(el) = window_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    Effect::new(move || ctx.set_waiting_sound(typing()));

    view! {
        <div class="chat-window" node_ref=window_ref>
            <For each=messages key=|msg| msg.id let:msg>
                <Message msg=msg/>
            </For>
            <div class="typing-indicator" class:hidden=move || !typing()>
                <span></span><span></span><span></span>
            </div>
        </div>
    }
}

#[component]
fn Message(msg: ChatMessage) -> impl IntoView {
    let ctx = use_chat_context();

    match (msg.kind, msg.speaker) {
        (MessageKind::Toast, _) => view! { <div class="tiny toast" inner_html=msg.html></div> }.into_any(),

        (MessageKind::Bubble, Speaker::User) => {
            let avatar = move || {
                ctx.with(|s| s.prefs.avatar_url.clone())
                    .unwrap_or_else(|| DEFAULT_USER_AVATAR.to_string())
            };
            view! {
                <div class="msg user">
                    <div class="bubble">
                        <div class="text" inner_html=msg.html></div>
                    </div>
                    <img class="avatar" src=avatar alt="You"/>
                </div>
            }
            .into_any()
        }

        (MessageKind::Bubble, Speaker::Bot) => {
            let speech = msg.speech_text.unwrap_or_default();
            let on_speak = move |_| {
                if !speak(&speech) {
                    ctx.controller().toast(notices::TTS_UNSUPPORTED);
                }
            };
            let sources = msg
                .citations
                .into_iter()
                .map(|c| view! { <a href=c.url target="_blank" rel="noopener">"Source"</a> })
                .collect_view();

            view! {
                <div class="msg bot">
                    <img class="avatar" src=BOT_AVATAR alt="Bot"/>
                    <div class="bubble">
                        <div class="text" inner_html=msg.html></div>
                        <div class="citations">{sources}</div>
                        <button class="speak-btn" title="Read aloud" on:click=on_speak>
                            <img src=SPEAKER_ICON alt="Read aloud"/>
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
