//! Message input: send button, microphone and guided-mode suggestions.

use leptos::{ev, html, prelude::*};
use lib_core::voice::VoiceInput;
use shared::Mode;
use wasm_bindgen::JsCast;

use crate::components::clicked_outside;
use crate::services::voice;
use crate::state::chat::use_chat_context;

#[component]
pub fn InputRow() -> impl IntoView {
    let ctx = use_chat_context();
    let input_ref = NodeRef::<html::Input>::new();
    let list_ref = NodeRef::<html::Div>::new();
    let (suggest_open, set_suggest_open) = signal(false);
    // Typed text filters the list; focusing lists every heading
    let (query, set_query) = signal(String::new());
    let voice_input = StoredValue::new_local(voice::select(ctx));

    let guided = move || ctx.with(|s| s.mode == Mode::Guided);
    let draft = move || ctx.with(|s| s.draft.clone());
    let suggestions = move || {
        let query = query.get();
        ctx.tracked(|c| c.suggestions(&query))
    };

    let _ = window_event_listener(ev::click, move |ev| {
        let inside = [
            list_ref.get_untracked().map(|el| el.unchecked_into()),
            input_ref.get_untracked().map(|el| el.unchecked_into()),
        ];
        if clicked_outside(&ev, &inside) {
            set_suggest_open.set(false);
        }
    });

    let send = move || {
        set_suggest_open.set(false);
        ctx.send_draft();
    };

    let pick = move |heading: String| {
        ctx.controller().pick_suggestion(&heading);
        set_suggest_open.set(false);
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    view! {
        <div class="input-area">
            <div
                class="guided-suggestions"
                role="listbox"
                class:hidden=move || !(suggest_open.get() && guided())
                node_ref=list_ref
            >
                {move || {
                    suggestions()
                        .into_iter()
                        .map(|section| {
                            let heading = section.heading.clone();
                            view! {
                                <button
                                    class="sugg-item"
                                    role="option"
                                    title=section.heading.clone()
                                    on:click=move |_| pick(heading.clone())
                                >
                                    <span class="sugg-dot"></span>
                                    {section.heading.clone()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="input-row">
                <input
                    class="message-input"
                    type="text"
                    node_ref=input_ref
                    placeholder=move || ctx.tracked(|c| c.placeholder())
                    prop:value=draft
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        set_query.set(text.clone());
                        ctx.controller().set_draft(text);
                    }
                    on:focus=move |_| {
                        set_query.set(String::new());
                        if guided() {
                            set_suggest_open.set(true);
                        }
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            send();
                        }
                    }
                />
                <button
                    class="mic-btn"
                    title="Voice input"
                    class:on=move || ctx.voice.with(|v| v.active)
                    on:click=move |_| voice_input.with_value(|v| v.toggle())
                >
                    "🎤"
                </button>
                <button class="send-btn" on:click=move |_| send()>"Send"</button>
            </div>

            <div class="voice-status tiny">{move || ctx.voice.with(|v| v.line.clone())}</div>
        </div>
    }
}
