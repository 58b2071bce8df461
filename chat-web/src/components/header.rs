//! Header: version navigation, mode switch and the settings menu.

use std::str::FromStr;

use leptos::{ev, html, prelude::*};
use lib_core::{notices, WidgetConfig};
use shared::Mode;
use wasm_bindgen::JsCast;

use crate::components::clicked_outside;
use crate::state::chat::use_chat_context;
use crate::utils::url::{confirm, navigate};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_chat_context();
    let config = ctx.config();
    let current_version = ctx.controller().with_state(|s| s.version.clone());

    let (menu_open, set_menu_open) = signal(false);
    let menu_ref = NodeRef::<html::Div>::new();
    let button_ref = NodeRef::<html::Button>::new();

    let _ = window_event_listener(ev::click, move |ev| {
        let inside = [
            menu_ref.get_untracked().map(|el| el.unchecked_into()),
            button_ref.get_untracked().map(|el| el.unchecked_into()),
        ];
        if clicked_outside(&ev, &inside) {
            set_menu_open.set(false);
        }
    });

    let on_version = move |ev| {
        let slug = event_target_value(&ev);
        navigate(&WidgetConfig::version_path(&slug));
    };

    let on_mode = move |ev| {
        if let Ok(mode) = Mode::from_str(&event_target_value(&ev)) {
            ctx.spawn(move |c| async move { c.set_mode(mode).await });
        }
    };

    let on_theme = move |ev| ctx.controller().set_theme(&event_target_value(&ev));

    let on_clear = move |_| {
        if confirm(notices::CLEAR_CONFIRM) {
            ctx.spawn(|c| async move {
                c.clear_history().await;
            });
        }
    };

    let on_close_account = move |_| {
        if confirm(notices::CLOSE_CONFIRM) {
            ctx.spawn(|c| async move {
                if let Some(path) = c.delete_account().await {
                    navigate(path);
                }
            });
        }
    };

    let current_theme = move || ctx.with(|s| s.prefs.theme.clone());

    let versions = config
        .versions
        .iter()
        .map(|v| {
            let selected = v.value == current_version;
            view! { <option value=v.value.clone() selected=selected>{v.label.clone()}</option> }
        })
        .collect_view();

    let themes = config
        .themes
        .into_iter()
        .map(|t| {
            let value = t.value.clone();
            view! {
                <option value=t.value selected=move || current_theme() == value>{t.label}</option>
            }
        })
        .collect_view();

    view! {
        <header class="chat-header">
            <div class="brand">"Release Notes Assistant"</div>

            <select class="version-select" aria-label="Version" on:change=on_version>
                {versions}
            </select>

            <select class="mode-select" aria-label="Mode" on:change=on_mode>
                <option value=Mode::Quick.as_str()>"Quick"</option>
                <option value=Mode::Guided.as_str()>"Guided"</option>
            </select>

            <div class="config">
                <button
                    class="config-btn"
                    title="Settings"
                    aria-haspopup="true"
                    aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                    node_ref=button_ref
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "⚙"
                </button>

                <div class="config-menu" class:open=move || menu_open.get() node_ref=menu_ref>
                    <label class="tiny">"Theme"</label>
                    <select class="theme-select" on:change=on_theme>
                        {themes}
                    </select>
                    <button class="menu-item" on:click=on_clear>"Clear history"</button>
                    <button class="menu-item danger" on:click=on_close_account>"Close account"</button>
                </div>
            </div>
        </header>
    }
}
