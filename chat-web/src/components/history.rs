//! History banner

use leptos::prelude::*;
use lib_core::history::HistoryPanel;
use lib_core::notices;

use crate::state::chat::use_chat_context;

#[component]
pub fn HistoryBanner() -> impl IntoView {
    let ctx = use_chat_context();
    let (refreshing, set_refreshing) = signal(false);

    let on_refresh = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        set_refreshing.set(true);
        ctx.spawn(move |c| async move {
            c.refresh_history(true).await;
            set_refreshing.set(false);
        });
    };

    let body = move || match ctx.with(|s| s.history.clone()) {
        HistoryPanel::Loading => view! { <div class="tiny">{notices::HISTORY_LOADING}</div> }.into_any(),
        HistoryPanel::Refreshing => view! { <div class="tiny">{notices::HISTORY_REFRESHING}</div> }.into_any(),
        HistoryPanel::Failed => view! { <div class="tiny">{notices::HISTORY_FAILED}</div> }.into_any(),
        HistoryPanel::Cleared => view! { <div class="tiny">{notices::HISTORY_CLEARED}</div> }.into_any(),
        HistoryPanel::Empty => view! {
            <div class="empty-history">
                <div class="eh-title">{notices::HISTORY_EMPTY_TITLE}</div>
                <div class="eh-sub">{notices::HISTORY_EMPTY_SUB}</div>
            </div>
        }
        .into_any(),
        HistoryPanel::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                view! {
                    <div class="hb-row">
                        <div class=format!("hb-badge {}", row.role)>{row.badge}</div>
                        <div class="hb-text" inner_html=row.text_html></div>
                        <div class="hb-time" inner_html=row.ts_html></div>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="history-banner">
            <div class="hb-header">
                <span>"History"</span>
                <button class="refresh-history" disabled=move || refreshing.get() on:click=on_refresh>
                    "Refresh"
                </button>
            </div>
            <div class="history-list">{body}</div>
        </div>
    }
}
