//! Export, share and avatar controls

use leptos::{html, prelude::*};
use lib_core::export::Download;
use lib_core::share::ShareTarget;
use web_sys::Blob;

use crate::services::download;
use crate::state::chat::use_chat_context;
use crate::utils::constants::DEFAULT_USER_AVATAR;
use crate::utils::url::open_in_new_tab;

fn hand_over(file: &Download) {
    if let Err(err) = download::save(file) {
        log::warn!("download of {} failed: {:?}", file.file_name, err);
    }
}

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_chat_context();
    let avatar_input = NodeRef::<html::Input>::new();

    let on_json = move |_| {
        ctx.spawn(|c| async move {
            match c.export_json(lib_utils::now_utc()).await {
                Ok(file) => hand_over(&file),
                Err(err) => log::warn!("could not serialize conversation: {}", err),
            }
        });
    };

    let on_pdf = move |_| {
        ctx.spawn(|c| async move {
            if let Some(file) = c.export_pdf().await {
                hand_over(&file);
            }
        });
    };

    let share = move |target: ShareTarget| open_in_new_tab(&ctx.controller().share_url(target));

    let on_avatar_picked = move |_| {
        let Some(input) = avatar_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");
        ctx.spawn(move |c| async move { c.upload_avatar(Blob::from(file)).await });
    };

    let avatar = move || {
        ctx.with(|s| s.prefs.avatar_url.clone())
            .unwrap_or_else(|| DEFAULT_USER_AVATAR.to_string())
    };

    view! {
        <footer class="toolbar">
            <div class="profile">
                <img class="user-avatar" src=avatar alt="Your photo"/>
                <button
                    class="btn-small"
                    on:click=move |_| {
                        if let Some(input) = avatar_input.get_untracked() {
                            input.click();
                        }
                    }
                >
                    "Change photo"
                </button>
                <input
                    type="file"
                    accept="image/*"
                    class="hidden"
                    node_ref=avatar_input
                    on:change=on_avatar_picked
                />
            </div>

            <div class="export">
                <button class="btn-small" on:click=on_json>"Download JSON"</button>
                <button class="btn-small" on:click=on_pdf>"Download PDF"</button>
            </div>

            <div class="share">
                <button class="btn-small" title="Share by email" on:click=move |_| share(ShareTarget::Mail)>"Email"</button>
                <button class="btn-small" title="Share on WhatsApp" on:click=move |_| share(ShareTarget::WhatsApp)>"WhatsApp"</button>
                <button class="btn-small" title="Share on Telegram" on:click=move |_| share(ShareTarget::Telegram)>"Telegram"</button>
            </div>
        </footer>
    }
}
