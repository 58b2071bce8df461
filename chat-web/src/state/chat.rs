//! Chat state management
//!
//! The [`ChatController`] is single-threaded (`Rc`/`RefCell`), so it is kept in
//! a local [`StoredValue`]. Every controller change bumps `revision`, which is
//! what views track when they read session state.

use std::future::Future;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::voice::{status_linger_ms, VoiceEvent, VoiceStatus, VoiceStrategyKind};
use lib_core::{ChatController, SessionState, WidgetConfig};

use crate::services::api::HttpApi;
use crate::services::sound::SoundCues;
use crate::services::storage::LocalStore;
use crate::utils::page::{page_config, page_version};

pub type Controller = Rc<ChatController<HttpApi>>;

/// Global chat context
#[derive(Clone, Copy)]
pub struct ChatContext {
    controller: StoredValue<Controller, LocalStorage>,
    sounds: StoredValue<SoundCues, LocalStorage>,
    revision: RwSignal<u64>,
    pub voice: RwSignal<VoiceStatus>,
}

impl ChatContext {
    pub fn new() -> Self {
        let config = page_config();
        let api = HttpApi::new(&config);
        let controller = Rc::new(ChatController::new(
            api,
            config,
            Box::new(LocalStore),
            page_version(),
        ));

        let revision = RwSignal::new(0u64);
        controller.set_observer(move || revision.update(|n| *n += 1));

        Self {
            controller: StoredValue::new_local(controller),
            sounds: StoredValue::new_local(SoundCues::new()),
            revision,
            voice: RwSignal::new(VoiceStatus::default()),
        }
    }

    /// Reactive read of the session state.
    pub fn with<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.revision.track();
        self.controller.with_value(|c| c.with_state(f))
    }

    /// Reactive call into the controller.
    pub fn tracked<R>(&self, f: impl FnOnce(&ChatController<HttpApi>) -> R) -> R {
        self.revision.track();
        self.controller.with_value(|c| f(c))
    }

    pub fn controller(&self) -> Controller {
        self.controller.get_value()
    }

    pub fn config(&self) -> WidgetConfig {
        self.controller.with_value(|c| c.config().clone())
    }

    /// Run a controller operation on the event loop.
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Controller) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.controller()));
    }

    /// Send the input box content.
    pub fn send_draft(&self) {
        let blank = self.controller.with_value(|c| c.with_state(|s| s.draft.trim().is_empty()));
        if !blank {
            self.sounds.with_value(|s| s.play_sent());
        }
        self.spawn(|c| async move {
            c.submit_draft().await;
        });
    }

    pub fn set_waiting_sound(&self, waiting: bool) {
        self.sounds.with_value(|s| s.set_waiting(waiting));
    }

    pub fn voice_event(&self, event: VoiceEvent) {
        self.voice.update(|status| status.apply(event));
    }

    /// Clear the voice status line once the session's linger delay has passed.
    pub fn expire_voice_status(&self, kind: VoiceStrategyKind) {
        let voice = self.voice;
        spawn_local(async move {
            TimeoutFuture::new(status_linger_ms(kind)).await;
            voice.update(|status| status.apply(VoiceEvent::StatusExpired));
        });
    }
}

pub fn provide_chat_context() -> ChatContext {
    let context = ChatContext::new();
    provide_context(context);
    context
}

pub fn use_chat_context() -> ChatContext {
    expect_context::<ChatContext>()
}
