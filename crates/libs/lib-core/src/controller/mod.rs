//! # Chat Controller
//!
//! View-model of the widget. It owns the [`SessionState`], talks to the
//! backend through a [`ChatApi`], persists preferences through a
//! [`KeyValueStore`], and tells the view layer to re-render through an
//! observer callback.
//!
//! Every operation is "make one request, render one response". Failures never
//! escape: they become a chat message, a toast, or a status line.
//!
//! ## Concurrency
//!
//! Operations take `&self` and may overlap (two asks in flight race; each
//! renders when its own response arrives). The state lives in a `RefCell`
//! that is only borrowed between awaits, never across one.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use shared::{
    AskRequest, ConversationEntry, ConversationPdfRequest, Mode, SaveConversationRequest, Section,
};

use crate::config::WidgetConfig;
use crate::error::{ApiError, Result};
use crate::export::{self, Download};
use crate::history::HistoryPanel;
use crate::notices;
use crate::prefs::{Preferences, AVATAR_KEY, THEME_KEY};
use crate::service::{reject_server_error, server_message_or, ChatApi, KeyValueStore};
use crate::session::SessionState;
use crate::share::ShareTarget;
use crate::suggestions::summarize_request;
use crate::voice::{audio_file_name, TranscriptionOutcome};

/// Page the browser is sent to after the account is closed
pub const LOGIN_PATH: &str = "/login";

/// Result of [`ChatController::send_message`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing was sent
    Rejected,
    /// Answer rendered
    Answered,
    /// Apology rendered
    Failed,
}

pub struct ChatController<A: ChatApi> {
    api: A,
    config: WidgetConfig,
    store: Box<dyn KeyValueStore>,
    state: RefCell<SessionState>,
    observer: RefCell<Option<Rc<dyn Fn()>>>,
}

impl<A: ChatApi> ChatController<A> {
    /// Build the controller for the page's version (the configured default when absent).
    pub fn new(
        api: A,
        config: WidgetConfig,
        store: Box<dyn KeyValueStore>,
        page_version: Option<String>,
    ) -> Self {
        let prefs = Preferences::load(store.as_ref(), &config.default_theme);
        let version = page_version
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| config.default_version.clone());
        info!("chat session for version {} (theme {})", version, prefs.theme);

        Self {
            api,
            config,
            store,
            state: RefCell::new(SessionState::new(version, prefs)),
            observer: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Register the callback run after every state change.
    pub fn set_observer(&self, observer: impl Fn() + 'static) {
        *self.observer.borrow_mut() = Some(Rc::new(observer));
    }

    /// Read the current state.
    pub fn with_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        self.notify();
        result
    }

    fn notify(&self) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer();
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            warn!("could not persist {}: {}", key, err);
        }
    }

    // region:    --- Messaging

    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|s| s.draft = text);
    }

    /// Send whatever is in the input box.
    pub async fn submit_draft(&self) -> SendOutcome {
        let draft = self.with_state(|s| s.draft.clone());
        self.send_message(&draft).await
    }

    /// Ask the engine one question and render the answer.
    pub async fn send_message(&self, text: &str) -> SendOutcome {
        let Some(text) = lib_utils::non_blank(text) else {
            return SendOutcome::Rejected;
        };

        let request = self.update(|s| {
            s.push_user(text);
            s.conversation.push(ConversationEntry::user(text, s.version.as_str()));
            s.draft.clear();
            s.pending_asks += 1;
            AskRequest {
                message: text.to_string(),
                version: s.version.clone(),
                mode: s.mode,
            }
        });
        debug!("ask ({} mode, {})", request.mode, request.version);

        let result = reject_server_error(self.api.ask(&request).await);

        let outcome = self.update(|s| {
            s.pending_asks = s.pending_asks.saturating_sub(1);
            match result {
                Ok(resp) => {
                    s.last_answer = resp.answer.clone();
                    s.push_bot(&shared::sanitize_answer(&resp.answer), resp.citations.clone());
                    s.conversation.push(ConversationEntry::assistant(
                        resp.answer,
                        resp.citations,
                        resp.confidence,
                    ));
                    if resp.should_collect_contact {
                        s.push_bot(notices::CONTACT_PROMPT, Vec::new());
                    }
                    SendOutcome::Answered
                }
                Err(ApiError::Server(msg)) => {
                    warn!("ask rejected by server: {}", msg);
                    s.push_bot(notices::ASK_FAILED, Vec::new());
                    SendOutcome::Failed
                }
                Err(err) => {
                    warn!("ask failed: {}", err);
                    s.push_bot(notices::ASK_NETWORK_FAILED, Vec::new());
                    SendOutcome::Failed
                }
            }
        });

        if outcome == SendOutcome::Answered {
            self.refresh_history(false).await;
        }
        outcome
    }

    /// Put recognized speech in the input box and send it when it is not blank.
    pub async fn submit_voice_text(&self, text: &str) -> SendOutcome {
        self.set_draft(text);
        self.submit_draft().await
    }

    pub fn toast(&self, text: &str) {
        self.update(|s| {
            s.push_toast(text);
        });
    }

    // endregion: --- Messaging

    // region:    --- Guided mode

    /// Switch mode; entering guided mode loads the section headings.
    pub async fn set_mode(&self, mode: Mode) {
        self.update(|s| s.mode = mode);
        if mode == Mode::Guided {
            self.load_sections().await;
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self.with_state(|s| s.mode) {
            Mode::Quick => notices::PLACEHOLDER_QUICK,
            Mode::Guided => notices::PLACEHOLDER_GUIDED,
        }
    }

    /// Fetch the headings of the current version once.
    pub async fn load_sections(&self) {
        let version = self.with_state(|s| s.version.clone());
        if self.with_state(|s| s.sections.is_loaded_for(&version)) {
            return;
        }

        match self.api.sections(&version).await {
            Ok(resp) => {
                debug!("{} sections for {}", resp.sections.len(), version);
                self.update(|s| s.sections.load(&version, resp.sections));
            }
            Err(err) => {
                warn!("could not load sections: {}", err);
                self.update(|s| s.sections = Default::default());
            }
        }
    }

    /// Headings matching `query`, capped to the configured limit.
    pub fn suggestions(&self, query: &str) -> Vec<Section> {
        let limit = self.config.suggestion_limit;
        self.with_state(|s| s.sections.filter(query, limit).into_iter().cloned().collect())
    }

    pub fn pick_suggestion(&self, heading: &str) {
        self.set_draft(summarize_request(heading));
    }

    // endregion: --- Guided mode

    // region:    --- History

    /// Reload the history panel for the current version.
    pub async fn refresh_history(&self, from_button: bool) {
        let version = self.update(|s| {
            s.history = HistoryPanel::pending(from_button);
            s.version.clone()
        });

        let result = self.api.history(&version).await;

        let (window, chars) = (self.config.history_window, self.config.history_excerpt_chars);
        self.update(|s| {
            s.history = match result {
                Ok(resp) => HistoryPanel::from_items(&resp.items, window, chars),
                Err(err) => {
                    warn!("could not load history: {}", err);
                    HistoryPanel::Failed
                }
            }
        });
    }

    // endregion: --- History

    // region:    --- Export

    /// Save the conversation server-side (best effort) and return the JSON download.
    pub async fn export_json(&self, now: DateTime<Utc>) -> Result<Download> {
        let stamp = export::stamp(now);
        let (conversation, version) = self.with_state(|s| (s.conversation.clone(), s.version.clone()));

        let request = SaveConversationRequest {
            conversation,
            version,
            timestamp: stamp.clone(),
        };
        if let Err(err) = self.api.save_conversation(&request).await {
            debug!("server-side conversation save skipped: {}", err);
        }

        export::json_download(&request.conversation, &request.version, &stamp)
    }

    /// Server-rendered PDF, or `None` after rendering a chat message.
    pub async fn export_pdf(&self) -> Option<Download> {
        let (conversation, version) = self.with_state(|s| (s.conversation.clone(), s.version.clone()));
        let request = ConversationPdfRequest { conversation, version };

        match self.api.conversation_pdf(&request).await {
            Ok(bytes) => Some(export::pdf_download(&request.version, bytes)),
            Err(err @ (ApiError::Status(_) | ApiError::Server(_))) => {
                warn!("pdf export refused: {}", err);
                self.update(|s| s.push_bot(notices::PDF_FAILED, Vec::new()));
                None
            }
            Err(err) => {
                warn!("pdf export failed: {}", err);
                self.update(|s| s.push_bot(notices::PDF_REQUEST_FAILED, Vec::new()));
                None
            }
        }
    }

    // endregion: --- Export

    // region:    --- Preferences

    /// Persist and apply a theme class name; invalid names are ignored.
    pub fn set_theme(&self, theme: &str) {
        if let Err(err) = lib_utils::validate_class_name(theme) {
            warn!("ignoring theme: {}", err);
            return;
        }
        self.persist(THEME_KEY, theme);
        self.update(|s| s.prefs.theme = theme.to_string());
    }

    pub async fn upload_avatar(&self, avatar: A::Upload) {
        match self.api.upload_avatar(avatar).await {
            Ok(resp) if resp.ok && resp.url.as_deref().is_some_and(|u| !u.is_empty()) => {
                let url = resp.url.unwrap_or_default();
                self.persist(AVATAR_KEY, &url);
                self.update(|s| {
                    s.prefs.avatar_url = Some(url);
                    s.push_toast(notices::AVATAR_UPDATED);
                });
            }
            Ok(resp) => {
                self.toast(&server_message_or(&resp, notices::AVATAR_REJECTED));
            }
            Err(err) => {
                warn!("avatar upload failed: {}", err);
                self.toast(notices::AVATAR_UPLOAD_FAILED);
            }
        }
    }

    // endregion: --- Preferences

    // region:    --- Account

    /// Reset stored history for the current version; returns whether it was cleared.
    pub async fn clear_history(&self) -> bool {
        let version = self.with_state(|s| s.version.clone());

        match self.api.clear_history(&version).await {
            Ok(resp) if resp.ok => {
                info!("history cleared for {}", version);
                self.update(|s| {
                    s.history = HistoryPanel::Cleared;
                    s.reset_chat();
                    s.push_toast(notices::CHAT_RESET);
                });
                true
            }
            Ok(resp) => {
                self.toast(&server_message_or(&resp, notices::CLEAR_REJECTED));
                false
            }
            Err(err) => {
                warn!("clear history failed: {}", err);
                self.toast(notices::CLEAR_FAILED);
                false
            }
        }
    }

    /// Close the account; returns the page to navigate to on success.
    pub async fn delete_account(&self) -> Option<&'static str> {
        match self.api.delete_account().await {
            Ok(resp) if resp.ok => Some(LOGIN_PATH),
            Ok(resp) => {
                self.toast(&server_message_or(&resp, notices::CLOSE_REJECTED));
                None
            }
            Err(err) => {
                warn!("close account failed: {}", err);
                self.toast(notices::CLOSE_FAILED);
                None
            }
        }
    }

    // endregion: --- Account

    // region:    --- Voice and sharing

    /// Upload recorded audio for transcription.
    pub async fn transcribe(&self, audio: A::Upload, mime_type: &str) -> TranscriptionOutcome {
        let file_name = audio_file_name(mime_type);

        match self.api.transcribe(audio, &file_name).await {
            Ok(resp) if resp.ok => TranscriptionOutcome::Recognized(resp.text),
            Ok(resp) => {
                TranscriptionOutcome::Failed(server_message_or(&resp, notices::VOICE_STT_REJECTED))
            }
            Err(err) => {
                warn!("transcription failed: {}", err);
                TranscriptionOutcome::Failed(notices::VOICE_STT_FAILED.to_string())
            }
        }
    }

    pub fn share_url(&self, target: ShareTarget) -> String {
        self.with_state(|s| target.url(&s.last_answer))
    }

    // endregion: --- Voice and sharing
}

#[cfg(test)]
mod tests;
