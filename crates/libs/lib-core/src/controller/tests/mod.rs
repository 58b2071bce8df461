//! # Controller Tests
//!
//! Test suite for the chat controller, driven by a scripted in-memory backend.

mod account;
mod messaging;

use super::*;
use crate::error::AppError;
use async_trait::async_trait;
use shared::{
    AckResponse, AskResponse, Citation, HistoryItem, HistoryResponse, SectionsResponse,
    TranscriptionResponse, UploadAvatarResponse,
};
use std::collections::HashMap;

/// Scripted backend: every endpoint returns its configured result and logs the call
#[derive(Clone, Default)]
pub struct MockApi {
    inner: Rc<MockInner>,
}

#[derive(Default)]
pub struct MockInner {
    pub calls: RefCell<Vec<String>>,
    pub asks: RefCell<Vec<AskRequest>>,
    pub saved: RefCell<Vec<SaveConversationRequest>>,
    pub uploads: RefCell<Vec<(Vec<u8>, String)>>,
    pub ask: RefCell<Option<std::result::Result<AskResponse, ApiError>>>,
    pub sections: RefCell<Option<std::result::Result<SectionsResponse, ApiError>>>,
    pub history: RefCell<Option<std::result::Result<HistoryResponse, ApiError>>>,
    pub avatar: RefCell<Option<std::result::Result<UploadAvatarResponse, ApiError>>>,
    pub clear: RefCell<Option<std::result::Result<AckResponse, ApiError>>>,
    pub delete: RefCell<Option<std::result::Result<AckResponse, ApiError>>>,
    pub save: RefCell<Option<ApiError>>,
    pub pdf: RefCell<Option<std::result::Result<Vec<u8>, ApiError>>>,
    pub stt: RefCell<Option<std::result::Result<TranscriptionResponse, ApiError>>>,
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.inner.calls.borrow().clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.inner.calls.borrow().iter().filter(|c| *c == endpoint).count()
    }

    pub fn on_ask(&self, result: std::result::Result<AskResponse, ApiError>) {
        *self.inner.ask.borrow_mut() = Some(result);
    }

    pub fn on_sections(&self, result: std::result::Result<SectionsResponse, ApiError>) {
        *self.inner.sections.borrow_mut() = Some(result);
    }

    pub fn on_history(&self, result: std::result::Result<HistoryResponse, ApiError>) {
        *self.inner.history.borrow_mut() = Some(result);
    }

    pub fn on_avatar(&self, result: std::result::Result<UploadAvatarResponse, ApiError>) {
        *self.inner.avatar.borrow_mut() = Some(result);
    }

    pub fn on_clear(&self, result: std::result::Result<AckResponse, ApiError>) {
        *self.inner.clear.borrow_mut() = Some(result);
    }

    pub fn on_delete(&self, result: std::result::Result<AckResponse, ApiError>) {
        *self.inner.delete.borrow_mut() = Some(result);
    }

    pub fn on_save_failure(&self, err: ApiError) {
        *self.inner.save.borrow_mut() = Some(err);
    }

    pub fn on_pdf(&self, result: std::result::Result<Vec<u8>, ApiError>) {
        *self.inner.pdf.borrow_mut() = Some(result);
    }

    pub fn on_stt(&self, result: std::result::Result<TranscriptionResponse, ApiError>) {
        *self.inner.stt.borrow_mut() = Some(result);
    }

    fn log(&self, endpoint: &str) {
        self.inner.calls.borrow_mut().push(endpoint.to_string());
    }
}

fn scripted<T: Clone + Default>(
    slot: &RefCell<Option<std::result::Result<T, ApiError>>>,
) -> std::result::Result<T, ApiError> {
    slot.borrow().clone().unwrap_or_else(|| Ok(T::default()))
}

#[async_trait(?Send)]
impl ChatApi for MockApi {
    type Upload = Vec<u8>;

    async fn ask(&self, request: &AskRequest) -> std::result::Result<AskResponse, ApiError> {
        self.log("ask");
        self.inner.asks.borrow_mut().push(request.clone());
        scripted(&self.inner.ask)
    }

    async fn sections(&self, _version: &str) -> std::result::Result<SectionsResponse, ApiError> {
        self.log("sections");
        scripted(&self.inner.sections)
    }

    async fn history(&self, _version: &str) -> std::result::Result<HistoryResponse, ApiError> {
        self.log("history");
        scripted(&self.inner.history)
    }

    async fn upload_avatar(&self, avatar: Vec<u8>) -> std::result::Result<UploadAvatarResponse, ApiError> {
        self.log("upload_avatar");
        self.inner.uploads.borrow_mut().push((avatar, "avatar".to_string()));
        scripted(&self.inner.avatar)
    }

    async fn clear_history(&self, _version: &str) -> std::result::Result<AckResponse, ApiError> {
        self.log("clear_history");
        scripted(&self.inner.clear)
    }

    async fn delete_account(&self) -> std::result::Result<AckResponse, ApiError> {
        self.log("delete_account");
        scripted(&self.inner.delete)
    }

    async fn save_conversation(&self, request: &SaveConversationRequest) -> std::result::Result<(), ApiError> {
        self.log("save_conversation");
        self.inner.saved.borrow_mut().push(request.clone());
        match self.inner.save.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn conversation_pdf(&self, _request: &ConversationPdfRequest) -> std::result::Result<Vec<u8>, ApiError> {
        self.log("save_conversation_pdf");
        scripted(&self.inner.pdf)
    }

    async fn transcribe(
        &self,
        audio: Vec<u8>,
        file_name: &str,
    ) -> std::result::Result<TranscriptionResponse, ApiError> {
        self.log("stt");
        self.inner.uploads.borrow_mut().push((audio, file_name.to_string()));
        scripted(&self.inner.stt)
    }
}

/// Local storage stand-in; clones share the same map, like reloading the page
#[derive(Clone, Default)]
pub struct MemoryStore {
    map: Rc<RefCell<HashMap<String, String>>>,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn value(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(AppError::Storage("quota exceeded".to_string()));
        }
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Controller over a fresh mock and store
pub fn setup() -> (ChatController<MockApi>, MockApi, MemoryStore) {
    let api = MockApi::default();
    let store = MemoryStore::default();
    let controller = ChatController::new(
        api.clone(),
        WidgetConfig::default(),
        Box::new(store.clone()),
        Some("RelativityOne".to_string()),
    );
    (controller, api, store)
}

pub fn answer(text: &str) -> AskResponse {
    AskResponse {
        answer: text.to_string(),
        citations: vec![Citation { url: "https://help.example.com/notes".to_string() }],
        confidence: Some(0.9),
        should_collect_contact: false,
        error: None,
    }
}

pub fn history_item(role: &str, content: &str) -> HistoryItem {
    HistoryItem {
        role: role.to_string(),
        content: content.to_string(),
        ts: "2026-10-16T09:00:00Z".to_string(),
    }
}

#[test]
fn test_new_uses_default_version_when_page_has_none() {
    let controller = ChatController::new(
        MockApi::default(),
        WidgetConfig::default(),
        Box::new(MemoryStore::default()),
        Some("  ".to_string()),
    );
    assert_eq!(controller.with_state(|s| s.version.clone()), "RelativityOne");
}

#[test]
fn test_observer_runs_on_change() {
    let (controller, _api, _store) = setup();
    let hits = Rc::new(RefCell::new(0));
    let counter = hits.clone();
    controller.set_observer(move || *counter.borrow_mut() += 1);

    controller.set_draft("hello");
    controller.toast("note");

    assert_eq!(*hits.borrow(), 2);
}
