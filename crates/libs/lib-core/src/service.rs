//! # Service Traits
//!
//! Seams between the widget core and the browser, enabling native tests with
//! scripted backends and in-memory storage.

use async_trait::async_trait;
use shared::{
    AckResponse, AskRequest, AskResponse, ConversationPdfRequest, HistoryResponse,
    SaveConversationRequest, SectionsResponse, TranscriptionResponse, UploadAvatarResponse,
};

use crate::error::{ApiError, Result};

/// Backend Q&A service operations.
///
/// Bodies are returned as decoded, whatever the HTTP status: the backend
/// reports logical failures in an `error` field (often alongside a 4xx) and
/// the controller interprets it. A non-success status whose body does not
/// decode maps to [`ApiError::Status`]. Futures are not `Send`: the browser
/// client lives on the wasm main thread.
#[async_trait(?Send)]
pub trait ChatApi {
    /// Binary payload handed over by the platform (a `File`/`Blob` in the browser)
    type Upload;

    /// `POST /api/ask`
    async fn ask(&self, request: &AskRequest) -> std::result::Result<AskResponse, ApiError>;

    /// `GET /api/sections?version=`
    async fn sections(&self, version: &str) -> std::result::Result<SectionsResponse, ApiError>;

    /// `GET /api/history?version=`
    async fn history(&self, version: &str) -> std::result::Result<HistoryResponse, ApiError>;

    /// `POST /api/upload_avatar` (multipart field `avatar`)
    async fn upload_avatar(&self, avatar: Self::Upload) -> std::result::Result<UploadAvatarResponse, ApiError>;

    /// `POST /api/clear_history`
    async fn clear_history(&self, version: &str) -> std::result::Result<AckResponse, ApiError>;

    /// `POST /api/delete_account`
    async fn delete_account(&self) -> std::result::Result<AckResponse, ApiError>;

    /// `POST /api/save_conversation`
    async fn save_conversation(&self, request: &SaveConversationRequest) -> std::result::Result<(), ApiError>;

    /// `POST /api/save_conversation_pdf`; non-success statuses map to [`ApiError::Status`]
    async fn conversation_pdf(&self, request: &ConversationPdfRequest) -> std::result::Result<Vec<u8>, ApiError>;

    /// `POST /api/stt` (multipart field `audio`, sent as `file_name`)
    async fn transcribe(
        &self,
        audio: Self::Upload,
        file_name: &str,
    ) -> std::result::Result<TranscriptionResponse, ApiError>;
}

/// String key/value persistence (browser local storage).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Responses that can carry a server-reported `error` field
pub trait ServerReported {
    fn server_error(&self) -> Option<&str>;
}

macro_rules! server_reported {
    ($($ty:ty),* $(,)?) => {
        $(impl ServerReported for $ty {
            fn server_error(&self) -> Option<&str> {
                self.error.as_deref().filter(|e| !e.is_empty())
            }
        })*
    };
}

server_reported!(AskResponse, AckResponse, UploadAvatarResponse, TranscriptionResponse);

/// The server-reported message, or `fallback` when absent or empty.
pub fn server_message_or<T: ServerReported>(body: &T, fallback: &str) -> String {
    body.server_error().unwrap_or(fallback).to_string()
}

/// Turn a decoded body carrying a non-empty `error` into [`ApiError::Server`].
pub fn reject_server_error<T: ServerReported>(
    result: std::result::Result<T, ApiError>,
) -> std::result::Result<T, ApiError> {
    match result {
        Ok(body) => match body.server_error() {
            Some(msg) => Err(ApiError::Server(msg.to_string())),
            None => Ok(body),
        },
        Err(err) => Err(err),
    }
}
