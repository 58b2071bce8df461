//! HTTP client for the Q&A backend
//!
//! Implements [`ChatApi`] with `gloo-net`. JSON bodies are decoded whatever the
//! status; a body that does not decode on a failed status is reported as
//! [`ApiError::Status`].

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use lib_core::{ApiError, ChatApi, WidgetConfig};
use log::debug;
use serde::de::DeserializeOwned;
use shared::{
    AckResponse, AskRequest, AskResponse, ClearHistoryRequest, ConversationPdfRequest,
    HistoryResponse, SaveConversationRequest, SectionsResponse, TranscriptionResponse,
    UploadAvatarResponse,
};
use web_sys::{Blob, FormData};

use crate::utils::url::with_version;

pub const ASK: &str = "/api/ask";
pub const SECTIONS: &str = "/api/sections";
pub const HISTORY: &str = "/api/history";
pub const UPLOAD_AVATAR: &str = "/api/upload_avatar";
pub const CLEAR_HISTORY: &str = "/api/clear_history";
pub const DELETE_ACCOUNT: &str = "/api/delete_account";
pub const SAVE_CONVERSATION: &str = "/api/save_conversation";
pub const SAVE_CONVERSATION_PDF: &str = "/api/save_conversation_pdf";
pub const STT: &str = "/api/stt";

/// Backend client bound to the configured API base.
#[derive(Clone)]
pub struct HttpApi {
    config: WidgetConfig,
}

impl HttpApi {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn js_network(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    match resp.json::<T>().await {
        Ok(body) => Ok(body),
        Err(_) if !resp.ok() => Err(ApiError::Status(resp.status())),
        Err(err) => Err(ApiError::Decode(err.to_string())),
    }
}

fn require_ok(resp: &Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

fn form_with(field: &str, blob: &Blob, file_name: Option<&str>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_network)?;
    match file_name {
        Some(name) => form.append_with_blob_and_filename(field, blob, name),
        None => form.append_with_blob(field, blob),
    }
    .map_err(js_network)?;
    Ok(form)
}

#[async_trait(?Send)]
impl ChatApi for HttpApi {
    type Upload = Blob;

    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, ApiError> {
        debug!("POST {}", ASK);
        let resp = Request::post(&self.url(ASK))
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }

    async fn sections(&self, version: &str) -> Result<SectionsResponse, ApiError> {
        let url = with_version(&self.url(SECTIONS), version);
        debug!("GET {}", url);
        let resp = Request::get(&url).send().await.map_err(network)?;
        decode(resp).await
    }

    async fn history(&self, version: &str) -> Result<HistoryResponse, ApiError> {
        let url = with_version(&self.url(HISTORY), version);
        debug!("GET {}", url);
        let resp = Request::get(&url).send().await.map_err(network)?;
        decode(resp).await
    }

    async fn upload_avatar(&self, avatar: Blob) -> Result<UploadAvatarResponse, ApiError> {
        debug!("POST {}", UPLOAD_AVATAR);
        let form = form_with("avatar", &avatar, None)?;
        let resp = Request::post(&self.url(UPLOAD_AVATAR))
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }

    async fn clear_history(&self, version: &str) -> Result<AckResponse, ApiError> {
        debug!("POST {}", CLEAR_HISTORY);
        let body = ClearHistoryRequest {
            version: version.to_string(),
        };
        let resp = Request::post(&self.url(CLEAR_HISTORY))
            .json(&body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }

    async fn delete_account(&self) -> Result<AckResponse, ApiError> {
        debug!("POST {}", DELETE_ACCOUNT);
        let resp = Request::post(&self.url(DELETE_ACCOUNT))
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }

    async fn save_conversation(&self, request: &SaveConversationRequest) -> Result<(), ApiError> {
        debug!("POST {}", SAVE_CONVERSATION);
        let resp = Request::post(&self.url(SAVE_CONVERSATION))
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        require_ok(&resp)
    }

    async fn conversation_pdf(&self, request: &ConversationPdfRequest) -> Result<Vec<u8>, ApiError> {
        debug!("POST {}", SAVE_CONVERSATION_PDF);
        let resp = Request::post(&self.url(SAVE_CONVERSATION_PDF))
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        require_ok(&resp)?;
        resp.binary().await.map_err(network)
    }

    async fn transcribe(&self, audio: Blob, file_name: &str) -> Result<TranscriptionResponse, ApiError> {
        debug!("POST {} ({})", STT, file_name);
        let form = form_with("audio", &audio, Some(file_name))?;
        let resp = Request::post(&self.url(STT))
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }
}
