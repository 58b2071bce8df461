//! # Account Data Transfer Objects
//!
//! Profile and account-maintenance endpoints: avatar upload, history reset and
//! account closure.

use serde::{Deserialize, Serialize};

/// Generic `{ok, error?}` acknowledgement
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AckResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reset the stored history of one version
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClearHistoryRequest {
    pub version: String,
}

/// Result of `POST /api/upload_avatar`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UploadAvatarResponse {
    pub ok: bool,
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
