//! # Speech Data Transfer Objects

use serde::{Deserialize, Serialize};

/// Result of `POST /api/stt` (server-side transcription of a recorded question)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TranscriptionResponse {
    pub ok: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
