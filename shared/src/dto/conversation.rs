//! # Conversation Data Transfer Objects
//!
//! The exchanged-message log kept by the widget and the payloads used to
//! persist it server-side (`/api/save_conversation`, `/api/save_conversation_pdf`).

use serde::{Deserialize, Serialize};

/// Author of a conversation entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Source link attached to an assistant answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    pub url: String,
}

/// One exchanged message, in send/receive order
///
/// User entries record the version they were asked against; assistant entries
/// carry citations and the engine's confidence score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationEntry {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl ConversationEntry {
    pub fn user(content: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            version: Some(version.into()),
            citations: None,
            confidence: None,
        }
    }

    pub fn assistant(content: impl Into<String>, citations: Vec<Citation>, confidence: Option<f64>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            version: None,
            citations: Some(citations),
            confidence,
        }
    }
}

/// Best-effort server-side copy of the conversation, sent before a JSON download
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveConversationRequest {
    pub conversation: Vec<ConversationEntry>,
    pub version: String,
    pub timestamp: String,
}

/// Request for a server-rendered PDF of the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationPdfRequest {
    pub conversation: Vec<ConversationEntry>,
    pub version: String,
}
