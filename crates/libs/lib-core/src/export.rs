//! # Conversation Export
//!
//! File names and payloads for the JSON download and the server-rendered PDF.

use chrono::{DateTime, Utc};
use shared::ConversationEntry;

use crate::error::Result;

/// A file the view layer should hand to the browser as a download
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// JSON download of the conversation, pretty-printed with two-space indentation.
pub fn json_download(
    conversation: &[ConversationEntry],
    version: &str,
    stamp: &str,
) -> Result<Download> {
    let body = serde_json::to_string_pretty(conversation)?;
    Ok(Download {
        file_name: format!("conversation_{}_{}.json", version, stamp),
        mime_type: "application/json",
        bytes: body.into_bytes(),
    })
}

/// Server-rendered PDF of the conversation.
pub fn pdf_download(version: &str, bytes: Vec<u8>) -> Download {
    Download {
        file_name: format!("conversation_{}.pdf", version),
        mime_type: "application/pdf",
        bytes,
    }
}

/// Stamp used in export file names and the server-side save.
pub fn stamp(now: DateTime<Utc>) -> String {
    lib_utils::export_stamp(now)
}
