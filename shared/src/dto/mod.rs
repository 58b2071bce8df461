//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged between the chat widget
//! and the Q&A backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`ask`] - Question/answer round trip and interaction [`Mode`](ask::Mode)
//! - [`conversation`] - Conversation log entries and export payloads
//! - [`sections`] - Document section headings for guided mode
//! - [`history`] - Server-side message history
//! - [`account`] - Avatar upload, history reset, account closure
//! - [`speech`] - Server-side transcription
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Responses**: `#[serde(default)]`, so a field the server leaves out decodes to its default
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/ask
//! Content-Type: application/json
//!
//! {
//!   "message": "What changed in processing?",
//!   "version": "RelativityOne",
//!   "mode": "quick"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "answer": "Processing now supports ...",
//!   "citations": [{ "url": "https://help.example.com/processing" }],
//!   "confidence": 0.71,
//!   "should_collect_contact": false
//! }
//! ```

pub mod account;
pub mod ask;
pub mod conversation;
pub mod history;
pub mod sections;
pub mod speech;

pub use account::*;
pub use ask::*;
pub use conversation::*;
pub use history::*;
pub use sections::*;
pub use speech::*;
