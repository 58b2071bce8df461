//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the chat widget and the Q&A
//! backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::ask`]**: Question/answer DTOs
//!   - **[`dto::conversation`]**: Conversation log and export DTOs
//!   - **[`dto::history`]**, **[`dto::sections`]**, **[`dto::account`]**, **[`dto::speech`]**
//! - **[`utils`]**: Text helpers for rendering server content safely
//!
//! ## Usage in the Widget
//!
//! ```rust
//! use shared::dto::ask::{AskRequest, AskResponse, Mode};
//! use shared::utils::sanitize_answer;
//!
//! let request = AskRequest {
//!     message: "What is new in Server 2024?".to_string(),
//!     version: "Server2024".to_string(),
//!     mode: Mode::Quick,
//! };
//! assert_eq!(serde_json::to_value(&request).unwrap()["mode"], "quick");
//!
//! let response: AskResponse = serde_json::from_str(r#"{"answer":"a <b> tag"}"#).unwrap();
//! assert_eq!(sanitize_answer(&response.answer), "a &lt;b&gt; tag");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
