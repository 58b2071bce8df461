//! # Core Library
//!
//! Platform-independent core of the release-notes chat widget: session state,
//! the [`ChatController`] view-model, and the seams ([`ChatApi`],
//! [`KeyValueStore`], [`VoiceInput`](voice::VoiceInput)) the browser layer
//! implements.

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod history;
pub mod notices;
pub mod prefs;
pub mod service;
pub mod session;
pub mod share;
pub mod suggestions;
pub mod voice;

// Re-export commonly used types
pub use config::WidgetConfig;
pub use controller::{ChatController, SendOutcome};
pub use error::{ApiError, AppError, Result};
pub use service::{ChatApi, KeyValueStore};
pub use session::SessionState;
