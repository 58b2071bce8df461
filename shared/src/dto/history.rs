//! # History Data Transfer Objects
//!
//! Server-side message log for the active version (`GET /api/history?version=`).

use serde::{Deserialize, Serialize};

/// One stored message; `role` is kept as sent by the server
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryItem {
    pub role: String,
    pub content: String,
    pub ts: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryResponse {
    pub items: Vec<HistoryItem>,
}
