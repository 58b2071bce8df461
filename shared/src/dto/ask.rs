//! # Ask Data Transfer Objects
//!
//! Request and response for the question-answering endpoint (`POST /api/ask`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::conversation::Citation;

/// Interaction mode selected in the widget header
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Free-form Q&A
    #[default]
    Quick,
    /// Section-search assisted
    Guided,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Quick => "quick",
            Mode::Guided => "guided",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick" => Ok(Mode::Quick),
            "guided" => Ok(Mode::Guided),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}

/// Question sent to the Q&A engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskRequest {
    pub message: String,
    pub version: String,
    pub mode: Mode,
}

/// Answer returned by the Q&A engine
///
/// The server reports logical failures through `error` (sometimes with a 4xx
/// status); every other field falls back to its default when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AskResponse {
    pub answer: String,
    pub citations: Vec<Citation>,
    pub confidence: Option<f64>,
    pub should_collect_contact: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
