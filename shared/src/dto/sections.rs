//! # Section Data Transfer Objects
//!
//! Document section headings for a version (`GET /api/sections?version=`).

use serde::{Deserialize, Serialize};

/// Section metadata, used only for guided-mode suggestions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Section {
    pub heading: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SectionsResponse {
    pub sections: Vec<Section>,
}
