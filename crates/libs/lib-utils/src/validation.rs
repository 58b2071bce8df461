//! # Validation Utilities
//!
//! Input validation helpers.

/// Trimmed text, or `None` when nothing but whitespace is left.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Validate a CSS class name (ASCII letters, digits, `-` and `_`).
pub fn validate_class_name(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("class name cannot be empty".to_string());
    }
    if value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        Ok(())
    } else {
        Err(format!("invalid class name: {}", value))
    }
}

/// Validate a URL path slug (ASCII letters and digits only).
pub fn validate_slug(value: &str) -> Result<(), String> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(format!("invalid slug: {}", value))
    }
}
