//! # Utilities Library
//!
//! Shared utility functions for environment variables, time stamps, and input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or};
pub use time::{export_stamp, now_utc};
pub use validation::{non_blank, validate_class_name, validate_slug};
