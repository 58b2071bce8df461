//! # Environment Variables
//!
//! Utilities for reading environment variables (native tools only;
//! the browser build never touches the process environment).

use std::env;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, falling back to `default` when unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "environment variable {name} is not set"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_falls_back() {
        assert_eq!(get_env_or("LIB_UTILS_TEST_UNSET_VAR", "dist"), "dist");
        assert_eq!(
            get_env("LIB_UTILS_TEST_UNSET_VAR"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_UNSET_VAR"))
        );
    }
}
