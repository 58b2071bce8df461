//! Application state

pub mod chat;
