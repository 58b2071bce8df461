//! Browser helpers

pub mod constants;
pub mod page;
pub mod url;
