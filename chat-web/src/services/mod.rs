//! Browser-side implementations of the widget's seams

pub mod api;
pub mod download;
pub mod sound;
pub mod speech;
pub mod storage;
pub mod voice;
