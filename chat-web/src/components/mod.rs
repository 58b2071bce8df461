//! UI Components

pub mod chat_window;
pub mod header;
pub mod history;
pub mod input_row;
pub mod toolbar;

pub use chat_window::ChatWindow;
pub use header::Header;
pub use history::HistoryBanner;
pub use input_row::InputRow;
pub use toolbar::Toolbar;

use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};

/// Whether a document click landed outside every one of `inside`.
pub(crate) fn clicked_outside(ev: &MouseEvent, inside: &[Option<Node>]) -> bool {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return true;
    };
    !inside
        .iter()
        .flatten()
        .any(|node| node.contains(Some(&target)))
}
