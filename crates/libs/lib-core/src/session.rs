//! # Session State
//!
//! Everything the widget knows about the current page session, owned by the
//! [`ChatController`](crate::controller::ChatController) and rendered by the
//! view layer.

use shared::{Citation, ConversationEntry, Mode};

use crate::history::HistoryPanel;
use crate::prefs::Preferences;
use crate::suggestions::SectionIndex;

/// Who a chat-window message is shown as coming from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

/// How a chat-window message is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// Avatar + bubble
    Bubble,
    /// Small inline notice
    Toast,
}

/// A message in the chat window.
///
/// `html` is already escaped/sanitized markup; the view injects it as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub speaker: Speaker,
    pub kind: MessageKind,
    pub html: String,
    pub citations: Vec<Citation>,
    /// Plain text offered to text-to-speech (bot bubbles only)
    pub speech_text: Option<String>,
}

/// Mutable state of one widget session.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub version: String,
    pub mode: Mode,
    /// Exchanged messages, exported and persisted
    pub conversation: Vec<ConversationEntry>,
    /// Everything drawn in the chat window, in arrival order
    pub transcript: Vec<ChatMessage>,
    /// Raw text of the latest answer, offered to the share links
    pub last_answer: String,
    pub draft: String,
    /// Asks sent but not yet answered
    pub pending_asks: usize,
    pub history: HistoryPanel,
    pub sections: SectionIndex,
    pub prefs: Preferences,
    next_message_id: u64,
}

impl SessionState {
    pub fn new(version: impl Into<String>, prefs: Preferences) -> Self {
        Self {
            version: version.into(),
            mode: Mode::Quick,
            conversation: Vec::new(),
            transcript: Vec::new(),
            last_answer: String::new(),
            draft: String::new(),
            pending_asks: 0,
            history: HistoryPanel::Loading,
            sections: SectionIndex::default(),
            prefs,
            next_message_id: 0,
        }
    }

    /// Typing indicator visibility
    pub fn is_typing(&self) -> bool {
        self.pending_asks > 0
    }

    pub fn push_message(
        &mut self,
        speaker: Speaker,
        kind: MessageKind,
        html: String,
        citations: Vec<Citation>,
        speech_text: Option<String>,
    ) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.transcript.push(ChatMessage {
            id,
            speaker,
            kind,
            html,
            citations,
            speech_text,
        });
        id
    }

    /// Bot bubble from already-safe markup; `\n` renders as a line break.
    pub fn push_bot(&mut self, html: &str, citations: Vec<Citation>) -> u64 {
        let html = shared::newlines_to_breaks(html);
        let speech = shared::strip_tags(&html);
        self.push_message(Speaker::Bot, MessageKind::Bubble, html, citations, Some(speech))
    }

    /// User bubble from raw input text.
    pub fn push_user(&mut self, text: &str) -> u64 {
        let html = shared::newlines_to_breaks(&shared::escape_html(text));
        self.push_message(Speaker::User, MessageKind::Bubble, html, Vec::new(), None)
    }

    pub fn push_toast(&mut self, text: &str) -> u64 {
        let html = shared::escape_html(text);
        self.push_message(Speaker::Bot, MessageKind::Toast, html, Vec::new(), None)
    }

    /// Drop the conversation and everything drawn in the chat window.
    pub fn reset_chat(&mut self) {
        self.conversation.clear();
        self.transcript.clear();
    }
}
