//! # Share Links
//!
//! Links that hand the latest answer to a mail client or messenger.

/// Where the latest answer is shared
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    Mail,
    WhatsApp,
    Telegram,
}

const MAIL_SUBJECT: &str = "Relativity Release Notes — Shared Answer";
const MAIL_NOTHING: &str = "No answer to share yet.";
const CHAT_NOTHING: &str = "No answer yet.";

impl ShareTarget {
    /// URL to open in a new tab for `last_answer` (may be empty).
    pub fn url(&self, last_answer: &str) -> String {
        let text = |fallback: &'static str| {
            if last_answer.is_empty() {
                fallback
            } else {
                last_answer
            }
        };

        match self {
            ShareTarget::Mail => format!(
                "mailto:?subject={}&body={}",
                urlencoding::encode(MAIL_SUBJECT),
                urlencoding::encode(text(MAIL_NOTHING))
            ),
            ShareTarget::WhatsApp => {
                format!("https://wa.me/?text={}", urlencoding::encode(text(CHAT_NOTHING)))
            }
            ShareTarget::Telegram => format!(
                "https://t.me/share/url?url=&text={}",
                urlencoding::encode(text(CHAT_NOTHING))
            ),
        }
    }
}
