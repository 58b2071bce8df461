//! User-visible texts: chat messages, toasts, placeholders and voice status lines.

pub const ASK_FAILED: &str = "Sorry, something went wrong. Please try again.";
pub const ASK_NETWORK_FAILED: &str = "Network error. Please try again.";
pub const CONTACT_PROMPT: &str =
    "If you'd like deeper help, share your contact info (name, email, organization). We'll follow up.";

pub const PLACEHOLDER_QUICK: &str = "Ask about Relativity release notes...";
pub const PLACEHOLDER_GUIDED: &str = "Search sections (Guided)…";

pub const HISTORY_LOADING: &str = "Loading…";
pub const HISTORY_REFRESHING: &str = "Refreshing…";
pub const HISTORY_EMPTY_TITLE: &str = "No messages yet";
pub const HISTORY_EMPTY_SUB: &str = "Your conversation will appear here.";
pub const HISTORY_FAILED: &str = "Could not load history.";
pub const HISTORY_CLEARED: &str = "History cleared.";

pub const PDF_FAILED: &str = "Could not generate PDF.";
pub const PDF_REQUEST_FAILED: &str = "PDF export failed.";

pub const AVATAR_UPDATED: &str = "Photo updated.";
pub const AVATAR_REJECTED: &str = "Could not update photo.";
pub const AVATAR_UPLOAD_FAILED: &str = "Upload failed.";

pub const CLEAR_CONFIRM: &str = "Clear chat history for this version?";
pub const CHAT_RESET: &str = "Chat reset.";
pub const CLEAR_REJECTED: &str = "Could not clear history.";
pub const CLEAR_FAILED: &str = "Failed to clear history.";

pub const CLOSE_CONFIRM: &str = "This will permanently delete your account and history. Continue?";
pub const CLOSE_REJECTED: &str = "Could not close account.";
pub const CLOSE_FAILED: &str = "Request failed.";

pub const TTS_UNSUPPORTED: &str = "Text-to-Speech not supported in this browser.";

pub const VOICE_INSECURE: &str = "Use HTTPS or localhost to enable microphone access.";
pub const VOICE_NATIVE_UNAVAILABLE: &str = "Speech recognition not available in this browser.";
pub const VOICE_LISTENING: &str = "Listening…";
pub const VOICE_RECORDER_UNSUPPORTED: &str = "Recording is not supported by this browser.";
pub const VOICE_PERMISSION_DENIED: &str = "Microphone permission denied.";
pub const VOICE_RECORDING: &str = "Recording… click again to stop";
pub const VOICE_TRANSCRIBING: &str = "Transcribing...";
pub const VOICE_SENDING: &str = "Recognized. Sending…";
pub const VOICE_STT_REJECTED: &str = "Speech-to-text failed.";
pub const VOICE_STT_FAILED: &str = "STT request failed.";
