//! Application constants

/// Avatar shown before the user uploads a photo
pub const DEFAULT_USER_AVATAR: &str = "/static/img/user.png";
pub const BOT_AVATAR: &str = "/static/img/bot.png";
pub const SPEAKER_ICON: &str = "/static/img/speaker.svg";

// Sound cues
pub const USER_SOUND: &str = "/static/sounds/user.mp3";
pub const BOT_SOUND: &str = "/static/sounds/bot.mp3";

/// Page globals set by the host template
pub const VERSION_GLOBAL: &str = "APP_VERSION";
pub const CONFIG_GLOBAL: &str = "CHAT_CONFIG";

/// Preferred recorder container
pub const RECORDER_MIME: &str = "audio/webm";

/// Element hidden once the wasm module has started
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
