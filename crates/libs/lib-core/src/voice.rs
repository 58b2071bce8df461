//! # Voice Input and Output
//!
//! Strategy selection and status handling shared by the two browser voice
//! input implementations:
//!
//! - **Native recognition**: the browser's speech recognition API, single-shot
//!   and non-interim; the recognized text is submitted directly.
//! - **Recorder fallback**: microphone audio captured with `MediaRecorder` and
//!   transcribed by the backend (`/api/stt`).
//!
//! Both require a secure context. The browser code reports what happened as a
//! [`VoiceEvent`]; [`VoiceStatus::apply`] turns it into the mic indicator and
//! inline status line.

use crate::notices;

/// Recognition language (speech input and output)
pub const SPEECH_LANG: &str = "en-US";
pub const SPEECH_RATE: f32 = 1.0;
pub const SPEECH_PITCH: f32 = 1.0;

/// Voice input implementation in use for this page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceStrategyKind {
    NativeRecognition,
    Recorder,
}

/// Browser capabilities found by feature detection at startup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoiceSupport {
    pub secure_context: bool,
    pub native_recognition: bool,
    pub media_recorder: bool,
}

impl VoiceSupport {
    /// Native recognition when available, recorder fallback otherwise.
    pub fn strategy(&self) -> VoiceStrategyKind {
        if self.native_recognition {
            VoiceStrategyKind::NativeRecognition
        } else {
            VoiceStrategyKind::Recorder
        }
    }

    /// Why a recording cannot start, checked in order: secure context, then API support.
    pub fn recorder_blocker(&self) -> Option<&'static str> {
        if !self.secure_context {
            Some(notices::VOICE_INSECURE)
        } else if !self.media_recorder {
            Some(notices::VOICE_RECORDER_UNSUPPORTED)
        } else {
            None
        }
    }
}

/// Secure context as the microphone APIs see it; loopback hosts always qualify.
pub fn is_secure(is_secure_context: bool, hostname: &str) -> bool {
    is_secure_context || matches!(hostname, "localhost" | "127.0.0.1")
}

/// Upload file name for a recorded blob of `mime_type`.
pub fn audio_file_name(mime_type: &str) -> String {
    let ext = if mime_type.contains("ogg") {
        "ogg"
    } else if mime_type.contains("wav") {
        "wav"
    } else {
        "webm"
    };
    format!("question.{}", ext)
}

/// Implemented by each browser voice input strategy.
pub trait VoiceInput {
    /// Mic button click: start a session, or stop the running one.
    fn toggle(&self);
}

/// Outcome of a backend transcription
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscriptionOutcome {
    /// Recognized text (may be blank)
    Recognized(String),
    /// Status line explaining the failure
    Failed(String),
}

/// Something that happened during a voice session
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoiceEvent {
    ListeningStarted,
    StartFailed { secure: bool },
    Recognized(String),
    RecognitionError(String),
    RecordingStarted,
    Blocked(&'static str),
    PermissionDenied,
    Transcribing,
    Transcribed(TranscriptionOutcome),
    SessionEnded,
    StatusExpired,
}

/// Mic indicator and inline status line
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoiceStatus {
    /// A recognition or recording session is running
    pub active: bool,
    pub line: String,
}

impl VoiceStatus {
    pub fn apply(&mut self, event: VoiceEvent) {
        match event {
            VoiceEvent::ListeningStarted => {
                self.active = true;
                self.line = notices::VOICE_LISTENING.to_string();
            }
            VoiceEvent::StartFailed { secure } => {
                self.line = if secure {
                    notices::VOICE_NATIVE_UNAVAILABLE
                } else {
                    notices::VOICE_INSECURE
                }
                .to_string();
            }
            VoiceEvent::Recognized(text) => self.line = format!("Recognized: {}", text),
            VoiceEvent::RecognitionError(code) => self.line = format!("Speech error: {}", code),
            VoiceEvent::RecordingStarted => {
                self.active = true;
                self.line = notices::VOICE_RECORDING.to_string();
            }
            VoiceEvent::Blocked(reason) => self.line = reason.to_string(),
            VoiceEvent::PermissionDenied => self.line = notices::VOICE_PERMISSION_DENIED.to_string(),
            VoiceEvent::Transcribing => self.line = notices::VOICE_TRANSCRIBING.to_string(),
            VoiceEvent::Transcribed(TranscriptionOutcome::Recognized(_)) => {
                self.line = notices::VOICE_SENDING.to_string();
            }
            VoiceEvent::Transcribed(TranscriptionOutcome::Failed(reason)) => self.line = reason,
            VoiceEvent::SessionEnded => self.active = false,
            VoiceEvent::StatusExpired => self.line.clear(),
        }
    }
}

/// Delay before the status line of an ended session is cleared
pub fn status_linger_ms(kind: VoiceStrategyKind) -> u32 {
    match kind {
        VoiceStrategyKind::NativeRecognition => 1200,
        VoiceStrategyKind::Recorder => 1500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_selection() {
        let native = VoiceSupport { secure_context: true, native_recognition: true, media_recorder: true };
        assert_eq!(native.strategy(), VoiceStrategyKind::NativeRecognition);

        let fallback = VoiceSupport { native_recognition: false, ..native };
        assert_eq!(fallback.strategy(), VoiceStrategyKind::Recorder);
    }

    #[test]
    fn test_recorder_blocker_order() {
        let insecure = VoiceSupport { secure_context: false, native_recognition: false, media_recorder: false };
        assert_eq!(insecure.recorder_blocker(), Some(notices::VOICE_INSECURE));

        let unsupported = VoiceSupport { secure_context: true, ..insecure };
        assert_eq!(unsupported.recorder_blocker(), Some(notices::VOICE_RECORDER_UNSUPPORTED));

        let ready = VoiceSupport { media_recorder: true, ..unsupported };
        assert_eq!(ready.recorder_blocker(), None);
    }

    #[test]
    fn test_is_secure() {
        assert!(is_secure(true, "qa.example.com"));
        assert!(is_secure(false, "localhost"));
        assert!(is_secure(false, "127.0.0.1"));
        assert!(!is_secure(false, "qa.example.com"));
    }

    #[test]
    fn test_audio_file_name() {
        assert_eq!(audio_file_name("audio/ogg;codecs=opus"), "question.ogg");
        assert_eq!(audio_file_name("audio/wav"), "question.wav");
        assert_eq!(audio_file_name("audio/webm;codecs=opus"), "question.webm");
        assert_eq!(audio_file_name(""), "question.webm");
    }

    #[test]
    fn test_native_session_lifecycle() {
        let mut status = VoiceStatus::default();

        status.apply(VoiceEvent::ListeningStarted);
        assert!(status.active);
        assert_eq!(status.line, "Listening…");

        status.apply(VoiceEvent::Recognized("what is new".into()));
        assert_eq!(status.line, "Recognized: what is new");

        status.apply(VoiceEvent::SessionEnded);
        assert!(!status.active);
        assert_eq!(status.line, "Recognized: what is new");

        status.apply(VoiceEvent::StatusExpired);
        assert!(status.line.is_empty());
    }

    #[test]
    fn test_start_failure_messages() {
        let mut status = VoiceStatus::default();
        status.apply(VoiceEvent::StartFailed { secure: false });
        assert_eq!(status.line, notices::VOICE_INSECURE);
        status.apply(VoiceEvent::StartFailed { secure: true });
        assert_eq!(status.line, notices::VOICE_NATIVE_UNAVAILABLE);
        assert!(!status.active);
    }

    #[test]
    fn test_transcription_outcomes() {
        let mut status = VoiceStatus::default();
        status.apply(VoiceEvent::Transcribed(TranscriptionOutcome::Recognized("hi".into())));
        assert_eq!(status.line, notices::VOICE_SENDING);

        status.apply(VoiceEvent::Transcribed(TranscriptionOutcome::Failed("quota".into())));
        assert_eq!(status.line, "quota");
    }
}
