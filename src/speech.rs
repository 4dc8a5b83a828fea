//! Speech feedback policy.
//!
//! The platform capability sits behind [`SpeechBackend`] so the
//! cancel-before-speak contract is testable with a fake collaborator. The web
//! implementation (in the glue module) wraps `window.speechSynthesis`.

/// Japanese language tag handed to synthesis.
pub const SPEECH_LANG: &str = "ja-JP";
/// Slightly reduced rate so learners catch the reading.
pub const SPEECH_RATE: f32 = 0.9;
/// Shown when the runtime has no speech synthesis at all.
pub const UNAVAILABLE_MESSAGE: &str = "お使いのブラウザは音声読み上げに対応していません。";

/// Platform speech capability. May be entirely absent at runtime.
pub trait SpeechBackend {
    fn is_available(&self) -> bool;
    /// Stop any in-flight utterance.
    fn cancel(&mut self);
    /// Request synthesis of `text` (fire-and-forget).
    fn utter(&mut self, text: &str);
    /// Tell the user speech is unavailable (blocking notification, non-fatal).
    fn warn_unavailable(&mut self);
}

/// Pronounce `text`, cancelling whatever was still playing first so rapid
/// repeated requests never overlap. With no capability available the user is
/// warned and the drill carries on.
pub fn speak<B: SpeechBackend>(backend: &mut B, text: &str) {
    if !backend.is_available() {
        backend.warn_unavailable();
        return;
    }
    backend.cancel();
    backend.utter(text);
}
