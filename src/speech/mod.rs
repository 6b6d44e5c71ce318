//! Speech announcement of reference answers.
//!
//! The runtime's text-to-speech capability sits behind [`SpeechSynthesizer`].
//! The widget never talks to it directly; it goes through an [`Announcer`],
//! which keeps at most one utterance in flight.

mod announcer;
mod logged;
#[cfg(test)]
pub(crate) mod testing;

pub use announcer::Announcer;
pub use logged::LogSynthesizer;

use async_trait::async_trait;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Speaks `text` with a voice for `lang`, resolving when the utterance ends.
    async fn speak(&self, text: &str, lang: &str);

    /// Whether the capability exists in this environment.
    fn is_available(&self) -> bool {
        true
    }
}

/// Stands in for an environment without speech synthesis.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

#[async_trait]
impl SpeechSynthesizer for Silent {
    async fn speak(&self, _text: &str, _lang: &str) {}

    fn is_available(&self) -> bool {
        false
    }
}
