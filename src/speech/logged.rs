use super::SpeechSynthesizer;
use async_trait::async_trait;
use std::time::Duration;

/// Synthesizer that reports utterances through `tracing`.
///
/// Holds the utterance open for `per_char` times its length so overlapping
/// announcements behave like a real voice.
#[derive(Clone, Debug)]
pub struct LogSynthesizer {
    per_char: Duration,
}

impl LogSynthesizer {
    pub fn new(per_char: Duration) -> Self {
        Self { per_char }
    }
}

impl Default for LogSynthesizer {
    fn default() -> Self {
        Self::new(Duration::from_millis(60))
    }
}

#[async_trait]
impl SpeechSynthesizer for LogSynthesizer {
    async fn speak(&self, text: &str, lang: &str) {
        tracing::info!(text, lang, "speaking");
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        tokio::time::sleep(self.per_char.saturating_mul(chars)).await;
        tracing::debug!(text, lang, "finished speaking");
    }
}
