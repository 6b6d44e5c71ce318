use super::SpeechSynthesizer;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Owns the utterance task of one widget.
///
/// Each [`Announcer::announce`] aborts the previous utterance before starting
/// the next one. Dropping the announcer aborts whatever is still speaking.
pub struct Announcer {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    runtime: Handle,
    language: String,
    current: Option<JoinHandle<()>>,
}

impl Announcer {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        runtime: Handle,
        language: impl Into<String>,
    ) -> Self {
        Self {
            synthesizer,
            runtime,
            language: language.into(),
            current: None,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Starts speaking `text`. Returns false when nothing was started, either
    /// because the text is blank or the synthesizer is unavailable.
    pub fn announce(&mut self, text: &str) -> bool {
        self.cancel();

        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        if !self.synthesizer.is_available() {
            tracing::debug!("speech synthesis unavailable, skipping announcement");
            return false;
        }

        let synthesizer = Arc::clone(&self.synthesizer);
        let text = text.to_string();
        let language = self.language.clone();
        self.current = Some(self.runtime.spawn(async move {
            synthesizer.speak(&text, &language).await;
        }));
        true
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            if !handle.is_finished() {
                tracing::debug!("interrupting announcement");
            }
            handle.abort();
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.current.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Announcer {
    fn drop(&mut self) {
        self.cancel();
    }
}
