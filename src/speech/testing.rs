use super::SpeechSynthesizer;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// Records started and completed utterances.
#[derive(Default)]
pub(crate) struct Recorder {
    pub started: Mutex<Vec<(String, String)>>,
    pub finished: Mutex<Vec<String>>,
    pub delay: Duration,
}

#[async_trait]
impl SpeechSynthesizer for Recorder {
    async fn speak(&self, text: &str, lang: &str) {
        self.started.lock().unwrap().push((text.to_string(), lang.to_string()));
        tokio::time::sleep(self.delay).await;
        self.finished.lock().unwrap().push(text.to_string());
    }
}
