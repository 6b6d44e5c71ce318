mod app;

use answer_box::AnswerBox;
use answer_box::config::AnswerBoxConfig;
use answer_box::i18n::EmbeddedLocalization;
use answer_box::speech::{Announcer, LogSynthesizer, Silent, SpeechSynthesizer};
use app::{AnswerBoxApp, sample_deck};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AnswerBoxConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        AnswerBoxConfig::default()
    });

    let localization = config.localization().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid locale settings, using shipped locales");
        Box::new(EmbeddedLocalization::default())
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .expect("Failed to start speech runtime");

    let synthesizer: Arc<dyn SpeechSynthesizer> = if config.speech_enabled {
        Arc::new(LogSynthesizer::new(config.speech_char_delay()))
    } else {
        Arc::new(Silent)
    };
    let announcer = Announcer::new(
        synthesizer,
        runtime.handle().clone(),
        config.base_locale.clone(),
    );

    let mut locales = vec![config.base_locale.clone()];
    locales.extend(config.supported_locales.iter().cloned());
    let startup_locale = config.startup_locale(std::env::var("LANG").ok().as_deref());
    tracing::info!(locale = %startup_locale, speech = config.speech_enabled, "starting answer box");

    let app = AnswerBoxApp::new(
        AnswerBox::new(localization, announcer),
        sample_deck(),
        locales,
        &startup_locale,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native("Answer Box", options, Box::new(move |_cc| Ok(Box::new(app))))
}
