//! The answer box widget.
//!
//! Shows one side of a [`Flashcard`] as the prompt, takes a typed answer and
//! checks it against the other side. Checking reveals the reference side,
//! shows a correct/incorrect indicator and announces the reference answer.
//!
//! State lives in a [`Store<CardState>`]; hosts observe it with
//! [`AnswerBox::subscribe`]. The widget reacts to two field changes itself:
//! a new `back` flag re-derives the side to show, and a result becoming
//! visible resolves the status icon.

use crate::i18n::{Locale, LocaleStrings, LocalizationProvider};
use crate::models::{CardField, CardState, Flashcard, Side, equals_ignoring_case};
use crate::reactive::{Store, SubscriptionId};
use crate::speech::Announcer;
use crate::widget::StatusIcon;
use eframe::egui;

pub struct AnswerBox {
    store: Store<CardState>,
    card: Flashcard,
    localization: Box<dyn LocalizationProvider>,
    locale: Locale,
    strings: LocaleStrings,
    announcer: Announcer,
    input_id: egui::Id,
}

impl AnswerBox {
    /// Creates a widget showing the base locale's labels. The announcer keeps
    /// its own language until the first [`AnswerBox::set_locale`].
    pub fn new(localization: Box<dyn LocalizationProvider>, announcer: Announcer) -> Self {
        let locale = localization.base().clone();
        Self {
            store: Store::default(),
            card: Flashcard::default(),
            localization,
            locale,
            strings: LocaleStrings::default(),
            announcer,
            input_id: egui::Id::new("answer_box_input"),
        }
    }

    pub fn state(&self) -> &CardState {
        self.store.get()
    }

    pub fn card(&self) -> &Flashcard {
        &self.card
    }

    /// Text of the side currently rendered as the prompt.
    pub fn prompt(&self) -> Option<&str> {
        self.card.slot(self.state().side_to_show)
    }

    pub fn strings(&self) -> &LocaleStrings {
        &self.strings
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn speech_language(&self) -> &str {
        self.announcer.language()
    }

    pub fn is_speaking(&self) -> bool {
        self.announcer.is_speaking()
    }

    pub fn check_disabled(&self) -> bool {
        self.state().check_disabled()
    }

    /// Indicator for the shown result, `None` while no result is shown.
    pub fn status_icon(&self) -> Option<StatusIcon> {
        self.state().result().map(StatusIcon::for_result)
    }

    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&CardState, &[CardField]) + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Replaces the card content and starts a fresh interaction, silencing
    /// any announcement of the previous card.
    pub fn set_card(&mut self, card: Flashcard) {
        self.announcer.cancel();
        self.card = card;
        self.reset();
    }

    /// Switches the labels to `code`. Unknown or unloadable locales show the
    /// default labels; the speech voice always follows the requested locale.
    pub fn set_locale(&mut self, code: &str) {
        match Locale::parse(code) {
            Ok(locale) => {
                self.strings = self.localization.resolve(&locale);
                self.locale = locale;
            }
            Err(e) => {
                tracing::warn!(code, error = %e, "ignoring invalid locale");
                self.strings = LocaleStrings::default();
                self.locale = self.localization.base().clone();
            }
        }
        self.announcer.set_language(self.locale.language());
        tracing::info!(locale = %self.locale, "locale changed");
    }

    pub fn set_back(&mut self, back: bool) {
        self.apply(|state| state.back = back);
    }

    pub fn set_side_to_show(&mut self, side: Side) {
        self.apply(|state| state.side_to_show = side);
    }

    pub fn on_input_changed(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.apply(|state| state.user_answer = text);
    }

    /// Compares the typed answer with the reference side and reveals it.
    ///
    /// Returns the result, or `None` when the check action is disabled.
    /// A missing or blank reference side always yields an incorrect result.
    pub fn check_answer(&mut self) -> Option<bool> {
        if self.check_disabled() {
            return None;
        }

        let back = self.state().back;
        let reference = self.card.reference(back).map(str::to_owned);
        let correct = match &reference {
            Some(reference) => equals_ignoring_case(reference, &self.state().user_answer),
            None => {
                tracing::warn!(side = ?Side::reference(back), "reference side is empty");
                false
            }
        };

        self.apply(|state| {
            state.correct = correct;
            state.show_result = true;
            state.side_to_show = Side::reference(back);
        });
        tracing::debug!(correct, "answer checked");

        match reference {
            Some(reference) => {
                self.announcer.announce(&reference);
            }
            None => self.announcer.cancel(),
        }
        Some(correct)
    }

    /// Returns the interaction to its defaults.
    pub fn reset(&mut self) {
        self.apply(|state| {
            state.user_answer.clear();
            state.correct = false;
            state.show_result = false;
            state.side_to_show = Side::question(state.back);
        });
    }

    fn apply(&mut self, mutate: impl FnOnce(&mut CardState)) {
        let changed = self.store.update(mutate);

        if changed.contains(&CardField::Back) {
            let side = Side::question(self.state().back);
            self.store.update(|state| state.side_to_show = side);
        }
        if changed.contains(&CardField::ShowResult) {
            if let Some(icon) = self.status_icon() {
                tracing::debug!(icon = icon.name(), "showing result");
            }
        }
    }

    /// Renders the widget. Enter in the answer field acts as the check button.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let mut answer = self.state().user_answer.clone();
        let mut check = false;
        let mut restart = false;

        ui.vertical_centered(|ui| {
            let prompt = self.prompt().unwrap_or_default();
            ui.label(egui::RichText::new(prompt).size(20.0));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let field = ui.add(
                    egui::TextEdit::singleline(&mut answer)
                        .id(self.input_id)
                        .hint_text(self.strings.your_answer.as_str())
                        .desired_width(160.0),
                );
                if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    check = true;
                    field.request_focus();
                }

                let button = egui::Button::new(self.strings.check_answer.as_str());
                if ui.add_enabled(!answer.is_empty(), button).clicked() {
                    check = true;
                }
            });

            if let Some(icon) = self.status_icon() {
                ui.add_space(10.0);
                ui.label(egui::RichText::new(icon.glyph()).size(40.0).color(icon.color()));
                if ui.button(self.strings.restart_activity.as_str()).clicked() {
                    restart = true;
                }
            }
        });

        if answer != self.state().user_answer {
            self.on_input_changed(answer);
        }
        if check {
            self.check_answer();
        }
        if restart {
            self.reset();
        }
    }
}
