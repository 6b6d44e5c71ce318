//! Demo host for the answer box.
//! Steps through a small deck and plays the parent scoring UI: it keeps a
//! score from the widget's state notifications and shows the observable state.

use answer_box::{AnswerBox, CardField, Flashcard};
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Score {
    correct: u32,
    attempts: u32,
}

pub struct AnswerBoxApp {
    deck: Vec<Flashcard>,
    current: usize,
    answer_box: AnswerBox,
    locales: Vec<String>,
    selected_locale: String,
    back: bool,
    score: Rc<RefCell<Score>>,
}

pub fn sample_deck() -> Vec<Flashcard> {
    vec![
        Flashcard::new("2+2?", "4"),
        Flashcard::new("Capital of Spain?", "Madrid"),
        Flashcard::new("cześć", "hello"),
        Flashcard::new("dziękuję", "thank you"),
    ]
}

impl AnswerBoxApp {
    pub fn new(
        mut answer_box: AnswerBox,
        deck: Vec<Flashcard>,
        locales: Vec<String>,
        locale: &str,
    ) -> Self {
        let score = Rc::new(RefCell::new(Score::default()));
        let tally = Rc::clone(&score);
        answer_box.subscribe(move |state, fields| {
            if fields.contains(&CardField::ShowResult) && state.show_result {
                let mut score = tally.borrow_mut();
                score.attempts += 1;
                if state.correct {
                    score.correct += 1;
                }
            }
        });

        answer_box.set_locale(locale);
        if let Some(card) = deck.first() {
            answer_box.set_card(card.clone());
        }

        Self {
            deck,
            current: 0,
            answer_box,
            locales,
            selected_locale: locale.to_string(),
            back: false,
            score,
        }
    }

    fn next_card(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.deck.len();
        self.answer_box.set_card(self.deck[self.current].clone());
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let previous_locale = self.selected_locale.clone();
            egui::ComboBox::from_label("Language")
                .selected_text(self.selected_locale.as_str())
                .show_ui(ui, |ui| {
                    for code in &self.locales {
                        ui.selectable_value(&mut self.selected_locale, code.clone(), code.as_str());
                    }
                });
            if self.selected_locale != previous_locale {
                self.answer_box.set_locale(&self.selected_locale);
            }

            if ui.checkbox(&mut self.back, "Ask the back side").changed() {
                self.answer_box.set_back(self.back);
            }

            if ui.button("Next card").clicked() {
                self.next_card();
            }
        });
    }

    fn render_score(&self, ui: &mut egui::Ui) {
        let score = self.score.borrow();
        ui.label(format!(
            "Card {} / {}   Score: {} / {}",
            self.current + 1,
            self.deck.len(),
            score.correct,
            score.attempts
        ));

        ui.collapsing("Card state", |ui| {
            match serde_json::to_string_pretty(self.answer_box.state()) {
                Ok(json) => ui.monospace(json),
                Err(e) => ui.label(format!("State unavailable: {}", e)),
            };
        });
    }
}

impl eframe::App for AnswerBoxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_controls(ui);
        });

        egui::TopBottomPanel::bottom("score").show(ctx, |ui| {
            self.render_score(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(40.0);
            self.answer_box.show(ui);
        });

        // Keep repainting while the reference answer is being announced.
        if self.answer_box.is_speaking() {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }
    }
}
