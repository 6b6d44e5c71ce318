//! View state of one answer box.
//!
//! Serializes with the attribute names a parent scoring UI observes:
//! `back`, `side-to-show`, `user-answer`, `correct` and `show-result`.
use super::Side;
use crate::reactive::Changes;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CardState {
    /// Host flag: when set, the back region holds the question.
    pub back: bool,
    #[serde(rename = "side-to-show")]
    pub side_to_show: Side,
    #[serde(rename = "user-answer")]
    pub user_answer: String,
    /// Only meaningful while `show_result` is set.
    pub correct: bool,
    #[serde(rename = "show-result")]
    pub show_result: bool,
}

/// Observable fields of [`CardState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardField {
    Back,
    SideToShow,
    UserAnswer,
    Correct,
    ShowResult,
}

impl CardState {
    pub fn check_disabled(&self) -> bool {
        self.user_answer.is_empty()
    }

    /// Result of the last check, `None` while no result is shown.
    pub fn result(&self) -> Option<bool> {
        self.show_result.then_some(self.correct)
    }
}

impl Changes for CardState {
    type Field = CardField;

    fn changes(&self, previous: &Self) -> Vec<CardField> {
        let mut changed = Vec::new();
        if self.back != previous.back {
            changed.push(CardField::Back);
        }
        if self.side_to_show != previous.side_to_show {
            changed.push(CardField::SideToShow);
        }
        if self.user_answer != previous.user_answer {
            changed.push(CardField::UserAnswer);
        }
        if self.correct != previous.correct {
            changed.push(CardField::Correct);
        }
        if self.show_result != previous.show_result {
            changed.push(CardField::ShowResult);
        }
        changed
    }
}
