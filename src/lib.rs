pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod reactive;
pub mod speech;
pub mod widget;

pub use models::{CardField, CardState, Flashcard, Side};
pub use widget::{AnswerBox, StatusIcon};
