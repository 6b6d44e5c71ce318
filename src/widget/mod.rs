pub mod answer_box;
pub mod status_icon;

pub use answer_box::AnswerBox;
pub use status_icon::StatusIcon;
