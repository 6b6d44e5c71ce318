pub mod card_state;
pub mod flashcard;
pub mod matching;
pub mod side;

pub use card_state::{CardField, CardState};
pub use flashcard::Flashcard;
pub use matching::equals_ignoring_case;
pub use side::Side;
