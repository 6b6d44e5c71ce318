//! Which of the two content regions of a card is rendered.
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    /// Side holding the question for the given host `back` flag.
    pub fn question(back: bool) -> Self {
        if back { Side::Back } else { Side::Front }
    }

    /// Side holding the reference answer, always opposite to the question.
    pub fn reference(back: bool) -> Self {
        Self::question(back).flipped()
    }

    pub fn flipped(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}
