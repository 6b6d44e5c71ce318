//! Flashcard is a pair of named regions <front, back> supplied by the host.
//! Either region may be missing; only text is used.
use super::Side;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flashcard {
    pub front: Option<String>,
    pub back: Option<String>,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: Some(front.into()),
            back: Some(back.into()),
        }
    }

    /// Trimmed text of a region, `None` when the region is missing or blank.
    pub fn slot(&self, side: Side) -> Option<&str> {
        let text = match side {
            Side::Front => self.front.as_deref(),
            Side::Back => self.back.as_deref(),
        };
        text.map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn question(&self, back: bool) -> Option<&str> {
        self.slot(Side::question(back))
    }

    pub fn reference(&self, back: bool) -> Option<&str> {
        self.slot(Side::reference(back))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_creation() {
        let card = Flashcard::new("2+2?", "4");

        assert_eq!(card.slot(Side::Front), Some("2+2?"));
        assert_eq!(card.slot(Side::Back), Some("4"));
    }

    #[test]
    fn test_reference_swaps_with_back_flag() {
        let card = Flashcard::new("capital of Spain", "Madrid");

        assert_eq!(card.question(false), Some("capital of Spain"));
        assert_eq!(card.reference(false), Some("Madrid"));
        assert_eq!(card.question(true), Some("Madrid"));
        assert_eq!(card.reference(true), Some("capital of Spain"));
    }

    #[test]
    fn test_blank_slot_is_missing() {
        let card = Flashcard {
            front: Some("question".to_string()),
            back: Some("   ".to_string()),
        };

        assert_eq!(card.reference(false), None);
        assert_eq!(Flashcard::default().slot(Side::Front), None);
    }
}
