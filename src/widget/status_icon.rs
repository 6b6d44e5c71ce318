//! Result indicator. The glyphs are compiled in, so showing a result never
//! waits on an asset load.
use egui::Color32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    Correct,
    Incorrect,
}

impl StatusIcon {
    pub fn for_result(correct: bool) -> Self {
        if correct {
            StatusIcon::Correct
        } else {
            StatusIcon::Incorrect
        }
    }

    /// Icon-set name of the indicator.
    pub fn name(self) -> &'static str {
        match self {
            StatusIcon::Correct => "icons:check-circle",
            StatusIcon::Incorrect => "icons:cancel",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            StatusIcon::Correct => "✔",
            StatusIcon::Incorrect => "✖",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            StatusIcon::Correct => Color32::from_rgb(0, 128, 0),
            StatusIcon::Incorrect => Color32::RED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_for_result() {
        assert_eq!(StatusIcon::for_result(true).name(), "icons:check-circle");
        assert_eq!(StatusIcon::for_result(false).name(), "icons:cancel");
        assert_ne!(StatusIcon::Correct.color(), StatusIcon::Incorrect.color());
    }
}
