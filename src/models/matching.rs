//! Answer comparison.
//!
//! Two texts match when they are equal after compatibility decomposition,
//! full Unicode case folding and dropping combining marks, so "Madrid",
//! "ＭＡＤＲＩＤ" and "madríd" are the same answer, as are "straße" and
//! "STRASSE". Leading and trailing whitespace is ignored.
use caseless::default_case_fold_str;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub fn equals_ignoring_case(reference: &str, answer: &str) -> bool {
    fold(reference) == fold(answer)
}

fn fold(text: &str) -> String {
    let decomposed: String = text.trim().nfkd().collect();
    default_case_fold_str(&decomposed)
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_only_difference_matches() {
        assert!(equals_ignoring_case("Madrid", "madrid"));
        assert!(equals_ignoring_case("Madrid", "MADRID"));
    }

    #[test]
    fn test_different_words_do_not_match() {
        assert!(!equals_ignoring_case("Madrid", "Berlin"));
        assert!(!equals_ignoring_case("4", "five"));
    }

    #[test]
    fn test_accents_are_ignored() {
        assert!(equals_ignoring_case("Bogotá", "bogota"));
        assert!(equals_ignoring_case("ÉTÉ", "été"));
    }

    #[test]
    fn test_non_latin_case_folding() {
        assert!(equals_ignoring_case("ΑΘΗΝΑ", "αθηνα"));
        assert!(equals_ignoring_case("Cześć", "czesc"));
    }

    #[test]
    fn test_multi_char_case_pairs_match() {
        assert!(equals_ignoring_case("straße", "STRASSE"));
        assert!(equals_ignoring_case("STRASSE", "Straße"));
    }

    #[test]
    fn test_compatibility_variants_match() {
        assert!(equals_ignoring_case("Ｍadrid", "madrid"));
        assert!(equals_ignoring_case("ﬁnal", "FINAL"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(equals_ignoring_case(" 4 ", "4"));
        assert!(!equals_ignoring_case("new york", "newyork"));
    }
}
