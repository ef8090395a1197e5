// file: src/reconstruct/patterns.rs
// description: compiled patterns for merge/break decisions
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Lines that open an enumerated item ("1.", "A)") or a named section
    // ("Section A", "Part II", "Item 3") always start a fresh logical line.
    pub static ref STRUCTURAL_MARKER: Regex = Regex::new(
        r"^(\d+\.|[A-Z]\)|Section|Part|Item)"
    ).expect("STRUCTURAL_MARKER regex is valid");
}

// Sentence and clause terminators, ASCII plus the CJK full-width forms used
// in the source corpus.
const SENTENCE_TERMINATORS: [char; 8] = ['.', '?', '!', ':', '。', '？', '！', '：'];

pub fn is_structural_marker(line: &str) -> bool {
    STRUCTURAL_MARKER.is_match(line)
}

pub fn ends_sentence(line: &str) -> bool {
    line.ends_with(SENTENCE_TERMINATORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerated_markers() {
        assert!(is_structural_marker("1. First item"));
        assert!(is_structural_marker("12. Twelfth item"));
        assert!(is_structural_marker("A) option one"));
        assert!(is_structural_marker("D) option four"));
    }

    #[test]
    fn test_section_keywords() {
        assert!(is_structural_marker("Section A"));
        assert!(is_structural_marker("Part II Listening"));
        assert!(is_structural_marker("Item 3"));
    }

    #[test]
    fn test_non_markers() {
        assert!(!is_structural_marker("plain continuation text"));
        assert!(!is_structural_marker("a) lowercase is not a marker"));
        assert!(!is_structural_marker("sectional analysis"));
        assert!(!is_structural_marker("1 without a dot"));
    }

    #[test]
    fn test_marker_not_anchored_to_whole_line() {
        // Only the prefix matters; anything may follow.
        assert!(is_structural_marker("1."));
        assert!(is_structural_marker("B) "));
    }

    #[test]
    fn test_sentence_terminators() {
        assert!(ends_sentence("A full sentence."));
        assert!(ends_sentence("Really?"));
        assert!(ends_sentence("Go!"));
        assert!(ends_sentence("As follows:"));
        assert!(ends_sentence("中文句子。"));
        assert!(ends_sentence("真的吗？"));
        assert!(ends_sentence("快走！"));
        assert!(ends_sentence("如下："));
    }

    #[test]
    fn test_non_terminators() {
        assert!(!ends_sentence("trailing comma,"));
        assert!(!ends_sentence("no punctuation"));
        assert!(!ends_sentence("hyphen-"));
        assert!(!ends_sentence(""));
    }
}
