//! Structural prefix stripping for classified lines.
//!
//! Each category keeps only its semantic content: heading indicator words,
//! question numbering, option labels, and answer indicators are removed.
//! Stripping is idempotent, so re-normalizing already-clean text is a no-op.

use crate::classify::LineKind;
use regex::Regex;
use std::sync::LazyLock;

/// Leading heading indicator: `Chapter 3:`, `UNIT`, `Section.`.
static TOPIC_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(chapter|unit|section|topic|part)\s*\d*[:.]?\s*").unwrap());

/// Leading question marker: `Q1.`, `Question 4:`, `Q)`.
static QUESTION_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(q|question)\s*\d*[.:)]\s*").unwrap());

/// Leading bare numbering: `12.`, `3)`.
static NUMBER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[.:)]\s*").unwrap());

/// Leading option label: `(a)`, `B.`, `[C]`.
static OPTION_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[(\[]?[A-Fa-f\d][).\]]\s*").unwrap());

/// Leading answer indicator: `Answer:`, `ans.`, `Correct`.
static ANSWER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(correct answer|correct option|answer|ans|solution|correct)[:.]?\s*")
        .unwrap()
});

/// Strip the structural prefix appropriate for the line's category.
///
/// Continuation lines have no structure to strip; they are only trimmed.
pub fn normalize(kind: LineKind, line: &str) -> String {
    match kind {
        LineKind::Topic => normalize_topic(line),
        LineKind::Question => normalize_question(line),
        LineKind::Option => normalize_option(line),
        LineKind::Answer => normalize_answer(line),
        LineKind::Continuation => line.trim().to_string(),
    }
}

/// Strip a leading heading indicator word with optional numbering.
pub fn normalize_topic(line: &str) -> String {
    TOPIC_PREFIX_RE.replace(line, "").trim().to_string()
}

/// Strip question numbering: a `Q`/`Question` marker first, then any bare
/// digit run that remains (handles `Q1.` as well as `1.` styles).
pub fn normalize_question(line: &str) -> String {
    let stripped = QUESTION_PREFIX_RE.replace(line, "");
    let stripped = NUMBER_PREFIX_RE.replace(&stripped, "");
    stripped.trim().to_string()
}

/// Strip a leading option label.
pub fn normalize_option(line: &str) -> String {
    OPTION_PREFIX_RE.replace(line, "").trim().to_string()
}

/// Strip a leading answer indicator.
pub fn normalize_answer(line: &str) -> String {
    ANSWER_PREFIX_RE.replace(line, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_topic() {
        assert_eq!(normalize_topic("UNIT ONE KINEMATICS"), "ONE KINEMATICS");
        assert_eq!(normalize_topic("Chapter 3: Optics"), "Optics");
        assert_eq!(normalize_topic("Section 12. Waves"), "Waves");
        assert_eq!(normalize_topic("topic Thermodynamics"), "Thermodynamics");
        // Indicator word only counts at the start
        assert_eq!(
            normalize_topic("SECOND TOPIC HEADING"),
            "SECOND TOPIC HEADING"
        );
    }

    #[test]
    fn test_normalize_question() {
        assert_eq!(normalize_question("Q1. What is speed?"), "What is speed?");
        assert_eq!(normalize_question("Q: What is speed?"), "What is speed?");
        assert_eq!(normalize_question("12) What is speed?"), "What is speed?");
        assert_eq!(
            normalize_question("Question 4: What is speed?"),
            "What is speed?"
        );
        // Both markers stacked
        assert_eq!(normalize_question("Q1. 2. What is speed?"), "What is speed?");
    }

    #[test]
    fn test_normalize_option() {
        assert_eq!(normalize_option("(a) Paris"), "Paris");
        assert_eq!(normalize_option("b) London"), "London");
        assert_eq!(normalize_option("C. Rome"), "Rome");
        assert_eq!(normalize_option("[D] Berlin"), "Berlin");
        assert_eq!(normalize_option("1. First"), "First");
    }

    #[test]
    fn test_normalize_answer() {
        assert_eq!(normalize_answer("Answer: b"), "b");
        assert_eq!(normalize_answer("ans. c"), "c");
        assert_eq!(normalize_answer("Correct answer: d"), "d");
        assert_eq!(normalize_answer("Solution: a"), "a");
    }

    #[test]
    fn test_normalize_dispatch() {
        assert_eq!(
            normalize(LineKind::Question, "Q1. What is speed?"),
            "What is speed?"
        );
        assert_eq!(normalize(LineKind::Continuation, "  plain text  "), "plain text");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let topic = normalize_topic("UNIT ONE KINEMATICS");
        assert_eq!(normalize_topic(&topic), topic);

        let question = normalize_question("Q1. What is speed?");
        assert_eq!(normalize_question(&question), question);

        let option = normalize_option("(a) Distance");
        assert_eq!(normalize_option(&option), option);

        let answer = normalize_answer("Answer: b");
        assert_eq!(normalize_answer(&answer), answer);
    }
}
