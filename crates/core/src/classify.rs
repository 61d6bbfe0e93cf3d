//! Line classification for quiz text.
//!
//! Each trimmed, non-empty line gets exactly one category. The predicates
//! overlap, so they are evaluated as an explicit ordered rule table: Topic,
//! then Question, then Option, then Answer, with Continuation as the
//! fallback. A short all-caps line containing `?` therefore classifies as
//! Topic, not Question; downstream consumers rely on that precedence.

use regex::Regex;
use std::sync::LazyLock;

/// Question numbering at line start: `Q1.`, `Q1:`, `Q1)`.
static QUESTION_NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Q\d+[.:)]").unwrap());

/// Bare question marker at line start: `Q.`, `Q:`, `Q)`.
static QUESTION_BARE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^Q[.:)]").unwrap());

/// Plain numbering at line start: `1.`, `1:`, `1)`.
static QUESTION_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[.:)]").unwrap());

/// Spelled-out marker at line start: `Question.`, `Question 3:`.
static QUESTION_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Question\s*\d*[.:]").unwrap());

/// Letter option marker: `(a)`, `a)`, `A.`.
static OPTION_LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(?[A-Fa-f][).]").unwrap());

/// Digit option marker: `(1)`, `1)`, `1.`.
static OPTION_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(?\d[).]").unwrap());

/// Bracketed option marker: `[A]`.
static OPTION_BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[[A-Fa-f]\]").unwrap());

/// Words whose presence anywhere in a lower-cased line marks it as a heading.
pub(crate) const TOPIC_INDICATORS: &[&str] = &["chapter", "unit", "section", "topic", "part"];

/// Substrings whose presence in a lower-cased line marks it as an answer.
pub(crate) const ANSWER_INDICATORS: &[&str] = &[
    "answer",
    "correct answer",
    "correct option",
    "ans:",
    "ans.",
    "solution",
    "correct:",
];

/// Structural category of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Topic/section heading.
    Topic,
    /// Start of a new question.
    Question,
    /// Labeled answer option under the open question.
    Option,
    /// Answer indicator line under the open question.
    Answer,
    /// Extends the previous question or option text.
    Continuation,
}

type Predicate = fn(&str) -> bool;

/// Ordered rule table. The bool marks rules that only apply while a
/// question is open (options and answers outside a question are just text).
const RULES: &[(Predicate, LineKind, bool)] = &[
    (is_topic, LineKind::Topic, false),
    (is_question, LineKind::Question, false),
    (is_option, LineKind::Option, true),
    (is_answer, LineKind::Answer, true),
];

/// Classify one trimmed, non-empty line.
pub fn classify(line: &str, question_open: bool) -> LineKind {
    for (predicate, kind, needs_open_question) in RULES {
        if *needs_open_question && !question_open {
            continue;
        }
        if predicate(line) {
            return *kind;
        }
    }

    LineKind::Continuation
}

/// True if the line looks like a topic/section heading.
fn is_topic(line: &str) -> bool {
    // All caps with at least two words
    let has_upper = line.chars().any(|c| c.is_uppercase());
    let has_lower = line.chars().any(|c| c.is_lowercase());
    if has_upper && !has_lower && line.split_whitespace().count() >= 2 {
        return true;
    }

    // Contains a heading indicator word
    let lower = line.to_lowercase();
    if TOPIC_INDICATORS.iter().any(|word| lower.contains(word)) {
        return true;
    }

    // Short bold-like text: short lines that can't be questions or options
    if line.chars().count() < 50
        && !line.contains(['?', '(', ')'])
        && !line.starts_with(|c: char| c.is_ascii_digit())
        && !line.contains(':')
    {
        return true;
    }

    false
}

/// True if the line starts a question.
fn is_question(line: &str) -> bool {
    QUESTION_NUMBERED_RE.is_match(line)
        || QUESTION_BARE_RE.is_match(line)
        || QUESTION_DIGIT_RE.is_match(line)
        || QUESTION_WORD_RE.is_match(line)
        || line.contains('?')
}

/// True if the line carries an option marker like `(a)`, `B.`, or `[C]`.
fn is_option(line: &str) -> bool {
    OPTION_LETTER_RE.is_match(line)
        || OPTION_DIGIT_RE.is_match(line)
        || OPTION_BRACKET_RE.is_match(line)
}

/// True if the line carries an answer indicator.
fn is_answer(line: &str) -> bool {
    let lower = line.to_lowercase();
    ANSWER_INDICATORS.iter().any(|word| lower.contains(word))
}
