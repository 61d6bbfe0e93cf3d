//! Sequential assembly of classified lines into topic records.
//!
//! The [`Assembler`] is a single-pass state machine over the document's line
//! stream. It tracks the topic record being filled, the question being built,
//! and how many questions have been committed so far; the commit counter
//! doubles as the asset slot index for positional correlation. One assembler
//! serves exactly one document.

use crate::classify::{classify, LineKind};
use crate::correlate::AssetCorrelator;
use crate::normalize;
use crate::types::{DocumentContent, ImageAsset, Question, Topic};

/// Topic name used when questions appear before any heading.
const FALLBACK_TOPIC: &str = "General Questions";

/// State machine that folds a line stream into topic records.
pub struct Assembler<'a> {
    topics: Vec<Topic>,
    /// Index into `topics` of the record receiving commits.
    current_topic: Option<usize>,
    current_question: Option<Question>,
    current_options: Vec<String>,
    /// Questions committed so far; also the next asset slot.
    commit_count: usize,
    correlator: AssetCorrelator<'a>,
}

impl<'a> Assembler<'a> {
    /// Create an assembler correlating against the given asset lists.
    pub fn new(images: &'a [ImageAsset], links: &'a [String]) -> Self {
        Self {
            topics: Vec::new(),
            current_topic: None,
            current_question: None,
            current_options: Vec::new(),
            commit_count: 0,
            correlator: AssetCorrelator::new(images, links),
        }
    }

    /// Feed one raw line. Blank lines cause no transition.
    pub fn push_line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        match classify(line, self.current_question.is_some()) {
            LineKind::Topic => {
                self.commit_open_question();
                self.topics.push(Topic::new(normalize::normalize_topic(line)));
                self.current_topic = Some(self.topics.len() - 1);
            }
            LineKind::Question => {
                self.commit_open_question();
                self.current_question =
                    Some(Question::new(normalize::normalize_question(line)));
            }
            LineKind::Option => {
                self.current_options.push(normalize::normalize_option(line));
            }
            LineKind::Answer => {
                // First answer line wins; later ones are ignored
                if let Some(question) = &mut self.current_question {
                    if question.answer.is_none() {
                        question.answer = Some(normalize::normalize_answer(line));
                    }
                }
            }
            LineKind::Continuation => self.push_continuation(line),
        }
    }

    /// Soft-wrap join onto the last option, else the question text.
    /// With no question open the line is pre-amble and is dropped.
    fn push_continuation(&mut self, line: &str) {
        if let Some(last) = self.current_options.last_mut() {
            *last = join_continuation(last, line);
        } else if let Some(question) = &mut self.current_question {
            question.text = join_continuation(&question.text, line);
        } else {
            log::debug!("dropping pre-amble line: {}", line);
        }
    }

    /// Finalize the in-progress question, if any: attach options, correlate
    /// assets by commit index, and append it to the current topic record.
    fn commit_open_question(&mut self) {
        let Some(mut question) = self.current_question.take() else {
            return;
        };

        question.options = std::mem::take(&mut self.current_options);
        self.correlator.attach(self.commit_count, &mut question);
        self.commit_count += 1;

        let index = match self.current_topic {
            Some(index) => index,
            None => {
                // Questions arrived before any heading
                self.topics.push(Topic::new(FALLBACK_TOPIC));
                let index = self.topics.len() - 1;
                self.current_topic = Some(index);
                index
            }
        };

        self.topics[index].questions.push(question);
    }

    /// Commit any in-progress question and drop topics without questions.
    ///
    /// An empty result means no MCQs were found, which is the documented
    /// "nothing found" signal rather than an error.
    pub fn finish(mut self) -> Vec<Topic> {
        self.commit_open_question();
        self.topics.retain(|topic| !topic.questions.is_empty());
        self.topics
    }
}

/// Join with a single separating space; a marker line whose prefix was the
/// whole line (a bare `Q1:` or `(a)`) contributes no text and no space.
fn join_continuation(text: &str, line: &str) -> String {
    if text.is_empty() {
        line.to_string()
    } else {
        format!("{} {}", text, line)
    }
}

/// Extract topic records from a line stream plus page-ordered asset lists.
pub fn extract_topics<I>(lines: I, images: &[ImageAsset], links: &[String]) -> Vec<Topic>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut assembler = Assembler::new(images, links);
    for line in lines {
        assembler.push_line(line.as_ref());
    }
    assembler.finish()
}

/// Extract topic records from a reader backend's output.
pub fn extract_document(content: &DocumentContent) -> Vec<Topic> {
    extract_topics(content.lines(), &content.images, &content.links)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> Vec<Topic> {
        extract_topics(lines, &[], &[])
    }

    #[test]
    fn test_no_questions_yields_empty_output() {
        assert!(run(&[]).is_empty());
        assert!(run(&["UNIT ONE KINEMATICS"]).is_empty());
        assert!(run(&["ALPHA FIRST TOPIC", "BETA SECOND TOPIC"]).is_empty());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let topics = run(&[
            "UNIT ONE KINEMATICS",
            "Q1. What is speed?",
            "(a) Distance",
            "(b) Distance/Time",
            "(c) Time/Distance",
            "Answer: b",
        ]);

        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].name, "ONE KINEMATICS");
        assert_eq!(topics[0].questions.len(), 1);

        let question = &topics[0].questions[0];
        assert_eq!(question.text, "What is speed?");
        assert_eq!(question.options, vec!["Distance", "Distance/Time", "Time/Distance"]);
        assert_eq!(question.answer.as_deref(), Some("b"));
        assert!(question.image.is_none());
        assert!(question.video_link.is_none());
    }

    #[test]
    fn test_questions_before_any_heading_get_fallback_topic() {
        let topics = run(&["Q1. What is speed?", "(a) Distance", "(b) Time"]);

        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].name, "General Questions");
        assert_eq!(topics[0].questions.len(), 1);
    }

    #[test]
    fn test_empty_topics_are_dropped() {
        // The first heading never receives a question; the second takes it
        let topics = run(&[
            "ALPHA FIRST TOPIC",
            "BETA SECOND TOPIC",
            "Q1. What is speed?",
        ]);

        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].name, "BETA SECOND TOPIC");
        assert_eq!(topics[0].questions.len(), 1);
    }

    #[test]
    fn test_option_order_preserved() {
        let topics = run(&["Q1. Capital of France?", "(a) Paris", "(b) London", "(c) Rome"]);

        assert_eq!(topics[0].questions[0].options, vec!["Paris", "London", "Rome"]);
    }

    #[test]
    fn test_duplicate_options_are_kept() {
        let topics = run(&["Q1. Pick one?", "(a) Paris", "(b) Paris"]);

        assert_eq!(topics[0].questions[0].options, vec!["Paris", "Paris"]);
    }

    #[test]
    fn test_continuation_folds_into_question_text() {
        let topics = run(&[
            "Q1. What does terminal velocity mean for an object",
            "measured relative to the surrounding medium rather than the ground",
        ]);

        assert_eq!(
            topics[0].questions[0].text,
            "What does terminal velocity mean for an object \
             measured relative to the surrounding medium rather than the ground"
        );
    }

    #[test]
    fn test_continuation_folds_into_last_option() {
        let topics = run(&[
            "Q1. Which statement is true?",
            "(a) momentum is conserved",
            "(b) energy is conserved only when the collision between the two",
            "bodies involved happens to be perfectly elastic in every respect",
        ]);

        let options = &topics[0].questions[0].options;
        assert_eq!(options[0], "momentum is conserved");
        assert_eq!(
            options[1],
            "energy is conserved only when the collision between the two \
             bodies involved happens to be perfectly elastic in every respect"
        );
    }

    #[test]
    fn test_continuation_after_bare_question_marker_has_no_leading_space() {
        // "Q1:" strips to empty question text; the continuation becomes the
        // whole text rather than being joined onto nothing
        let topics = run(&[
            "Q1:",
            "measured relative to the surrounding medium rather than the ground",
        ]);

        assert_eq!(
            topics[0].questions[0].text,
            "measured relative to the surrounding medium rather than the ground"
        );
    }

    #[test]
    fn test_continuation_after_bare_option_marker_has_no_leading_space() {
        let topics = run(&[
            "Q1. Which statement is true?",
            "(a)",
            "momentum is conserved in every collision regardless of elasticity",
        ]);

        assert_eq!(
            topics[0].questions[0].options,
            vec!["momentum is conserved in every collision regardless of elasticity"]
        );
    }

    #[test]
    fn test_preamble_before_first_question_is_dropped() {
        let topics = run(&[
            "answer all of the following strictly within the allotted ninety minutes",
            "Q1. What is speed?",
        ]);

        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].questions[0].text, "What is speed?");
    }

    #[test]
    fn test_first_answer_wins() {
        let topics = run(&["Q1. What is speed?", "Answer: b", "Answer: c"]);

        assert_eq!(topics[0].questions[0].answer.as_deref(), Some("b"));
    }

    #[test]
    fn test_blank_lines_cause_no_transition() {
        let topics = run(&["Q1. What is speed?", "", "   ", "(a) Distance"]);

        assert_eq!(topics[0].questions[0].options, vec!["Distance"]);
    }

    #[test]
    fn test_asset_correlation_by_position() {
        let images = vec![ImageAsset::new(1, 0, "/tmp/page1_img0.jpg")];
        let topics = extract_topics(
            ["Q1. First question?", "Q2. Second question?"],
            &images,
            &[],
        );

        let questions = &topics[0].questions;
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].image.as_deref(), Some("/tmp/page1_img0.jpg"));
        assert!(questions[1].image.is_none());
    }

    #[test]
    fn test_commit_after_topic_boundary_advances_assets() {
        // The first question is committed by the topic boundary, the second
        // at end of input; they must consume distinct asset slots.
        let images = vec![
            ImageAsset::new(1, 0, "/tmp/page1_img0.jpg"),
            ImageAsset::new(2, 0, "/tmp/page2_img0.jpg"),
        ];
        let links = vec![
            "https://youtube.com/watch?v=first".to_string(),
            "https://youtube.com/watch?v=second".to_string(),
        ];

        let topics = extract_topics(
            [
                "Q1. First question?",
                "SECOND TOPIC HEADING",
                "Q2. Second question?",
            ],
            &images,
            &links,
        );

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].name, "General Questions");
        assert_eq!(topics[1].name, "SECOND TOPIC HEADING");

        let first = &topics[0].questions[0];
        let second = &topics[1].questions[0];
        assert_eq!(first.image.as_deref(), Some("/tmp/page1_img0.jpg"));
        assert_eq!(second.image.as_deref(), Some("/tmp/page2_img0.jpg"));
        assert_eq!(first.video_link.as_deref(), Some("https://youtube.com/watch?v=first"));
        assert_eq!(second.video_link.as_deref(), Some("https://youtube.com/watch?v=second"));
    }

    #[test]
    fn test_extract_document_uses_all_pages() {
        use crate::types::{DocumentContent, DocumentFormat};

        let mut content = DocumentContent::new("quiz.txt", DocumentFormat::Text);
        content.pages.push("Q1. What is speed?\n(a) Distance".to_string());
        content.pages.push("(b) Distance/Time\nAnswer: b".to_string());

        let topics = extract_document(&content);
        assert_eq!(topics.len(), 1);

        let question = &topics[0].questions[0];
        assert_eq!(question.options, vec!["Distance", "Distance/Time"]);
        assert_eq!(question.answer.as_deref(), Some("b"));
    }
}
