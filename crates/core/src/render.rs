//! Plain-text quiz rendering.
//!
//! Formats extracted topic records as readable quiz text: a header per
//! topic, numbered questions, lettered options, and answer/asset lines.

use crate::types::{Question, Topic};

/// Labels handed out to options in order; extra options print unlabeled.
const OPTION_LABELS: &[char] = &['A', 'B', 'C', 'D', 'E', 'F'];

/// Formatter for plain-text quiz output.
#[derive(Debug, Clone)]
pub struct QuizFormatter {
    /// Whether to print image/video lines for correlated assets.
    show_assets: bool,
}

impl Default for QuizFormatter {
    fn default() -> Self {
        Self { show_assets: true }
    }
}

impl QuizFormatter {
    /// Create a new formatter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether correlated image/video lines are printed.
    pub fn with_assets(mut self, show: bool) -> Self {
        self.show_assets = show;
        self
    }

    /// Format topic records into quiz text.
    ///
    /// Topics are separated by blank lines; an empty topic list yields the
    /// empty string.
    ///
    /// # Example output
    /// ```text
    /// Topic: ONE KINEMATICS
    /// ---------------------
    /// Q1. What is speed?
    /// A) Distance
    /// B) Distance/Time
    /// Answer: b
    /// ```
    pub fn format(&self, topics: &[Topic]) -> String {
        let blocks: Vec<String> = topics.iter().map(|topic| self.format_topic(topic)).collect();
        blocks.join("\n\n")
    }

    /// Format and add a trailing newline unless the result is empty.
    pub fn format_with_newline(&self, topics: &[Topic]) -> String {
        let formatted = self.format(topics);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }

    fn format_topic(&self, topic: &Topic) -> String {
        let header = format!("Topic: {}", topic.name);
        let rule = "-".repeat(header.chars().count());

        let mut blocks = vec![format!("{}\n{}", header, rule)];
        for (number, question) in topic.questions.iter().enumerate() {
            blocks.push(self.format_question(number + 1, question));
        }

        blocks.join("\n\n")
    }

    /// Display numbering is per-topic, independent of source numbering.
    fn format_question(&self, number: usize, question: &Question) -> String {
        let mut lines = vec![format!("Q{}. {}", number, question.text)];

        for (index, option) in question.options.iter().enumerate() {
            match OPTION_LABELS.get(index) {
                Some(label) => lines.push(format!("{}) {}", label, option)),
                None => lines.push(option.clone()),
            }
        }

        if let Some(answer) = &question.answer {
            lines.push(format!("Answer: {}", answer));
        }

        if self.show_assets {
            if let Some(image) = &question.image {
                lines.push(format!("Image: {}", image));
            }
            if let Some(link) = &question.video_link {
                lines.push(format!("Video: {}", link));
            }
        }

        lines.join("\n")
    }
}
