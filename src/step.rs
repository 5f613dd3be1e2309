//! Step accumulation
//!
//! A step is one instruction plus the question that verifies it. Steps are
//! declared either in one call ([`StepBuilder::step`]) or split across
//! [`StepBuilder::instruction`] and [`StepBuilder::question`] so a single
//! instruction can branch into different questions. Text is stored raw here
//! and normalized when the test is committed.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::IncompleteStep;

/// One instruction/question pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Step {
    pub instruction: String,
    pub question: String,
}

impl Step {
    pub fn new(instruction: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            question: question.into(),
        }
    }
}

fn question_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\s*(q[:.]\s*)+").expect("valid question marker regex"))
}

/// Remove leading `Q:` / `q.` markers (any number of them).
pub fn strip_question_marker(line: &str) -> &str {
    match question_marker_re().find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

fn has_question_marker(line: &str) -> bool {
    question_marker_re().is_match(line)
}

/// Ordered steps of the test being built
#[derive(Debug, Clone, Default)]
pub struct StepBuilder {
    steps: Vec<Step>,
}

impl StepBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a complete step.
    ///
    /// The question starts at the first line carrying a `Q:` marker; every
    /// marker is stripped. Without a marker the last line is the question and
    /// the lines before it form the instruction.
    ///
    /// ```
    /// let mut b = rfml::step::StepBuilder::new();
    /// b.step("Click \"Save\".\n  Q: Do you see a warning\n  about publishing?");
    /// assert_eq!(b.steps()[0].instruction, "Click \"Save\".");
    /// ```
    pub fn step(&mut self, text: &str) {
        let lines: Vec<&str> = text.trim().split('\n').collect();
        let question_index = lines
            .iter()
            .position(|line| has_question_marker(line))
            .unwrap_or(lines.len() - 1);
        let lines: Vec<&str> = lines.into_iter().map(strip_question_marker).collect();

        self.steps.push(Step {
            instruction: lines[..question_index].join(" "),
            question: lines[question_index..].join(" "),
        });
    }

    /// Append to the open step's instruction, opening a new step first when
    /// there is none or the last one already has its question.
    pub fn instruction(&mut self, text: &str) {
        let open = matches!(self.steps.last(), Some(last) if last.question.is_empty());
        if !open {
            self.steps.push(Step::default());
        }
        if let Some(last) = self.steps.last_mut() {
            last.instruction.push(' ');
            last.instruction.push_str(text);
        }
    }

    /// Attach a question to the step opened by [`StepBuilder::instruction`].
    pub fn question(&mut self, text: &str) -> Result<(), IncompleteStep> {
        let last = self.steps.last_mut().ok_or(IncompleteStep::NoOpenStep)?;
        if last.instruction.is_empty() {
            return Err(IncompleteStep::MissingInstruction);
        }
        if !last.question.is_empty() {
            return Err(IncompleteStep::QuestionAlreadySet);
        }
        last.question.push_str(strip_question_marker(text));
        Ok(())
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}
