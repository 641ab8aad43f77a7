// Copyright 2026 The glossbank developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The validation guard run before an exercise is offered for persistence.
//! A failing guard blocks saving, never the live preview: degenerate
//! structures flow through parsing and preview untouched and are only
//! stopped here.

use std::fmt::Display;
use std::fmt::Formatter;

use crate::error::ErrorReport;
use crate::markup::ClozeSegment;
use crate::markup::cloze_segments;
use crate::types::exercise::ClozeBlank;
use crate::types::exercise::Exercise;
use crate::types::exercise::ExerciseBody;
use crate::types::exercise::ExerciseDraft;

/// One structural invariant an exercise failed to meet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ValidationError {
    EmptyTitle,
    /// The number of `__BLANK_<n>__` tokens in the content does not match
    /// the number of blanks.
    BlankCountMismatch {
        tokens: usize,
        blanks: usize,
    },
    /// The i-th token in reading order does not carry index i.
    BlankIndexMismatch {
        position: usize,
        index: usize,
    },
    EmptyBlankAnswer {
        index: usize,
    },
    EmptyQuestion,
    NoOptions,
    NoCorrectOption,
    EmptyPrompt,
    ZeroWordCount,
    NoOrderingItems,
    EmptyOrderingItemText {
        position: usize,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "the title must not be empty"),
            ValidationError::BlankCountMismatch { tokens, blanks } => write!(
                f,
                "the content has {tokens} blank tokens but {blanks} answers"
            ),
            ValidationError::BlankIndexMismatch { position, index } => write!(
                f,
                "blank token {position} carries index {index}; indices must count up from 0 in reading order"
            ),
            ValidationError::EmptyBlankAnswer { index } => {
                write!(f, "blank {index} has an empty answer")
            }
            ValidationError::EmptyQuestion => write!(f, "the question must not be empty"),
            ValidationError::NoOptions => write!(f, "at least one option is required"),
            ValidationError::NoCorrectOption => {
                write!(f, "at least one option must be marked correct")
            }
            ValidationError::EmptyPrompt => write!(f, "the prompt must not be empty"),
            ValidationError::ZeroWordCount => {
                write!(f, "the word count must be positive when given")
            }
            ValidationError::NoOrderingItems => write!(f, "at least one item is required"),
            ValidationError::EmptyOrderingItemText { position } => {
                write!(f, "item {position} has no text")
            }
        }
    }
}

/// Collapse guard failures into a single report for callers that carry one
/// error value.
pub fn report(errors: &[ValidationError]) -> ErrorReport {
    let messages: Vec<String> = errors.iter().map(ValidationError::to_string).collect();
    ErrorReport::new(messages.join("; "))
}

/// Check a candidate before it is committed to a bank.
pub fn check_draft(draft: &ExerciseDraft) -> Result<(), Vec<ValidationError>> {
    check(&draft.title, &draft.body)
}

/// Check a committed exercise, e.g. one loaded from an external producer.
pub fn check_exercise(exercise: &Exercise) -> Result<(), Vec<ValidationError>> {
    check(&exercise.title, &exercise.body)
}

fn check(title: &str, body: &ExerciseBody) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    if title.trim().is_empty() {
        errors.push(ValidationError::EmptyTitle);
    }
    match body {
        ExerciseBody::Cloze { content, blanks } => check_cloze(content, blanks, &mut errors),
        ExerciseBody::MultipleChoice { question, options } => {
            if question.trim().is_empty() {
                errors.push(ValidationError::EmptyQuestion);
            }
            if options.is_empty() {
                errors.push(ValidationError::NoOptions);
            } else if !options.iter().any(|option| option.is_correct) {
                errors.push(ValidationError::NoCorrectOption);
            }
        }
        ExerciseBody::Essay { prompt, word_count } => {
            if prompt.trim().is_empty() {
                errors.push(ValidationError::EmptyPrompt);
            }
            if *word_count == Some(0) {
                errors.push(ValidationError::ZeroWordCount);
            }
        }
        ExerciseBody::Ordering { items } => {
            if items.is_empty() {
                errors.push(ValidationError::NoOrderingItems);
            }
            for (position, item) in items.iter().enumerate() {
                if item.text.trim().is_empty() {
                    errors.push(ValidationError::EmptyOrderingItemText { position });
                }
            }
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_cloze(content: &str, blanks: &[ClozeBlank], errors: &mut Vec<ValidationError>) {
    let token_indices: Vec<usize> = cloze_segments(content)
        .into_iter()
        .filter_map(|segment| match segment {
            ClozeSegment::Blank(index) => Some(index),
            ClozeSegment::Text(_) => None,
        })
        .collect();
    if token_indices.len() != blanks.len() {
        errors.push(ValidationError::BlankCountMismatch {
            tokens: token_indices.len(),
            blanks: blanks.len(),
        });
    }
    for (position, index) in token_indices.iter().enumerate() {
        if *index != position {
            errors.push(ValidationError::BlankIndexMismatch {
                position,
                index: *index,
            });
        }
    }
    for (index, blank) in blanks.iter().enumerate() {
        if blank.correct_answer.trim().is_empty() {
            errors.push(ValidationError::EmptyBlankAnswer { index });
        }
    }
}
