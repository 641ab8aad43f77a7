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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::types::item_id::ItemId;

/// The discriminant selecting one of the four exercise shapes.
///
/// Every dispatch over exercises (parsing, serializing, validation) matches
/// this set exhaustively, so adding a kind is a compile-time checklist.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ExerciseKind {
    #[serde(rename = "CLOZE")]
    Cloze,
    #[serde(rename = "MULTIPLE_CHOICE")]
    MultipleChoice,
    #[serde(rename = "ESSAY")]
    Essay,
    #[serde(rename = "ORDERING")]
    Ordering,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 4] = [
        ExerciseKind::Cloze,
        ExerciseKind::MultipleChoice,
        ExerciseKind::Essay,
        ExerciseKind::Ordering,
    ];

    /// Human-readable label for display next to an exercise.
    pub fn label(self) -> &'static str {
        match self {
            ExerciseKind::Cloze => "Fill in the Blank",
            ExerciseKind::MultipleChoice => "Multiple Choice",
            ExerciseKind::Essay => "Essay",
            ExerciseKind::Ordering => "Ordering",
        }
    }
}

impl Display for ExerciseKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One blank in a cloze exercise, in the order its placeholder token
/// appears in the content.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClozeBlank {
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// One answer option in a multiple-choice exercise. Option order is display
/// order, not semantic.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub text: String,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// One item to be put in sequence in an ordering exercise. Items are stored
/// in authored order; `correct_order` says where each belongs.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderingItem {
    pub text: String,
    pub correct_order: u32,
}

/// The kind-specific payload of an exercise, tagged by [ExerciseKind].
///
/// The serialized form is a flat object with a `"type"` discriminant and
/// camelCase fields, which is also the wire shape the generative producer
/// emits.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExerciseBody {
    /// A passage with holes punched in it. `content` carries one
    /// `__BLANK_<n>__` placeholder token per blank, with `n` counting up
    /// from zero in reading order, and `blanks` holds the answers in the
    /// same order.
    #[serde(rename = "CLOZE")]
    Cloze {
        content: String,
        blanks: Vec<ClozeBlank>,
    },
    #[serde(rename = "MULTIPLE_CHOICE")]
    MultipleChoice {
        question: String,
        options: Vec<ChoiceOption>,
    },
    #[serde(rename = "ESSAY", rename_all = "camelCase")]
    Essay {
        prompt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        word_count: Option<u32>,
    },
    #[serde(rename = "ORDERING")]
    Ordering { items: Vec<OrderingItem> },
}

impl ExerciseBody {
    pub fn kind(&self) -> ExerciseKind {
        match self {
            ExerciseBody::Cloze { .. } => ExerciseKind::Cloze,
            ExerciseBody::MultipleChoice { .. } => ExerciseKind::MultipleChoice,
            ExerciseBody::Essay { .. } => ExerciseKind::Essay,
            ExerciseBody::Ordering { .. } => ExerciseKind::Ordering,
        }
    }
}

/// Ordering items as a learner should see them: sorted by `correct_order`,
/// with ties broken by storage position. The stored sequence is never
/// reordered.
pub fn sort_for_display(items: &[OrderingItem]) -> Vec<&OrderingItem> {
    let mut sorted: Vec<&OrderingItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.correct_order);
    sorted
}

/// A committed exercise in the exercise bank.
///
/// Exercises are immutable values: an edit builds a new exercise that
/// replaces the old one by id.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ItemId,
    pub title: String,
    pub instructions: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub body: ExerciseBody,
}

impl Exercise {
    pub fn kind(&self) -> ExerciseKind {
        self.body.kind()
    }

    /// Strips the id off for re-authoring. Committing the result with the
    /// same id replaces this exercise.
    pub fn into_draft(self) -> ExerciseDraft {
        ExerciseDraft {
            title: self.title,
            instructions: self.instructions,
            tags: self.tags,
            body: self.body,
        }
    }
}

/// An exercise candidate that has not been committed yet: everything but
/// the id. Produced by the markup parser merge or by the generative
/// producer's JSON, and checked by the validation guard before a store
/// accepts it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ExerciseDraft {
    pub title: String,
    pub instructions: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub body: ExerciseBody,
}

impl ExerciseDraft {
    pub fn kind(&self) -> ExerciseKind {
        self.body.kind()
    }

    pub fn into_exercise(self, id: ItemId) -> Exercise {
        Exercise {
            id,
            title: self.title,
            instructions: self.instructions,
            tags: self.tags,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::Fallible;

    #[test]
    fn test_body_discriminant_tag() -> Fallible<()> {
        let body = ExerciseBody::Essay {
            prompt: "Describe your last vacation.".to_string(),
            word_count: Some(50),
        };
        let value = serde_json::to_value(&body)?;
        assert_eq!(value["type"], "ESSAY");
        assert_eq!(value["wordCount"], 50);
        Ok(())
    }

    #[test]
    fn test_exercise_wire_shape_is_flat() -> Fallible<()> {
        let exercise = Exercise {
            id: ItemId::new("cloze-1"),
            title: "At the Supermarket".to_string(),
            instructions: "Fill in the blanks.".to_string(),
            tags: vec!["shopping".to_string(), "A1".to_string()],
            body: ExerciseBody::Cloze {
                content: "I __BLANK_0__ home.".to_string(),
                blanks: vec![ClozeBlank {
                    correct_answer: "went".to_string(),
                    hint: Some("Past tense of go".to_string()),
                }],
            },
        };
        let value = serde_json::to_value(&exercise)?;
        assert_eq!(value["type"], "CLOZE");
        assert_eq!(value["content"], "I __BLANK_0__ home.");
        assert_eq!(value["blanks"][0]["correctAnswer"], "went");
        assert_eq!(value["blanks"][0]["hint"], "Past tense of go");

        let recovered: Exercise = serde_json::from_value(value)?;
        assert_eq!(recovered, exercise);
        Ok(())
    }

    #[test]
    fn test_draft_accepts_producer_wire_shape() -> Fallible<()> {
        let json = r#"{
            "title": "Polite Requests",
            "type": "MULTIPLE_CHOICE",
            "instructions": "Choose the most polite option.",
            "tags": ["restaurant", "A2"],
            "question": "Which sentence is the most polite?",
            "options": [
                {"text": "Give me the menu.", "isCorrect": false},
                {"text": "Could I please see the menu?", "isCorrect": true}
            ]
        }"#;
        let draft: ExerciseDraft = serde_json::from_str(json)?;
        assert_eq!(draft.kind(), ExerciseKind::MultipleChoice);
        assert!(matches!(
            &draft.body,
            ExerciseBody::MultipleChoice { question, options }
                if question == "Which sentence is the most polite?"
                    && options.len() == 2
                    && options[1].is_correct
        ));
        Ok(())
    }

    #[test]
    fn test_missing_optional_fields_default() -> Fallible<()> {
        let json = r#"{"type": "ESSAY", "title": "T", "instructions": "I", "prompt": "Write."}"#;
        let draft: ExerciseDraft = serde_json::from_str(json)?;
        assert!(matches!(
            &draft.body,
            ExerciseBody::Essay { prompt, word_count: None } if prompt == "Write."
        ));
        assert!(draft.tags.is_empty());
        Ok(())
    }

    #[test]
    fn test_sort_for_display_is_stable() {
        let items = vec![
            OrderingItem {
                text: "second".to_string(),
                correct_order: 2,
            },
            OrderingItem {
                text: "first".to_string(),
                correct_order: 1,
            },
            OrderingItem {
                text: "also second".to_string(),
                correct_order: 2,
            },
        ];
        let sorted = sort_for_display(&items);
        let texts: Vec<&str> = sorted.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "also second"]);
        // The stored sequence is untouched.
        assert_eq!(items[0].text, "second");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ExerciseKind::Cloze.label(), "Fill in the Blank");
        assert_eq!(ExerciseKind::MultipleChoice.label(), "Multiple Choice");
    }
}
