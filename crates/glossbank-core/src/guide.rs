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

//! Per-kind documentation of the authoring notation, shown next to the
//! markup editor. Purely descriptive: any change to the grammar in the
//! markup module must be mirrored here, or authoring and parsing drift
//! apart.

use crate::markdown::markdown_to_html;
use crate::types::exercise::ExerciseKind;

/// What the authoring surface shows for one exercise kind: placeholder text
/// for the empty editor, and a Markdown description of the notation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MarkupGuide {
    pub placeholder: &'static str,
    pub instructions: &'static str,
}

impl MarkupGuide {
    pub fn instructions_html(&self) -> String {
        markdown_to_html(self.instructions)
    }
}

/// Look up the authoring guide for a kind. Pure lookup, one entry per kind.
pub fn describe(kind: ExerciseKind) -> MarkupGuide {
    match kind {
        ExerciseKind::Cloze => MarkupGuide {
            placeholder: "Yesterday I [went] to the store. The bread was [fresh|hint: Not old].",
            instructions: "Use `[...]` to create a blank. The text inside is the correct answer.\n\n\
                Add an optional hint with `|hint: your hint`.",
        },
        ExerciseKind::MultipleChoice => MarkupGuide {
            placeholder: "What is the capital of France?\n* Paris\nLondon\nBerlin",
            instructions: "The first line is the question.\n\n\
                Each following line is an option.\n\n\
                Mark the correct answer(s) with `*` at the beginning of the line.",
        },
        ExerciseKind::Ordering => MarkupGuide {
            placeholder: "2. Get dressed\n1. Wake up\n3. Eat breakfast",
            instructions: "Each line is an item to be ordered.\n\n\
                Start each line with the correct number in the sequence, followed by a \
                period (e.g., `1.`, `2.`).",
        },
        ExerciseKind::Essay => MarkupGuide {
            placeholder: "Describe your last vacation. Talk about where you went, what you \
                did, and who you were with.",
            instructions: "The text you enter here will be the student's writing prompt.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::markup::parse;
    use crate::types::exercise::ExerciseBody;

    #[test]
    fn test_every_kind_has_a_guide() {
        for kind in ExerciseKind::ALL {
            let guide = describe(kind);
            assert!(!guide.placeholder.is_empty());
            assert!(!guide.instructions.is_empty());
        }
    }

    #[test]
    fn test_instructions_render_to_html() {
        let html = describe(ExerciseKind::Cloze).instructions_html();
        assert!(html.contains("<code>[...]</code>"));
    }

    // The placeholders double as documentation: each must parse into a
    // populated body under its own kind.
    #[test]
    fn test_placeholders_parse_under_their_kind() {
        match parse(describe(ExerciseKind::Cloze).placeholder, ExerciseKind::Cloze) {
            ExerciseBody::Cloze { blanks, .. } => assert_eq!(blanks.len(), 2),
            other => panic!("expected cloze, got {other:?}"),
        }
        match parse(
            describe(ExerciseKind::MultipleChoice).placeholder,
            ExerciseKind::MultipleChoice,
        ) {
            ExerciseBody::MultipleChoice { options, .. } => {
                assert_eq!(options.len(), 3);
                assert!(options[0].is_correct);
            }
            other => panic!("expected multiple choice, got {other:?}"),
        }
        match parse(describe(ExerciseKind::Ordering).placeholder, ExerciseKind::Ordering) {
            ExerciseBody::Ordering { items } => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0].correct_order, 2);
            }
            other => panic!("expected ordering, got {other:?}"),
        }
    }
}
