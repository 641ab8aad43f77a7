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

//! Bidirectional transcoding between the plain-text authoring notation and
//! structured exercise bodies.
//!
//! [parse] is total: any input string produces a structurally valid body for
//! the selected kind, degrading to the most literal interpretation when the
//! notation is malformed. The live preview re-parses on every keystroke, so
//! a broken preview is worse than a wrong one. [serialize] is its right
//! inverse: parsing the serialized form of a body reproduces the body's
//! semantic content, though incidental whitespace may differ.
//!
//! The notation, per kind:
//!
//! - Cloze: `[answer]` or `[answer|hint: hint text]` spans inline in the
//!   passage.
//! - Multiple choice: the first line is the question, each following line an
//!   option, `*` prefix marking a correct one.
//! - Ordering: `<int>. <text>` per line.
//! - Essay: the raw text is the prompt.

use crate::types::exercise::ChoiceOption;
use crate::types::exercise::ClozeBlank;
use crate::types::exercise::ExerciseBody;
use crate::types::exercise::ExerciseKind;
use crate::types::exercise::OrderingItem;

/// The placeholder token standing for the `index`-th blank of a cloze
/// passage.
pub fn blank_token(index: usize) -> String {
    format!("__BLANK_{index}__")
}

/// Parse authoring markup into the kind-specific fields of an exercise.
/// Never fails; see the module docs for the degenerate-input rules.
pub fn parse(markup: &str, kind: ExerciseKind) -> ExerciseBody {
    match kind {
        ExerciseKind::Cloze => parse_cloze(markup),
        ExerciseKind::MultipleChoice => parse_multiple_choice(markup),
        ExerciseKind::Essay => parse_essay(markup),
        ExerciseKind::Ordering => parse_ordering(markup),
    }
}

/// Scan for `[...]` spans left to right, replacing each with a placeholder
/// token and collecting its blank. An unmatched `[`, or `[]` with nothing
/// inside, is literal text. Spans do not nest: a span runs to the first `]`
/// after its `[`.
fn parse_cloze(markup: &str) -> ExerciseBody {
    let mut content = String::with_capacity(markup.len());
    let mut blanks: Vec<ClozeBlank> = Vec::new();
    let mut rest = markup;
    while let Some(open) = rest.find('[') {
        match rest[open + 1..].find(']') {
            Some(0) => {
                // Empty span: keep the brackets as literal text.
                content.push_str(&rest[..open + 2]);
                rest = &rest[open + 2..];
            }
            Some(len) => {
                let inner = &rest[open + 1..open + 1 + len];
                content.push_str(&rest[..open]);
                content.push_str(&blank_token(blanks.len()));
                blanks.push(read_blank(inner));
                rest = &rest[open + 2 + len..];
            }
            None => break,
        }
    }
    content.push_str(rest);
    ExerciseBody::Cloze { content, blanks }
}

/// Read the inside of one `[...]` span. The text left of the first `|hint:`
/// separator is the answer; the text between the first and second separator
/// (if any) is the hint. A leading `*` on the answer is a legacy emphasis
/// marker: accepted and discarded.
fn read_blank(inner: &str) -> ClozeBlank {
    let mut parts = inner.split("|hint:");
    let answer = parts.next().unwrap_or("");
    let hint = parts
        .next()
        .map(str::trim)
        .filter(|hint| !hint.is_empty())
        .map(String::from);
    let correct_answer = answer.strip_prefix('*').unwrap_or(answer).trim().to_string();
    ClozeBlank {
        correct_answer,
        hint,
    }
}

/// The first non-empty line is the question; every later one is an option,
/// with a leading `*` marking it correct. Fewer than two non-empty lines is
/// degenerate: the raw input becomes the question and there are no options.
fn parse_multiple_choice(markup: &str) -> ExerciseBody {
    let lines: Vec<&str> = non_empty_lines(markup);
    if lines.len() < 2 {
        return ExerciseBody::MultipleChoice {
            question: markup.to_string(),
            options: Vec::new(),
        };
    }
    let question = lines[0].to_string();
    let options = lines[1..]
        .iter()
        .map(|line| {
            let (text, is_correct) = match line.strip_prefix('*') {
                Some(stripped) => (stripped.trim(), true),
                None => (*line, false),
            };
            ChoiceOption {
                text: text.to_string(),
                is_correct,
                hint: None,
            }
        })
        .collect();
    ExerciseBody::MultipleChoice { question, options }
}

/// Each non-empty line is one item: a `<digits>.` prefix gives its correct
/// position, and a line without one defaults to position 0. Lines with no
/// text left after the prefix are dropped.
fn parse_ordering(markup: &str) -> ExerciseBody {
    let mut items = Vec::new();
    for line in non_empty_lines(markup) {
        let (text, correct_order) = match read_order_prefix(line) {
            Some((order, line_rest)) => (line_rest.trim(), order),
            None => (line, 0),
        };
        if !text.is_empty() {
            items.push(OrderingItem {
                text: text.to_string(),
                correct_order,
            });
        }
    }
    ExerciseBody::Ordering { items }
}

fn parse_essay(markup: &str) -> ExerciseBody {
    ExerciseBody::Essay {
        prompt: markup.to_string(),
        word_count: None,
    }
}

fn non_empty_lines(markup: &str) -> Vec<&str> {
    markup
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Matches a leading `<digits>.` prefix, returning the parsed position and
/// the remainder of the line.
fn read_order_prefix(line: &str) -> Option<(u32, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let line_rest = line[digits..].strip_prefix('.')?;
    let order = line[..digits].parse().ok()?;
    Some((order, line_rest))
}

/// Serialize an exercise body back into the authoring notation. Parsing the
/// result under the same kind reproduces the body's semantic content.
pub fn serialize(body: &ExerciseBody) -> String {
    match body {
        ExerciseBody::Cloze { content, blanks } => serialize_cloze(content, blanks),
        ExerciseBody::MultipleChoice { question, options } => {
            serialize_multiple_choice(question, options)
        }
        ExerciseBody::Essay { prompt, .. } => prompt.clone(),
        ExerciseBody::Ordering { items } => serialize_ordering(items),
    }
}

/// Substitute blanks back into the passage in ascending index order, so an
/// earlier substitution cannot corrupt a later token still awaiting
/// replacement.
fn serialize_cloze(content: &str, blanks: &[ClozeBlank]) -> String {
    let mut out = content.to_string();
    for (index, blank) in blanks.iter().enumerate() {
        let span = match &blank.hint {
            Some(hint) => format!("[{}|hint: {}]", blank.correct_answer, hint),
            None => format!("[{}]", blank.correct_answer),
        };
        out = out.replacen(&blank_token(index), &span, 1);
    }
    out
}

fn serialize_multiple_choice(question: &str, options: &[ChoiceOption]) -> String {
    let mut lines = vec![question.to_string()];
    for option in options {
        let marker = if option.is_correct { "*" } else { "" };
        lines.push(format!("{marker} {}", option.text));
    }
    lines.join("\n")
}

/// Items are emitted in storage order, never sorted by position; only a
/// display layer sorts.
fn serialize_ordering(items: &[OrderingItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}. {}", item.correct_order, item.text))
        .collect::<Vec<String>>()
        .join("\n")
}

/// One piece of a cloze passage: literal text, or the blank with the given
/// index.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClozeSegment<'a> {
    Text(&'a str),
    Blank(usize),
}

/// Split cloze content into alternating literal text and blank segments.
/// Anything that does not scan as a well-formed `__BLANK_<n>__` token is
/// literal text.
pub fn cloze_segments(content: &str) -> Vec<ClozeSegment<'_>> {
    let mut segments = Vec::new();
    let mut rest = content;
    while let Some((start, end, index)) = next_blank_token(rest) {
        if start > 0 {
            segments.push(ClozeSegment::Text(&rest[..start]));
        }
        segments.push(ClozeSegment::Blank(index));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        segments.push(ClozeSegment::Text(rest));
    }
    segments
}

/// Find the next well-formed blank token, returning its byte range and
/// parsed index.
fn next_blank_token(text: &str) -> Option<(usize, usize, usize)> {
    const OPEN: &str = "__BLANK_";
    let mut searched = 0;
    while let Some(offset) = text[searched..].find(OPEN) {
        let start = searched + offset;
        let digits_start = start + OPEN.len();
        let digits = text[digits_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let digits_end = digits_start + digits;
        if digits > 0 && text[digits_end..].starts_with("__") {
            if let Ok(index) = text[digits_start..digits_end].parse() {
                return Some((start, digits_end + 2, index));
            }
        }
        searched = start + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_cloze(markup: &str) -> (String, Vec<ClozeBlank>) {
        match parse(markup, ExerciseKind::Cloze) {
            ExerciseBody::Cloze { content, blanks } => (content, blanks),
            other => panic!("expected a cloze body, got {other:?}"),
        }
    }

    fn blank(answer: &str, hint: Option<&str>) -> ClozeBlank {
        ClozeBlank {
            correct_answer: answer.to_string(),
            hint: hint.map(String::from),
        }
    }

    #[test]
    fn test_cloze_single_blank_with_hint() {
        let (content, blanks) = parsed_cloze("I [went|hint: past of go] home.");
        assert_eq!(content, "I __BLANK_0__ home.");
        assert_eq!(blanks, vec![blank("went", Some("past of go"))]);
    }

    #[test]
    fn test_cloze_serializes_back() {
        let body = ExerciseBody::Cloze {
            content: "I __BLANK_0__ home.".to_string(),
            blanks: vec![blank("went", Some("past of go"))],
        };
        assert_eq!(serialize(&body), "I [went|hint: past of go] home.");
    }

    #[test]
    fn test_cloze_indices_are_contiguous_in_scan_order() {
        let (content, blanks) = parsed_cloze("[a] then [b] then [c]");
        assert_eq!(content, "__BLANK_0__ then __BLANK_1__ then __BLANK_2__");
        assert_eq!(
            blanks,
            vec![blank("a", None), blank("b", None), blank("c", None)]
        );
    }

    #[test]
    fn test_cloze_without_brackets_is_verbatim() {
        let (content, blanks) = parsed_cloze("No blanks here.");
        assert_eq!(content, "No blanks here.");
        assert!(blanks.is_empty());
    }

    #[test]
    fn test_cloze_unmatched_bracket_is_literal() {
        let (content, blanks) = parsed_cloze("An open [ never closes");
        assert_eq!(content, "An open [ never closes");
        assert!(blanks.is_empty());
    }

    #[test]
    fn test_cloze_empty_span_is_literal() {
        let (content, blanks) = parsed_cloze("Empty [] but real [answer]");
        assert_eq!(content, "Empty [] but real __BLANK_0__");
        assert_eq!(blanks, vec![blank("answer", None)]);
    }

    #[test]
    fn test_cloze_legacy_star_marker_is_stripped() {
        let (_, blanks) = parsed_cloze("The bread was [*fresh|hint: Not old].");
        assert_eq!(blanks, vec![blank("fresh", Some("Not old"))]);
    }

    #[test]
    fn test_cloze_second_hint_separator_is_discarded() {
        let (_, blanks) = parsed_cloze("[a|hint: first|hint: second]");
        assert_eq!(blanks, vec![blank("a", Some("first"))]);
    }

    #[test]
    fn test_cloze_blank_hint_is_absent() {
        let (_, blanks) = parsed_cloze("[went|hint:]");
        assert_eq!(blanks, vec![blank("went", None)]);
    }

    #[test]
    fn test_multiple_choice_star_marks_correct() {
        let body = parse("Pick one\n* Yes\nNo", ExerciseKind::MultipleChoice);
        assert!(matches!(
            &body,
            ExerciseBody::MultipleChoice { question, options }
                if question == "Pick one"
                    && options.len() == 2
                    && options[0].text == "Yes"
                    && options[0].is_correct
                    && options[1].text == "No"
                    && !options[1].is_correct
        ));
    }

    #[test]
    fn test_multiple_choice_single_line_is_degenerate() {
        let body = parse("Only a question", ExerciseKind::MultipleChoice);
        assert!(matches!(
            &body,
            ExerciseBody::MultipleChoice { question, options }
                if question == "Only a question" && options.is_empty()
        ));
    }

    #[test]
    fn test_multiple_choice_skips_blank_lines() {
        let body = parse("Q\n\n  \n* A\n\nB", ExerciseKind::MultipleChoice);
        assert!(matches!(
            &body,
            ExerciseBody::MultipleChoice { question, options }
                if question == "Q" && options.len() == 2
        ));
    }

    #[test]
    fn test_ordering_keeps_storage_order() {
        let body = parse("2. second\n1. first", ExerciseKind::Ordering);
        assert!(matches!(
            &body,
            ExerciseBody::Ordering { items }
                if items.len() == 2
                    && items[0].text == "second"
                    && items[0].correct_order == 2
                    && items[1].text == "first"
                    && items[1].correct_order == 1
        ));
    }

    #[test]
    fn test_ordering_line_without_prefix_defaults_to_zero() {
        let body = parse("just text", ExerciseKind::Ordering);
        assert!(matches!(
            &body,
            ExerciseBody::Ordering { items }
                if items.len() == 1
                    && items[0].text == "just text"
                    && items[0].correct_order == 0
        ));
    }

    #[test]
    fn test_ordering_prefix_without_text_is_dropped() {
        let body = parse("1.\n2. kept", ExerciseKind::Ordering);
        assert!(matches!(
            &body,
            ExerciseBody::Ordering { items }
                if items.len() == 1 && items[0].text == "kept"
        ));
    }

    #[test]
    fn test_ordering_digits_without_period_are_text() {
        let body = parse("12 monkeys", ExerciseKind::Ordering);
        assert!(matches!(
            &body,
            ExerciseBody::Ordering { items }
                if items[0].text == "12 monkeys" && items[0].correct_order == 0
        ));
    }

    #[test]
    fn test_essay_prompt_is_verbatim() {
        let markup = "Describe your last vacation.\n\nInclude details.";
        let body = parse(markup, ExerciseKind::Essay);
        assert!(matches!(
            &body,
            ExerciseBody::Essay { prompt, word_count: None } if prompt == markup
        ));
    }

    #[test]
    fn test_empty_input_is_stable_for_every_kind() {
        for kind in ExerciseKind::ALL {
            let body = parse("", kind);
            assert_eq!(body.kind(), kind);
            match body {
                ExerciseBody::Cloze { content, blanks } => {
                    assert_eq!(content, "");
                    assert!(blanks.is_empty());
                }
                ExerciseBody::MultipleChoice { question, options } => {
                    assert_eq!(question, "");
                    assert!(options.is_empty());
                }
                ExerciseBody::Essay { prompt, word_count } => {
                    assert_eq!(prompt, "");
                    assert_eq!(word_count, None);
                }
                ExerciseBody::Ordering { items } => assert!(items.is_empty()),
            }
        }
    }

    #[test]
    fn test_round_trip_cloze() {
        let markup = "Yesterday I [went] to the store. The bread was [fresh|hint: Not old].";
        let body = parse(markup, ExerciseKind::Cloze);
        assert_eq!(serialize(&body), markup);
        assert_eq!(parse(&serialize(&body), ExerciseKind::Cloze), body);
    }

    #[test]
    fn test_round_trip_multiple_choice() {
        let body = parse(
            "What is the capital of France?\n* Paris\nLondon\nBerlin",
            ExerciseKind::MultipleChoice,
        );
        let reparsed = parse(&serialize(&body), ExerciseKind::MultipleChoice);
        assert_eq!(reparsed, body);
    }

    #[test]
    fn test_round_trip_ordering() {
        let body = ExerciseBody::Ordering {
            items: vec![
                OrderingItem {
                    text: "Get dressed".to_string(),
                    correct_order: 2,
                },
                OrderingItem {
                    text: "Wake up".to_string(),
                    correct_order: 1,
                },
            ],
        };
        assert_eq!(serialize(&body), "2. Get dressed\n1. Wake up");
        assert_eq!(parse(&serialize(&body), ExerciseKind::Ordering), body);
    }

    #[test]
    fn test_round_trip_essay() {
        let body = ExerciseBody::Essay {
            prompt: "Write about your day.".to_string(),
            word_count: Some(50),
        };
        let reparsed = parse(&serialize(&body), ExerciseKind::Essay);
        // The word count is authored outside the markup, so it does not
        // survive the trip; the prompt must.
        assert!(matches!(
            &reparsed,
            ExerciseBody::Essay { prompt, word_count: None } if prompt == "Write about your day."
        ));
    }

    #[test]
    fn test_serialize_substitutes_in_ascending_order() {
        // The first answer contains a later token's text; substituting in
        // ascending index order must leave the real second token intact.
        let body = ExerciseBody::Cloze {
            content: "__BLANK_0__ and __BLANK_1__".to_string(),
            blanks: vec![blank("a __BLANK_1__ impostor", None), blank("b", None)],
        };
        assert_eq!(serialize(&body), "[a __BLANK_1__ impostor] and [b]");
    }

    #[test]
    fn test_cloze_segments_alternate() {
        let segments = cloze_segments("I __BLANK_0__ home __BLANK_1__.");
        assert_eq!(
            segments,
            vec![
                ClozeSegment::Text("I "),
                ClozeSegment::Blank(0),
                ClozeSegment::Text(" home "),
                ClozeSegment::Blank(1),
                ClozeSegment::Text("."),
            ]
        );
    }

    #[test]
    fn test_cloze_segments_adjacent_tokens() {
        let segments = cloze_segments("__BLANK_0____BLANK_1__");
        assert_eq!(
            segments,
            vec![ClozeSegment::Blank(0), ClozeSegment::Blank(1)]
        );
    }

    #[test]
    fn test_cloze_segments_malformed_token_is_text() {
        let segments = cloze_segments("__BLANK___ and __BLANK_2");
        assert_eq!(segments, vec![ClozeSegment::Text("__BLANK___ and __BLANK_2")]);
    }
}
