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

//! The authoring flow around the markup transcoder: merging parsed markup
//! with author-entered metadata into preview and candidate exercises, and
//! accepting candidate JSON from the generative producer.
//!
//! Previewing is total and runs on every keystroke; the validation guard
//! only gates the save path and the producer intake.

use crate::error::Fallible;
use crate::markup::parse;
use crate::types::exercise::Exercise;
use crate::types::exercise::ExerciseDraft;
use crate::types::exercise::ExerciseKind;
use crate::types::item_id::ItemId;
use crate::validate;

/// Title shown when the author has not typed one yet.
pub const UNTITLED: &str = "Untitled Exercise";

/// Instructions shown when the author has not typed any yet.
pub const DEFAULT_INSTRUCTIONS: &str = "Follow the instructions below.";

const PREVIEW_ID: &str = "preview";

/// The metadata an author enters alongside the markup.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthoredMeta {
    pub title: String,
    pub instructions: String,
    pub tags: Vec<String>,
}

/// Split a comma-separated tag line into an ordered tag list. Duplicates
/// are kept; order is display order.
pub fn parse_tag_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Merge markup and metadata into a candidate for the save path. No
/// fallbacks are substituted; the guard decides whether it can be
/// committed.
pub fn draft(markup: &str, kind: ExerciseKind, meta: AuthoredMeta) -> ExerciseDraft {
    ExerciseDraft {
        title: meta.title,
        instructions: meta.instructions,
        tags: meta.tags,
        body: parse(markup, kind),
    }
}

/// Build the exercise shown in the live preview. Empty metadata falls back
/// to placeholder prose, and an exercise being edited keeps its id so the
/// preview matches what a save would produce. Never fails.
pub fn preview(
    markup: &str,
    kind: ExerciseKind,
    meta: &AuthoredMeta,
    editing: Option<&ItemId>,
) -> Exercise {
    let title = if meta.title.trim().is_empty() {
        UNTITLED.to_string()
    } else {
        meta.title.clone()
    };
    let instructions = if meta.instructions.trim().is_empty() {
        DEFAULT_INSTRUCTIONS.to_string()
    } else {
        meta.instructions.clone()
    };
    let id = editing.cloned().unwrap_or_else(|| ItemId::new(PREVIEW_ID));
    Exercise {
        id,
        title,
        instructions,
        tags: meta.tags.clone(),
        body: parse(markup, kind),
    }
}

/// Accept a candidate from the generative producer. The producer's output
/// is exercise-shaped JSON without an id; malformed JSON and guard
/// failures both surface as reports, never as panics. The producer call
/// itself is external and is never retried here.
pub fn draft_from_json(json: &str) -> Fallible<ExerciseDraft> {
    let draft: ExerciseDraft = serde_json::from_str(json)?;
    validate::check_draft(&draft).map_err(|errors| validate::report(&errors))?;
    Ok(draft)
}
