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

//! WASM bindings for glossbank - drives the exercise authoring core from a
//! browser UI.
//!
//! The UI owns the banks and the widgets; this layer owns one authoring
//! session at a time. On every keystroke the UI pushes the new markup in
//! and pulls a fresh preview out; results of superseded calls are simply
//! discarded by the caller.

use wasm_bindgen::prelude::*;
use web_sys::console;

use glossbank_core::author;
use glossbank_core::author::AuthoredMeta;
use glossbank_core::guide::describe;
use glossbank_core::markup::serialize;
use glossbank_core::types::exercise::Exercise;
use glossbank_core::types::exercise::ExerciseKind;
use glossbank_core::types::item_id::ItemId;
use glossbank_core::validate;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"glossbank WASM initialized".into());
}

fn parse_kind(tag: &str) -> Result<ExerciseKind, JsValue> {
    serde_json::from_value(serde_json::Value::String(tag.to_string()))
        .map_err(|_| JsValue::from_str(&format!("Unknown exercise kind: {tag}")))
}

/// One exercise being authored: the markup text, the selected kind, the
/// metadata fields, and (in edit mode) the id of the exercise being
/// replaced.
#[wasm_bindgen]
pub struct AuthoringSession {
    kind: ExerciseKind,
    markup: String,
    meta: AuthoredMeta,
    editing: Option<ItemId>,
}

#[wasm_bindgen]
impl AuthoringSession {
    /// A fresh session for a new exercise. Cloze is the initial kind, as
    /// in the authoring form.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            kind: ExerciseKind::Cloze,
            markup: String::new(),
            meta: AuthoredMeta::default(),
            editing: None,
        }
    }

    /// Switch the exercise kind. The markup text is kept; it will be
    /// reinterpreted under the new kind's notation.
    pub fn set_kind(&mut self, kind: &str) -> Result<(), JsValue> {
        self.kind = parse_kind(kind)?;
        Ok(())
    }

    pub fn set_markup(&mut self, markup: &str) {
        self.markup = markup.to_string();
    }

    pub fn set_meta(&mut self, title: &str, instructions: &str, tag_line: &str) {
        self.meta = AuthoredMeta {
            title: title.to_string(),
            instructions: instructions.to_string(),
            tags: author::parse_tag_line(tag_line),
        };
    }

    /// Enter edit mode for an existing exercise. Populates the session
    /// from the exercise and returns the markup to seed the editor with,
    /// serialized from its structured form.
    pub fn load_exercise(&mut self, exercise_json: &str) -> Result<String, JsValue> {
        let exercise: Exercise = serde_json::from_str(exercise_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse exercise JSON: {e}")))?;
        let markup = serialize(&exercise.body);
        self.kind = exercise.kind();
        self.markup = markup.clone();
        self.meta = AuthoredMeta {
            title: exercise.title,
            instructions: exercise.instructions,
            tags: exercise.tags,
        };
        self.editing = Some(exercise.id);
        Ok(markup)
    }

    /// The exercise shown in the live preview, as JSON. Total: malformed
    /// markup previews as its most literal interpretation.
    pub fn preview_json(&self) -> Result<String, JsValue> {
        let preview = author::preview(&self.markup, self.kind, &self.meta, self.editing.as_ref());
        serde_json::to_string(&preview)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize preview: {e}")))
    }

    /// Placeholder text for the empty markup editor under the current
    /// kind.
    pub fn guide_placeholder(&self) -> String {
        describe(self.kind).placeholder.to_string()
    }

    /// The notation guide for the current kind, rendered to HTML.
    pub fn guide_html(&self) -> String {
        describe(self.kind).instructions_html()
    }

    /// Run the validation guard over the current candidate. Returns a JSON
    /// array of human-readable messages; an empty array means the
    /// candidate can be saved.
    pub fn validate(&self) -> Result<String, JsValue> {
        let draft = author::draft(&self.markup, self.kind, self.meta.clone());
        let messages: Vec<String> = match validate::check_draft(&draft) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.iter().map(ToString::to_string).collect(),
        };
        serde_json::to_string(&messages)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize messages: {e}")))
    }

    /// Commit the current candidate: run the guard, assign an id (reusing
    /// the edited exercise's id, or minting one for a new exercise), and
    /// return the committed exercise as JSON for the UI to upsert into its
    /// bank.
    pub fn commit_json(&self) -> Result<String, JsValue> {
        let draft = author::draft(&self.markup, self.kind, self.meta.clone());
        validate::check_draft(&draft)
            .map_err(|errors| JsValue::from_str(&validate::report(&errors).to_string()))?;
        let id = match &self.editing {
            Some(id) => id.clone(),
            None => {
                let bytes = serde_json::to_vec(&draft)
                    .map_err(|e| JsValue::from_str(&format!("Failed to serialize draft: {e}")))?;
                ItemId::mint(&bytes)
            }
        };
        let exercise = draft.into_exercise(id);
        serde_json::to_string(&exercise)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize exercise: {e}")))
    }

    /// Accept exercise-shaped JSON from the generative producer: parse it,
    /// run the same guard as manual authoring, mint an id, and return the
    /// committed exercise as JSON. Malformed producer output surfaces as
    /// an error message, never a crash.
    pub fn accept_generated(&self, candidate_json: &str) -> Result<String, JsValue> {
        let draft = author::draft_from_json(candidate_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let bytes = serde_json::to_vec(&draft)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize draft: {e}")))?;
        let exercise = draft.into_exercise(ItemId::mint(&bytes));
        serde_json::to_string(&exercise)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize exercise: {e}")))
    }
}

impl Default for AuthoringSession {
    fn default() -> Self {
        Self::new()
    }
}
