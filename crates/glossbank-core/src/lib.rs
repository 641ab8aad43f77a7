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

//! glossbank-core: Core library for the glossbank authoring toolkit.
//!
//! This library provides the types and algorithms for:
//! - The typed exercise model (cloze, multiple choice, essay, ordering)
//!   and the other bank item families (texts, media references, ideas)
//! - Bidirectional transcoding between the plain-text authoring notation
//!   and structured exercises, with live-preview merging
//! - The validation guard run before an exercise is persisted
//! - Learning paths assembled from weak references into the banks

pub mod author;
pub mod error;
pub mod guide;
pub mod markdown;
pub mod markup;
pub mod store;
pub mod types;
pub mod validate;

// Re-exports for convenience
pub use author::{AuthoredMeta, draft, draft_from_json, parse_tag_line, preview};
pub use error::{ErrorReport, Fallible, fail};
pub use guide::{MarkupGuide, describe};
pub use markup::{ClozeSegment, blank_token, cloze_segments, parse, serialize};
pub use store::{Bank, BankStore, ResolvedItem};
pub use types::bank::{BankItem, IdeaItem, IdeaKind, MediaItem, MediaKind, TextItem};
pub use types::exercise::{
    ChoiceOption, ClozeBlank, Exercise, ExerciseBody, ExerciseDraft, ExerciseKind, OrderingItem,
    sort_for_display,
};
pub use types::item_id::ItemId;
pub use types::path::{BankKind, LearningPath, PathUnit, UnitItemRef};
pub use validate::{ValidationError, check_draft, check_exercise};
