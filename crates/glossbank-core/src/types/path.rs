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

use serde::Deserialize;
use serde::Serialize;

use crate::types::item_id::ItemId;

/// Names one of the four banks.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankKind {
    Exercise,
    Text,
    Media,
    Idea,
}

/// A weak link from a unit to a bank item: a bank name and an id, nothing
/// more. The referenced item can be deleted from its bank independently, in
/// which case the reference dangles and resolves to nothing.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitItemRef {
    pub bank_item_id: ItemId,
    pub item_type: BankKind,
}

impl UnitItemRef {
    pub fn new(bank_item_id: ItemId, item_type: BankKind) -> Self {
        Self {
            bank_item_id,
            item_type,
        }
    }
}

/// One stage of a learning path: optionally anchored on a text or media
/// item, with ordered supporting resources and exercises.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathUnit {
    pub id: ItemId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_content: Option<UnitItemRef>,
    #[serde(default)]
    pub resources: Vec<UnitItemRef>,
    #[serde(default)]
    pub exercises: Vec<UnitItemRef>,
}

/// An ordered learning sequence assembled from bank items.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub units: Vec<PathUnit>,
}
