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

use crate::types::exercise::Exercise;
use crate::types::item_id::ItemId;

/// Common capability of every reusable content unit stored in a bank.
///
/// Tag order is display-significant but carries no meaning; duplicate tags
/// are permitted.
pub trait BankItem {
    fn id(&self) -> &ItemId;
    fn title(&self) -> &str;
    fn tags(&self) -> &[String];
}

impl BankItem for Exercise {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// A reading passage or dialogue in the text bank.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TextItem {
    pub id: ItemId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BankItem for TextItem {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Image,
}

/// A reference to an external video, audio clip, or image in the media
/// bank. The bank stores only the URL, never the asset itself.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: ItemId,
    pub title: String,
    pub media_type: MediaKind,
    pub url: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BankItem for MediaItem {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaKind {
    Vocabulary,
    Grammar,
    CulturalNote,
}

/// A pedagogical note in the idea bank: a vocabulary list, a grammar
/// explanation, or a cultural note.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaItem {
    pub id: ItemId,
    pub title: String,
    pub idea_type: IdeaKind,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BankItem for IdeaItem {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}
