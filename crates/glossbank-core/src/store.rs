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

//! In-memory banks and reference resolution. Each bank is an id-keyed
//! ordered collection; units point into banks with weak references that
//! resolve to nothing once the target is deleted.

use std::slice;

use crate::error::Fallible;
use crate::types::bank::BankItem;
use crate::types::bank::IdeaItem;
use crate::types::bank::MediaItem;
use crate::types::bank::TextItem;
use crate::types::exercise::Exercise;
use crate::types::exercise::ExerciseDraft;
use crate::types::item_id::ItemId;
use crate::types::path::BankKind;
use crate::types::path::UnitItemRef;
use crate::validate;

/// One ordered, id-keyed collection of bank items.
#[derive(Clone, Debug)]
pub struct Bank<T: BankItem> {
    items: Vec<T>,
}

impl<T: BankItem> Default for Bank<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BankItem> Bank<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn get(&self, id: &ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace the item with the same id, or add the item at the front of
    /// the display order.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|slot| slot.id() == item.id()) {
            Some(slot) => *slot = item,
            None => self.items.insert(0, item),
        }
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<T> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(position))
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A borrowed view of whatever a unit reference points at.
#[derive(Clone, Copy, Debug)]
pub enum ResolvedItem<'a> {
    Exercise(&'a Exercise),
    Text(&'a TextItem),
    Media(&'a MediaItem),
    Idea(&'a IdeaItem),
}

impl ResolvedItem<'_> {
    pub fn title(&self) -> &str {
        match self {
            ResolvedItem::Exercise(item) => item.title(),
            ResolvedItem::Text(item) => item.title(),
            ResolvedItem::Media(item) => item.title(),
            ResolvedItem::Idea(item) => item.title(),
        }
    }
}

/// The four banks an authoring session works against.
#[derive(Clone, Debug, Default)]
pub struct BankStore {
    pub exercises: Bank<Exercise>,
    pub texts: Bank<TextItem>,
    pub media: Bank<MediaItem>,
    pub ideas: Bank<IdeaItem>,
}

impl BankStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow a unit's weak reference into the named bank. A dangling
    /// reference is absence, not an error.
    pub fn resolve(&self, item: &UnitItemRef) -> Option<ResolvedItem<'_>> {
        match item.item_type {
            BankKind::Exercise => self
                .exercises
                .get(&item.bank_item_id)
                .map(ResolvedItem::Exercise),
            BankKind::Text => self.texts.get(&item.bank_item_id).map(ResolvedItem::Text),
            BankKind::Media => self.media.get(&item.bank_item_id).map(ResolvedItem::Media),
            BankKind::Idea => self.ideas.get(&item.bank_item_id).map(ResolvedItem::Idea),
        }
    }

    /// Commit a new exercise candidate: run the validation guard, mint an
    /// id from the candidate's canonical form, and add it to the bank.
    pub fn commit(&mut self, draft: ExerciseDraft) -> Fallible<ItemId> {
        let id = ItemId::mint(&serde_json::to_vec(&draft)?);
        self.commit_with_id(draft, id)
    }

    /// Commit an edit: the candidate replaces whatever currently holds the
    /// id. Ids never change across edits.
    pub fn commit_edit(&mut self, draft: ExerciseDraft, id: ItemId) -> Fallible<ItemId> {
        self.commit_with_id(draft, id)
    }

    fn commit_with_id(&mut self, draft: ExerciseDraft, id: ItemId) -> Fallible<ItemId> {
        validate::check_draft(&draft).map_err(|errors| validate::report(&errors))?;
        self.exercises.upsert(draft.into_exercise(id.clone()));
        Ok(id)
    }
}
