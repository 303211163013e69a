use std::collections::BTreeMap;

use super::catalog::ItemCatalog;
use super::domain::{Answer, ChecklistError, ItemId, Mode, Response};

/// Owned copy of the answer state, handed to scoring, persistence and presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub responses: BTreeMap<ItemId, Response>,
    pub mode: Mode,
}

impl StoreSnapshot {
    pub fn response(&self, id: ItemId) -> Option<Response> {
        self.responses.get(&id).copied()
    }
}

/// Why a snapshot could not become a store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("item {0} is missing from the saved answers")]
    MissingItem(ItemId),
    #[error("saved answers reference unknown item {0}")]
    UnknownItem(ItemId),
}

/// Answer state for every catalog item plus the active mode.
///
/// The map always holds exactly the catalog's ids. Mutation goes through
/// [`set_response`](Self::set_response), [`set_mode`](Self::set_mode) and
/// [`reset`](Self::reset) only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseStore {
    responses: BTreeMap<ItemId, Response>,
    mode: Mode,
}

impl ResponseStore {
    /// All items unanswered, short mode.
    pub fn new(catalog: &ItemCatalog) -> Self {
        Self {
            responses: catalog.ids().map(|id| (id, Response::Unanswered)).collect(),
            mode: Mode::Short,
        }
    }

    /// Rebuilds a store, refusing snapshots that do not cover the catalog exactly.
    pub fn from_snapshot(
        catalog: &ItemCatalog,
        snapshot: StoreSnapshot,
    ) -> Result<Self, StoreError> {
        if let Some(unknown) = snapshot.responses.keys().find(|id| !catalog.contains(**id)) {
            return Err(StoreError::UnknownItem(*unknown));
        }
        if let Some(missing) = catalog
            .ids()
            .find(|id| !snapshot.responses.contains_key(id))
        {
            return Err(StoreError::MissingItem(missing));
        }

        Ok(Self {
            responses: snapshot.responses,
            mode: snapshot.mode,
        })
    }

    pub fn set_response(&mut self, id: ItemId, answer: Answer) -> Result<(), ChecklistError> {
        let slot = self
            .responses
            .get_mut(&id)
            .ok_or(ChecklistError::InvalidItemId(id))?;
        *slot = answer.into();
        Ok(())
    }

    /// Switches the active question set. Stored answers are kept for hidden items.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Clears every answer; the mode stays as it is.
    pub fn reset(&mut self) {
        for response in self.responses.values_mut() {
            *response = Response::Unanswered;
        }
    }

    pub fn response(&self, id: ItemId) -> Option<Response> {
        self.responses.get(&id).copied()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            responses: self.responses.clone(),
            mode: self.mode,
        }
    }
}
