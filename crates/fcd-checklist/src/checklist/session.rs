use tracing::debug;

use super::catalog::ItemCatalog;
use super::domain::{Answer, ChecklistError, ItemId, Mode};
use super::persistence::{PersistenceAdapter, StateSlot};
use super::scoring::{self, Score};
use super::store::{ResponseStore, StoreSnapshot};
use super::threshold::{self, Classification};
use super::view::{ChecklistView, ItemDetailView};
use super::visibility;

/// A checklist session: the single owner of the answer state.
///
/// Every intent mutates the store and then persists it before returning.
pub struct ChecklistSession<S> {
    catalog: ItemCatalog,
    store: ResponseStore,
    persistence: PersistenceAdapter<S>,
}

impl<S: StateSlot> ChecklistSession<S> {
    /// Restores saved state from `slot`, falling back to a fresh store.
    pub fn open(catalog: ItemCatalog, slot: S) -> Self {
        let persistence = PersistenceAdapter::new(slot);
        let store = persistence.load_or_default(&catalog);
        Self {
            catalog,
            store,
            persistence,
        }
    }

    pub fn answer(&mut self, id: ItemId, answer: Answer) -> Result<(), ChecklistError> {
        self.store.set_response(id, answer)?;
        debug!(item = %id, ?answer, "answer recorded");
        self.persist();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.store.set_mode(mode);
        debug!(?mode, "mode set");
        self.persist();
    }

    pub fn toggle_mode(&mut self) -> Mode {
        let mode = self.store.toggle_mode();
        debug!(?mode, "mode toggled");
        self.persist();
        mode
    }

    pub fn reset(&mut self) {
        self.store.reset();
        debug!("answers reset");
        self.persist();
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn mode(&self) -> Mode {
        self.store.mode()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }

    pub fn score(&self) -> Score {
        let visible = visibility::visible_items(&self.catalog, self.store.mode());
        scoring::calculate(&self.store.snapshot(), &visible)
    }

    pub fn classification(&self) -> Classification {
        threshold::classify(self.score().score, self.store.mode())
    }

    pub fn view(&self) -> ChecklistView {
        ChecklistView::build(&self.catalog, &self.store.snapshot())
    }

    pub fn item_detail(&self, id: ItemId) -> Result<ItemDetailView, ChecklistError> {
        ItemDetailView::build(&self.catalog, &self.store.snapshot(), id)
    }

    fn persist(&self) {
        self.persistence.save(&self.store.snapshot());
    }
}
