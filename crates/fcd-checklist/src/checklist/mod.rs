//! Response and scoring engine for the functional cognitive disorder checklist.
//!
//! The catalog is static; a [`ChecklistSession`] owns the answers, filters the
//! items by mode, scores them against the study cutoffs and persists the state
//! after every change.

pub mod catalog;
pub mod domain;
pub mod persistence;
pub mod scoring;
mod session;
pub mod store;
pub mod threshold;
pub mod view;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use catalog::{Item, ItemCatalog, DEFAULT_STORAGE_KEY, SOURCE_CITATION};
pub use domain::{Answer, ChecklistError, ItemId, Mode, Response};
pub use persistence::{
    FileSlot, MemorySlot, PersistedStateError, PersistenceAdapter, SlotError, StateSlot,
};
pub use scoring::Score;
pub use session::ChecklistSession;
pub use store::{ResponseStore, StoreError, StoreSnapshot};
pub use threshold::{
    classify, Classification, Cutoff, POSITIVE_PREDICTIVE_VALUE_PCT, SPECIFICITY_PCT,
};
pub use view::{ChecklistView, ItemDetailView, ItemEntryView};
pub use visibility::{visible_items, VisibleItem};
