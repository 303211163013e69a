use crate::checklist::catalog::ItemCatalog;
use crate::checklist::domain::{Answer, ItemId, Mode};
use crate::checklist::persistence::{SlotError, StateSlot};
use crate::checklist::store::ResponseStore;

pub(super) const SHORT_IDS: [u8; 7] = [1, 2, 5, 6, 8, 9, 10];
pub(super) const FULL_ONLY_IDS: [u8; 4] = [3, 4, 7, 11];

pub(super) fn catalog() -> ItemCatalog {
    ItemCatalog::standard()
}

pub(super) fn store_with_yes(mode: Mode, ids: &[u8]) -> ResponseStore {
    let catalog = catalog();
    let mut store = ResponseStore::new(&catalog);
    store.set_mode(mode);
    for id in ids {
        store
            .set_response(ItemId(*id), Answer::Yes)
            .expect("catalog id");
    }
    store
}

/// Payload in the persisted wire shape with the given codes per id.
pub(super) fn payload(codes: &[(u8, i8)], is_full: bool) -> String {
    let selections: Vec<String> = codes
        .iter()
        .map(|(id, code)| format!("\"{id}\":{code}"))
        .collect();
    format!(
        "{{\"selections\":{{{}}},\"isFull\":{}}}",
        selections.join(","),
        is_full
    )
}

pub(super) fn all_codes(code: i8) -> Vec<(u8, i8)> {
    (1..=11).map(|id| (id, code)).collect()
}

/// Slot whose storage is always unavailable.
#[derive(Default)]
pub(super) struct BrokenSlot;

impl StateSlot for BrokenSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        Err(SlotError::Unavailable("storage disabled".to_string()))
    }

    fn write(&self, _payload: &str) -> Result<(), SlotError> {
        Err(SlotError::Unavailable("quota exceeded".to_string()))
    }
}
