use serde::Serialize;

use super::catalog::{Item, ItemCatalog};
use super::domain::{ChecklistError, ItemId, Mode, Response};
use super::scoring::{self, Score};
use super::store::StoreSnapshot;
use super::threshold::{self, Classification, Cutoff};
use super::visibility;

#[derive(Debug, Clone, Serialize)]
pub struct ItemEntryView {
    pub ordinal: usize,
    pub id: ItemId,
    pub label: &'static str,
    pub only_full: bool,
    pub has_instruction: bool,
    pub response: Response,
    pub response_label: &'static str,
}

/// Everything the presentation layer reads after each intent.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistView {
    pub mode: Mode,
    pub mode_label: &'static str,
    pub items: Vec<ItemEntryView>,
    pub score: u32,
    pub max_score: u32,
    pub score_percent: u8,
    pub cutoff: Cutoff,
    pub cutoff_percent: u8,
    pub classification: Classification,
    pub classification_label: &'static str,
    pub interpretation: String,
}

impl ChecklistView {
    pub fn build(catalog: &ItemCatalog, snapshot: &StoreSnapshot) -> Self {
        let visible = visibility::visible_items(catalog, snapshot.mode);
        let Score { score, max_score } = scoring::calculate(snapshot, &visible);
        let cutoff = Cutoff::for_mode(snapshot.mode);
        let classification = threshold::classify(score, snapshot.mode);

        let items = visible
            .iter()
            .map(|entry| {
                let response = snapshot
                    .response(entry.item.id)
                    .unwrap_or(Response::Unanswered);
                ItemEntryView {
                    ordinal: entry.ordinal,
                    id: entry.item.id,
                    label: entry.item.label,
                    only_full: entry.item.only_full,
                    has_instruction: entry.item.instruction.is_some(),
                    response,
                    response_label: response.label(),
                }
            })
            .collect();

        Self {
            mode: snapshot.mode,
            mode_label: snapshot.mode.label(),
            items,
            score,
            max_score,
            score_percent: Score { score, max_score }.percent(),
            cutoff,
            cutoff_percent: cutoff.percent_of(max_score),
            classification,
            classification_label: classification.label(),
            interpretation: classification.interpretation(),
        }
    }
}

/// Instruction panel content for a single item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetailView {
    pub position: usize,
    pub id: ItemId,
    pub label: &'static str,
    pub only_full: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<&'static str>,
    pub response: Response,
}

impl ItemDetailView {
    pub fn build(
        catalog: &ItemCatalog,
        snapshot: &StoreSnapshot,
        id: ItemId,
    ) -> Result<Self, ChecklistError> {
        let (position, item) = catalog
            .position(id)
            .zip(catalog.get(id))
            .ok_or(ChecklistError::InvalidItemId(id))?;
        let Item {
            label,
            only_full,
            instruction,
            ..
        } = *item;

        Ok(Self {
            position,
            id,
            label,
            only_full,
            instruction,
            response: snapshot.response(id).unwrap_or(Response::Unanswered),
        })
    }
}
