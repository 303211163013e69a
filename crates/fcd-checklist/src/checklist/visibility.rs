use super::catalog::{Item, ItemCatalog};
use super::domain::Mode;

/// An item applicable under the current mode, with its 1-based display number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleItem<'a> {
    pub ordinal: usize,
    pub item: &'a Item,
}

pub fn is_visible(item: &Item, mode: Mode) -> bool {
    mode.is_full() || !item.only_full
}

/// Catalog items relevant to `mode`, in catalog order.
pub fn visible_items(catalog: &ItemCatalog, mode: Mode) -> Vec<VisibleItem<'_>> {
    catalog
        .items()
        .iter()
        .filter(|item| is_visible(item, mode))
        .enumerate()
        .map(|(index, item)| VisibleItem {
            ordinal: index + 1,
            item,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::domain::ItemId;

    #[test]
    fn short_mode_shows_seven_items() {
        let catalog = ItemCatalog::standard();
        let visible = visible_items(&catalog, Mode::Short);

        let ids: Vec<u8> = visible.iter().map(|entry| entry.item.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 5, 6, 8, 9, 10]);
    }

    #[test]
    fn full_mode_shows_everything() {
        let catalog = ItemCatalog::standard();
        let visible = visible_items(&catalog, Mode::Full);

        assert_eq!(visible.len(), 11);
        assert_eq!(visible[6].item.id, ItemId(7));
    }

    #[test]
    fn ordinals_follow_the_filtered_order() {
        let catalog = ItemCatalog::standard();
        let visible = visible_items(&catalog, Mode::Short);

        let numbered: Vec<(usize, u8)> = visible
            .iter()
            .map(|entry| (entry.ordinal, entry.item.id.get()))
            .collect();
        assert_eq!(numbered[2], (3, 5));
        assert_eq!(numbered.last().copied(), Some((7, 10)));
    }
}
