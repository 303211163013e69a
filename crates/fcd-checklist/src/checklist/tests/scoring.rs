use super::common::*;
use crate::checklist::catalog::ItemCatalog;
use crate::checklist::domain::{Answer, ItemId, Mode};
use crate::checklist::scoring::calculate;
use crate::checklist::store::ResponseStore;
use crate::checklist::threshold::{classify, Classification, Cutoff};
use crate::checklist::visibility::visible_items;

fn score_of(store: &ResponseStore) -> (u32, u32) {
    let catalog = catalog();
    let visible = visible_items(&catalog, store.mode());
    let score = calculate(&store.snapshot(), &visible);
    (score.score, score.max_score)
}

#[test]
fn short_mode_all_yes_is_above_cutoff() {
    let store = store_with_yes(Mode::Short, &SHORT_IDS);

    let (score, max_score) = score_of(&store);

    assert_eq!((score, max_score), (7, 7));
    assert_eq!(Cutoff::for_mode(Mode::Short).value(), 4);
    assert_eq!(classify(score, Mode::Short), Classification::AboveCutoff);
}

#[test]
fn three_short_answers_stay_below_cutoff() {
    let store = store_with_yes(Mode::Short, &[1, 6, 10]);

    let (score, max_score) = score_of(&store);

    assert_eq!((score, max_score), (3, 7));
    assert_eq!(classify(score, Mode::Short), Classification::BelowCutoff);
}

#[test]
fn six_of_eleven_in_full_mode_hits_the_inclusive_boundary() {
    let store = store_with_yes(Mode::Full, &[1, 3, 4, 7, 9, 11]);

    let (score, max_score) = score_of(&store);

    assert_eq!((score, max_score), (6, 11));
    assert_eq!(classify(score, Mode::Full), Classification::AboveCutoff);
}

#[test]
fn no_and_unanswered_score_the_same() {
    let mut store = store_with_yes(Mode::Short, &[1]);
    let (baseline, _) = score_of(&store);

    for id in [2, 5, 6] {
        store.set_response(ItemId(id), Answer::No).expect("valid id");
    }

    assert_eq!(score_of(&store).0, baseline);
}

#[test]
fn hidden_yes_answers_do_not_count() {
    let store = store_with_yes(Mode::Short, &FULL_ONLY_IDS);

    assert_eq!(score_of(&store), (0, 7));
}

#[test]
fn score_never_exceeds_max() {
    for mode in [Mode::Short, Mode::Full] {
        let all: Vec<u8> = (1..=11).collect();
        let store = store_with_yes(mode, &all);
        let (score, max_score) = score_of(&store);
        assert_eq!(score, max_score);
        assert!(score <= max_score);
    }
}

#[test]
fn empty_catalog_scores_zero_of_zero() {
    let catalog = ItemCatalog::from_items(Vec::new()).expect("empty catalog");
    let store = ResponseStore::new(&catalog);

    let visible = visible_items(&catalog, Mode::Full);
    let score = calculate(&store.snapshot(), &visible);

    assert_eq!((score.score, score.max_score), (0, 0));
    assert_eq!(score.percent(), 0);
    assert_eq!(Cutoff::for_mode(Mode::Full).percent_of(score.max_score), 0);
}
