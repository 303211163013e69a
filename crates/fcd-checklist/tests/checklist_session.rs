use std::fs;

use fcd_checklist::checklist::{
    Answer, ChecklistSession, Classification, FileSlot, ItemCatalog, ItemId, Mode, Response,
    StateSlot, DEFAULT_STORAGE_KEY,
};
use tempfile::TempDir;

fn open(dir: &TempDir) -> ChecklistSession<FileSlot> {
    let slot = FileSlot::new(dir.path(), DEFAULT_STORAGE_KEY);
    ChecklistSession::open(ItemCatalog::standard(), slot)
}

fn answer_yes(session: &mut ChecklistSession<FileSlot>, ids: &[u8]) {
    for id in ids {
        session
            .answer(ItemId(*id), Answer::Yes)
            .expect("catalog item");
    }
}

#[test]
fn short_version_fully_positive() {
    let dir = TempDir::new().expect("temp dir");
    let mut session = open(&dir);

    answer_yes(&mut session, &[1, 2, 5, 6, 8, 9, 10]);

    let view = session.view();
    assert_eq!(view.mode, Mode::Short);
    assert_eq!((view.score, view.max_score), (7, 7));
    assert_eq!(view.cutoff.value(), 4);
    assert_eq!(view.classification, Classification::AboveCutoff);
}

#[test]
fn short_version_three_positive_is_below_cutoff() {
    let dir = TempDir::new().expect("temp dir");
    let mut session = open(&dir);

    answer_yes(&mut session, &[2, 8, 9]);

    let view = session.view();
    assert_eq!(view.score, 3);
    assert_eq!(view.classification, Classification::BelowCutoff);
    assert_eq!(
        view.items
            .iter()
            .filter(|entry| entry.response == Response::Unanswered)
            .count(),
        4
    );
}

#[test]
fn full_version_six_positive_meets_cutoff() {
    let dir = TempDir::new().expect("temp dir");
    let mut session = open(&dir);
    session.set_mode(Mode::Full);

    answer_yes(&mut session, &[1, 2, 3, 4, 5, 6]);
    for id in [7, 8, 9, 10, 11] {
        session.answer(ItemId(id), Answer::No).expect("catalog item");
    }

    let view = session.view();
    assert_eq!((view.score, view.max_score), (6, 11));
    assert_eq!(view.cutoff.value(), 6);
    assert_eq!(view.classification, Classification::AboveCutoff);
}

#[test]
fn switching_to_full_after_short_answers() {
    let dir = TempDir::new().expect("temp dir");
    let mut session = open(&dir);
    answer_yes(&mut session, &[1, 5, 9]);
    let before = session.score();

    assert_eq!(session.toggle_mode(), Mode::Full);

    let after = session.score();
    assert_eq!(before.max_score, 7);
    assert_eq!(after.max_score, 11);
    assert_eq!(after.score, before.score);
    for id in [3, 4, 7, 11] {
        assert_eq!(
            session.snapshot().response(ItemId(id)),
            Some(Response::Unanswered)
        );
    }
}

#[test]
fn state_survives_a_new_session() {
    let dir = TempDir::new().expect("temp dir");
    let expected = {
        let mut session = open(&dir);
        session.set_mode(Mode::Full);
        answer_yes(&mut session, &[3, 11]);
        session.answer(ItemId(1), Answer::No).expect("catalog item");
        session.snapshot()
    };

    let reopened = open(&dir);

    assert_eq!(reopened.snapshot(), expected);
    let raw = fs::read_to_string(dir.path().join("fcd-checklist-v1.json")).expect("slot file");
    assert!(raw.contains("\"isFull\":true"));
}

#[test]
fn corrupted_slot_file_starts_fresh() {
    let dir = TempDir::new().expect("temp dir");
    {
        let mut session = open(&dir);
        session.set_mode(Mode::Full);
        answer_yes(&mut session, &[1, 2, 3]);
    }
    let slot = FileSlot::new(dir.path(), DEFAULT_STORAGE_KEY);
    fs::write(slot.path(), "{\"selections\": \"oops\"").expect("overwrite slot");

    let session = open(&dir);

    assert_eq!(session.mode(), Mode::Short);
    assert!(session
        .snapshot()
        .responses
        .values()
        .all(|response| *response == Response::Unanswered));
}

#[test]
fn reset_is_persisted_and_keeps_mode() {
    let dir = TempDir::new().expect("temp dir");
    {
        let mut session = open(&dir);
        session.set_mode(Mode::Full);
        answer_yes(&mut session, &[4, 7]);
        session.reset();
    }

    let session = open(&dir);

    assert_eq!(session.mode(), Mode::Full);
    assert_eq!(session.score().score, 0);
    let slot = FileSlot::new(dir.path(), DEFAULT_STORAGE_KEY);
    assert!(slot.read().expect("readable").is_some());
}
