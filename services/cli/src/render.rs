use std::fmt::Write;

use fcd_checklist::checklist::{ChecklistView, ItemDetailView, Response, SOURCE_CITATION};

const BAR_WIDTH: usize = 20;

pub(crate) fn checklist_text(view: &ChecklistView) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Funktionelle kognitive Störungen – Diagnostische Orientierungshilfe ({})",
        view.mode_label
    );
    for entry in &view.items {
        let marker = match entry.response {
            Response::Yes => "[x]",
            Response::No => "[-]",
            Response::Unanswered => "[ ]",
        };
        let _ = writeln!(
            out,
            "{:>2}. {} {} (Item {}, {})",
            entry.ordinal,
            marker,
            entry.label,
            entry.id,
            entry.response_label
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Score: {} / {} Punkte (Cut-off {})",
        view.score,
        view.max_score,
        view.cutoff.value()
    );
    let _ = writeln!(
        out,
        "{}",
        score_bar(view.score_percent, view.cutoff_percent)
    );
    let _ = writeln!(out, "{}: {}", view.classification_label, view.interpretation);
    let _ = writeln!(out, "Legende: Ja = 1 Punkt, Nein/nicht getestet = 0 Punkte");
    let _ = write!(out, "Quelle: {SOURCE_CITATION}");

    out
}

pub(crate) fn item_text(detail: &ItemDetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Item {}", detail.position);
    let suffix = if detail.only_full {
        " (nur Vollversion)"
    } else {
        ""
    };
    let _ = writeln!(out, "{}{}", detail.label, suffix);
    let _ = writeln!(out, "Aktuelle Antwort: {}", detail.response.label());
    if let Some(instruction) = detail.instruction {
        let _ = writeln!(out);
        let _ = write!(out, "{instruction}");
    }
    out
}

/// Fixed-width bar with the filled share and a `|` at the cutoff position.
pub(crate) fn score_bar(score_percent: u8, cutoff_percent: u8) -> String {
    let filled = usize::from(score_percent) * BAR_WIDTH / 100;
    let marker = (usize::from(cutoff_percent) * BAR_WIDTH / 100).min(BAR_WIDTH - 1);

    let cells: String = (0..BAR_WIDTH)
        .map(|index| match (index == marker, index < filled) {
            (true, _) => '|',
            (false, true) => '#',
            (false, false) => '.',
        })
        .collect();
    format!("[{cells}] {score_percent}%")
}
