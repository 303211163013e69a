use std::io::{self, BufRead, Write};

use fcd_checklist::checklist::{ChecklistSession, FileSlot, ItemCatalog, ItemId};
use fcd_checklist::config::StorageConfig;
use tracing::debug;

pub(crate) fn open_session(storage: &StorageConfig) -> ChecklistSession<FileSlot> {
    let slot = FileSlot::new(&storage.state_dir, &storage.key);
    debug!(path = %slot.path().display(), "opening checklist slot");
    ChecklistSession::open(ItemCatalog::standard(), slot)
}

pub(crate) fn parse_item_id(raw: &str) -> Result<ItemId, String> {
    raw.trim()
        .parse::<u8>()
        .map(ItemId)
        .map_err(|err| format!("failed to parse '{raw}' as an item number ({err})"))
}

/// Asks a yes/no question; anything other than an explicit yes declines.
pub(crate) fn confirm(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<bool> {
    write!(output, "{prompt} [j/N] ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "j" | "ja"
    ))
}
