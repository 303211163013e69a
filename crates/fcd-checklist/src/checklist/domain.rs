use serde::Serialize;
use std::fmt;

/// Stable identifier of a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub u8);

impl ItemId {
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tri-state answer stored for every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    #[default]
    Unanswered,
    No,
    Yes,
}

impl Response {
    /// Contribution to the score. Untested items count the same as a "no".
    pub const fn points(self) -> u32 {
        match self {
            Self::Yes => 1,
            Self::No | Self::Unanswered => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unanswered => "Nicht beantwortet",
            Self::No => "Nein/nicht getestet",
            Self::Yes => "Ja",
        }
    }
}

/// Values a user can set for an item. Clearing happens only through `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    No,
    Yes,
}

impl From<Answer> for Response {
    fn from(value: Answer) -> Self {
        match value {
            Answer::No => Response::No,
            Answer::Yes => Response::Yes,
        }
    }
}

/// Which question set is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Short,
    Full,
}

impl Mode {
    pub const fn from_full(full: bool) -> Self {
        if full {
            Self::Full
        } else {
            Self::Short
        }
    }

    pub const fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Short => Self::Full,
            Self::Full => Self::Short,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "Kurzversion",
            Self::Full => "Vollversion",
        }
    }
}

/// Contract violations raised by the checklist engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    #[error("item {0} is not part of the checklist catalog")]
    InvalidItemId(ItemId),
    #[error("item {0} appears more than once in the catalog")]
    DuplicateItemId(ItemId),
    #[error("item id {0} is not a positive number")]
    NonPositiveItemId(ItemId),
}
