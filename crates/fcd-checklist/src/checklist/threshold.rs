use serde::Serialize;

use super::domain::Mode;
use super::scoring::rounded_percent;

/// Specificity at or above the cutoff reported by the pilot validation.
pub const SPECIFICITY_PCT: u8 = 97;
/// Positive predictive value at or above the cutoff reported by the pilot validation.
pub const POSITIVE_PREDICTIVE_VALUE_PCT: u8 = 91;

const FULL_CUTOFF: u32 = 6;
const SHORT_CUTOFF: u32 = 4;

/// Score threshold of the validated instrument.
///
/// The values belong to the published 11/7-item question sets and are not
/// derived from the number of visible items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cutoff(u32);

impl Cutoff {
    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Full => Self(FULL_CUTOFF),
            Mode::Short => Self(SHORT_CUTOFF),
        }
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Position of the cutoff marker on a 0..=100 score bar.
    pub fn percent_of(self, max_score: u32) -> u8 {
        rounded_percent(self.0, max_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    AboveCutoff,
    BelowCutoff,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AboveCutoff => "Oberhalb des Cut-offs",
            Self::BelowCutoff => "Unterhalb des Cut-offs",
        }
    }

    /// Interpretive statement from the source study.
    pub fn interpretation(self) -> String {
        match self {
            Self::AboveCutoff => format!(
                "Oberhalb des Cut-offs: hohe Spezifität (~{SPECIFICITY_PCT}%) und positiver Vorhersagewert ~{POSITIVE_PREDICTIVE_VALUE_PCT}% für funktionelle kognitive Störung (Pilotdaten)."
            ),
            Self::BelowCutoff => "Unterhalb des Cut-offs: Funktionelle kognitive Störung wenig wahrscheinlich; bitte klinische Beurteilung und Verlauf beachten.".to_string(),
        }
    }
}

/// Inclusive comparison against the mode's cutoff.
pub fn classify(score: u32, mode: Mode) -> Classification {
    if score >= Cutoff::for_mode(mode).value() {
        Classification::AboveCutoff
    } else {
        Classification::BelowCutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoffs_are_fixed_per_mode() {
        assert_eq!(Cutoff::for_mode(Mode::Short).value(), 4);
        assert_eq!(Cutoff::for_mode(Mode::Full).value(), 6);
    }

    #[test]
    fn boundary_is_inclusive() {
        assert_eq!(classify(4, Mode::Short), Classification::AboveCutoff);
        assert_eq!(classify(3, Mode::Short), Classification::BelowCutoff);
        assert_eq!(classify(6, Mode::Full), Classification::AboveCutoff);
        assert_eq!(classify(5, Mode::Full), Classification::BelowCutoff);
    }

    #[test]
    fn short_cutoff_applies_even_with_full_mode_score_range() {
        assert_eq!(classify(5, Mode::Short), Classification::AboveCutoff);
    }

    #[test]
    fn interpretation_carries_point_estimates() {
        let above = Classification::AboveCutoff.interpretation();
        assert!(above.contains("97%"));
        assert!(above.contains("91%"));
        assert!(Classification::BelowCutoff
            .interpretation()
            .contains("wenig wahrscheinlich"));
    }

    #[test]
    fn cutoff_marker_position() {
        assert_eq!(Cutoff::for_mode(Mode::Short).percent_of(7), 57);
        assert_eq!(Cutoff::for_mode(Mode::Full).percent_of(11), 55);
        assert_eq!(Cutoff::for_mode(Mode::Full).percent_of(0), 0);
    }
}
