use super::store::StoreSnapshot;
use super::visibility::VisibleItem;

/// Points collected over the visible items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub score: u32,
    pub max_score: u32,
}

impl Score {
    /// Share of the maximum reached, rounded to whole percent. Zero when nothing is visible.
    pub fn percent(&self) -> u8 {
        rounded_percent(self.score, self.max_score)
    }
}

pub fn calculate(snapshot: &StoreSnapshot, visible: &[VisibleItem<'_>]) -> Score {
    let score = visible
        .iter()
        .filter_map(|entry| snapshot.response(entry.item.id))
        .map(|response| response.points())
        .sum();

    Score {
        score,
        max_score: visible.len() as u32,
    }
}

pub(crate) fn rounded_percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let pct = (f64::from(part) / f64::from(whole) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_like_the_score_bar() {
        assert_eq!(rounded_percent(3, 7), 43);
        assert_eq!(rounded_percent(4, 7), 57);
        assert_eq!(rounded_percent(6, 11), 55);
        assert_eq!(rounded_percent(7, 7), 100);
    }

    #[test]
    fn empty_denominator_is_zero() {
        assert_eq!(rounded_percent(0, 0), 0);
        let score = Score {
            score: 0,
            max_score: 0,
        };
        assert_eq!(score.percent(), 0);
    }
}
