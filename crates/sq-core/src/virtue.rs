use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four virtues a playthrough accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Virtue {
    /// Trust in God.
    Faith,
    /// Compassion toward others.
    Mercy,
    /// Doing right in the face of fear.
    Courage,
    /// Sound judgement.
    Wisdom,
}

impl Virtue {
    /// All virtues, in display order.
    pub const ALL: [Virtue; 4] = [Self::Faith, Self::Mercy, Self::Courage, Self::Wisdom];

    /// The capitalized display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Faith => "Faith",
            Self::Mercy => "Mercy",
            Self::Courage => "Courage",
            Self::Wisdom => "Wisdom",
        }
    }
}

impl fmt::Display for Virtue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Points granted per virtue for a correct answer.
pub type Reward = BTreeMap<Virtue, u32>;

/// Running totals for all four virtues.
///
/// Every virtue is always present, starting at zero, so a tally serializes
/// to the same four keys whatever has been earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VirtueTally {
    totals: BTreeMap<Virtue, u32>,
}

impl VirtueTally {
    /// A tally with every virtue at zero.
    pub fn new() -> Self {
        Self {
            totals: Virtue::ALL.into_iter().map(|v| (v, 0)).collect(),
        }
    }

    /// The current total for a virtue.
    pub fn get(&self, virtue: Virtue) -> u32 {
        self.totals.get(&virtue).copied().unwrap_or(0)
    }

    /// Add every entry of a reward to the totals.
    pub fn apply(&mut self, reward: &Reward) {
        for (&virtue, &amount) in reward {
            let total = self.totals.entry(virtue).or_insert(0);
            *total = total.saturating_add(amount);
        }
    }

    /// Reset every virtue to zero.
    pub fn reset(&mut self) {
        for total in self.totals.values_mut() {
            *total = 0;
        }
    }

    /// Sum of all four totals.
    pub fn total(&self) -> u32 {
        self.totals.values().sum()
    }

    /// True when nothing has been earned.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate `(virtue, total)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Virtue, u32)> + '_ {
        Virtue::ALL.into_iter().map(|v| (v, self.get(v)))
    }

    /// Only the virtues with a non-zero total, in display order.
    pub fn earned(&self) -> impl Iterator<Item = (Virtue, u32)> + '_ {
        self.iter().filter(|&(_, n)| n > 0)
    }
}

impl Default for VirtueTally {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VirtueTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(v, n)| format!("{v} {n}")).collect();
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tally_is_all_zero() {
        let tally = VirtueTally::new();
        for v in Virtue::ALL {
            assert_eq!(tally.get(v), 0);
        }
        assert!(tally.is_empty());
    }

    #[test]
    fn apply_adds_only_rewarded_virtues() {
        let mut tally = VirtueTally::new();
        let reward: Reward = [(Virtue::Faith, 2), (Virtue::Mercy, 1)].into();
        tally.apply(&reward);
        tally.apply(&reward);
        assert_eq!(tally.get(Virtue::Faith), 4);
        assert_eq!(tally.get(Virtue::Mercy), 2);
        assert_eq!(tally.get(Virtue::Courage), 0);
        assert_eq!(tally.total(), 6);
    }

    #[test]
    fn earned_skips_zero_totals() {
        let mut tally = VirtueTally::new();
        tally.apply(&[(Virtue::Wisdom, 3)].into());
        let earned: Vec<_> = tally.earned().collect();
        assert_eq!(earned, vec![(Virtue::Wisdom, 3)]);
    }

    #[test]
    fn reset_clears_totals() {
        let mut tally = VirtueTally::new();
        tally.apply(&[(Virtue::Courage, 5)].into());
        tally.reset();
        assert_eq!(tally, VirtueTally::new());
    }

    #[test]
    fn display_lists_all_four() {
        let mut tally = VirtueTally::new();
        tally.apply(&[(Virtue::Mercy, 2)].into());
        assert_eq!(tally.to_string(), "Faith 0, Mercy 2, Courage 0, Wisdom 0");
    }

    #[test]
    fn serializes_as_named_map() {
        let mut tally = VirtueTally::new();
        tally.apply(&[(Virtue::Faith, 1)].into());
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"Faith":1,"Mercy":0,"Courage":0,"Wisdom":0}"#);
    }
}
