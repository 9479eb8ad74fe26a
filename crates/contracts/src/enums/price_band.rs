use serde::{Deserialize, Serialize};

/// Price band used by the catalog price filter.
///
/// Bounds are inclusive and expressed in yen per hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    Budget,
    Premium,
    Luxury,
}

impl PriceBand {
    pub fn code(&self) -> &'static str {
        match self {
            PriceBand::Budget => "budget",
            PriceBand::Premium => "premium",
            PriceBand::Luxury => "luxury",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PriceBand::Budget => "〜¥10,000",
            PriceBand::Premium => "¥10,001〜¥20,000",
            PriceBand::Luxury => "¥20,001〜",
        }
    }

    pub fn all() -> Vec<PriceBand> {
        vec![PriceBand::Budget, PriceBand::Premium, PriceBand::Luxury]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "budget" => Some(PriceBand::Budget),
            "premium" => Some(PriceBand::Premium),
            "luxury" => Some(PriceBand::Luxury),
            _ => None,
        }
    }

    /// Whether `price` falls inside this band.
    pub fn contains(&self, price: u32) -> bool {
        match self {
            PriceBand::Budget => (6000..=10000).contains(&price),
            PriceBand::Premium => (10001..=20000).contains(&price),
            PriceBand::Luxury => price >= 20001,
        }
    }
}

impl std::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_band_bounds_are_inclusive() {
        assert!(PriceBand::Budget.contains(6000));
        assert!(PriceBand::Budget.contains(10000));
        assert!(!PriceBand::Budget.contains(5999));
        assert!(!PriceBand::Budget.contains(10001));
    }

    #[test]
    fn premium_and_luxury_meet_without_overlap() {
        assert!(PriceBand::Premium.contains(10001));
        assert!(PriceBand::Premium.contains(20000));
        assert!(!PriceBand::Premium.contains(20001));
        assert!(PriceBand::Luxury.contains(20001));
        assert!(!PriceBand::Luxury.contains(20000));
    }

    #[test]
    fn unknown_code_parses_to_none() {
        assert_eq!(PriceBand::from_code("mid-range"), None);
    }
}
