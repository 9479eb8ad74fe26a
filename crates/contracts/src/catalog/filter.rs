use super::guide::Guide;
use crate::enums::PriceBand;
use serde::{Deserialize, Serialize};

/// Active catalog filters. Empty values mean "no restriction"; all present
/// filters are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideFilter {
    pub location: Option<String>,
    pub language: Option<String>,
    /// Price band code; an unrecognized code passes every guide through
    pub price: Option<String>,
}

impl GuideFilter {
    pub fn new(location: &str, language: &str, price: &str) -> Self {
        fn non_empty(s: &str) -> Option<String> {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        }
        Self {
            location: non_empty(location),
            language: non_empty(language),
            price: non_empty(price),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.language.is_none() && self.price.is_none()
    }

    pub fn matches(&self, guide: &Guide) -> bool {
        if let Some(location) = &self.location {
            if &guide.location != location {
                return false;
            }
        }
        if let Some(language) = &self.language {
            if !guide.languages.iter().any(|l| l == language) {
                return false;
            }
        }
        if let Some(price) = &self.price {
            if let Some(band) = PriceBand::from_code(price) {
                if !band.contains(guide.price) {
                    return false;
                }
            }
        }
        true
    }

    /// Filter the full unfiltered list into a derived list.
    pub fn apply(&self, guides: &[Guide]) -> Vec<Guide> {
        guides
            .iter()
            .filter(|g| self.matches(g))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::guide::default_guides;

    fn priced(price: u32) -> Guide {
        Guide {
            id: 99,
            name: "price probe".into(),
            location: "tokyo".into(),
            rating: None,
            price,
            image: None,
            description: None,
            languages: vec!["ja".into()],
            specialties: vec![],
        }
    }

    #[test]
    fn absent_location_yields_zero_results() {
        let guides = default_guides();
        let filter = GuideFilter::new("atlantis", "", "");
        let result = filter.apply(&guides);
        assert!(result.is_empty());
        // counters report 0/N
        assert_eq!((result.len(), guides.len()), (0, 12));
    }

    #[test]
    fn budget_band_boundaries() {
        let filter = GuideFilter::new("", "", "budget");
        assert!(filter.matches(&priced(6000)));
        assert!(filter.matches(&priced(10000)));
        assert!(!filter.matches(&priced(5999)));
        assert!(!filter.matches(&priced(10001)));
    }

    #[test]
    fn unrecognized_price_band_passes_everything() {
        let guides = default_guides();
        let filter = GuideFilter::new("", "", "mid-range");
        assert_eq!(filter.apply(&guides).len(), guides.len());
    }

    #[test]
    fn filters_combine_with_and() {
        let guides = default_guides();
        let filter = GuideFilter::new("kyoto", "zh", "");
        let result = filter.apply(&guides);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "李美麗");
    }

    #[test]
    fn language_membership_filter() {
        let guides = default_guides();
        let filter = GuideFilter::new("", "ko", "");
        let result = filter.apply(&guides);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].location, "fukuoka");
    }

    #[test]
    fn empty_filter_is_identity() {
        let guides = default_guides();
        let filter = GuideFilter::new("", "", "");
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&guides).len(), guides.len());
    }
}
