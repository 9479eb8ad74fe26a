use serde::{Deserialize, Serialize};

/// One catalog guide record. The seed list is immutable; filtering only ever
/// produces derived lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: u32,
    pub name: String,
    /// Location code, resolved for display via `locations::display_name`
    pub location: String,
    pub rating: Option<f64>,
    /// Yen per hour
    pub price: u32,
    pub image: Option<String>,
    pub description: Option<String>,
    /// Language codes, e.g. ["ja", "en"]
    pub languages: Vec<String>,
    pub specialties: Vec<String>,
}

impl Guide {
    fn seed(
        id: u32,
        name: &str,
        location: &str,
        rating: f64,
        price: u32,
        image: &str,
        languages: &[&str],
        specialties: &[&str],
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            location: location.to_string(),
            rating: Some(rating),
            price,
            image: Some(image.to_string()),
            description: None,
            languages: languages.iter().map(|s| s.to_string()).collect(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Default guide dataset used when no persisted alternative exists.
pub fn default_guides() -> Vec<Guide> {
    vec![
        Guide::seed(
            1,
            "田中健太",
            "tokyo",
            4.8,
            8000,
            "/assets/img/guides/default-1.svg",
            &["ja", "en"],
            &["history", "culture"],
        ),
        Guide::seed(
            2,
            "佐藤美咲",
            "osaka",
            4.9,
            7500,
            "/assets/img/guides/default-2.svg",
            &["ja", "en", "zh"],
            &["food", "local"],
        ),
        Guide::seed(
            3,
            "鈴木一郎",
            "kyoto",
            4.7,
            9000,
            "/assets/img/guides/default-3.svg",
            &["ja", "en"],
            &["temples", "traditional"],
        ),
        Guide::seed(
            4,
            "山田花子",
            "osaka",
            4.6,
            7000,
            "/assets/img/guides/default-4.svg",
            &["ja", "en"],
            &["shopping", "food"],
        ),
        Guide::seed(
            5,
            "Johnson Mike",
            "tokyo",
            4.8,
            8500,
            "/assets/img/guides/default-5.svg",
            &["en", "ja"],
            &["business", "modern"],
        ),
        Guide::seed(
            6,
            "李美麗",
            "kyoto",
            4.9,
            8800,
            "/assets/img/guides/default-6.svg",
            &["zh", "ja", "en"],
            &["culture", "temples"],
        ),
        Guide::seed(
            7,
            "高橋翔太",
            "hokkaido",
            4.7,
            9500,
            "/assets/img/guides/default-7.svg",
            &["ja", "en"],
            &["nature", "skiing"],
        ),
        Guide::seed(
            8,
            "Anderson Sarah",
            "tokyo",
            4.8,
            8200,
            "/assets/img/guides/default-8.svg",
            &["en", "ja"],
            &["fashion", "youth"],
        ),
        Guide::seed(
            9,
            "中村由美",
            "fukuoka",
            4.6,
            7300,
            "/assets/img/guides/default-9.svg",
            &["ja", "ko"],
            &["food", "local"],
        ),
        Guide::seed(
            10,
            "Garcia Carlos",
            "osaka",
            4.7,
            7800,
            "/assets/img/guides/default-10.svg",
            &["es", "en", "ja"],
            &["nightlife", "entertainment"],
        ),
        Guide::seed(
            11,
            "伊藤真理",
            "hiroshima",
            4.8,
            8600,
            "/assets/img/guides/default-11.svg",
            &["ja", "en"],
            &["history", "peace"],
        ),
        Guide::seed(
            12,
            "Smith Robert",
            "kyoto",
            4.9,
            9200,
            "/assets/img/guides/default-12.svg",
            &["en", "ja"],
            &["zen", "meditation"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_list_has_twelve_guides() {
        let guides = default_guides();
        assert_eq!(guides.len(), 12);
        assert!(guides.iter().all(|g| !g.languages.is_empty()));
        assert!(guides.iter().all(|g| g.price >= 6000));
    }
}
