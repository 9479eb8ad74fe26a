/// Price caption for guide cards: "¥8,000", or the consultation fallback
/// when no price is known.
pub fn format_price(price: Option<u32>) -> String {
    match price {
        Some(value) => format!("¥{}", thousands(value)),
        None => "料金応相談".to_string(),
    }
}

/// Rating caption: "★4.8" with the legacy default when absent.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(value) => format!("★{:.1}", value),
        None => "★4.8".to_string(),
    }
}

fn thousands(n: u32) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(8000)), "¥8,000");
        assert_eq!(format_price(Some(999)), "¥999");
        assert_eq!(format_price(Some(1234567)), "¥1,234,567");
        assert_eq!(format_price(None), "料金応相談");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(4.85)), "★4.9");
        assert_eq!(format_rating(None), "★4.8");
    }
}
