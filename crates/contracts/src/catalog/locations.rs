//! Location code to display name mapping, merged into the catalog state at
//! startup.

/// All 47 prefectures plus the island areas shown in the location filter.
pub const LOCATION_NAMES: &[(&str, &str)] = &[
    ("hokkaido", "北海道"),
    ("aomori", "青森県"),
    ("iwate", "岩手県"),
    ("miyagi", "宮城県"),
    ("akita", "秋田県"),
    ("yamagata", "山形県"),
    ("fukushima", "福島県"),
    ("ibaraki", "茨城県"),
    ("tochigi", "栃木県"),
    ("gunma", "群馬県"),
    ("saitama", "埼玉県"),
    ("chiba", "千葉県"),
    ("tokyo", "東京都"),
    ("kanagawa", "神奈川県"),
    ("niigata", "新潟県"),
    ("toyama", "富山県"),
    ("ishikawa", "石川県"),
    ("fukui", "福井県"),
    ("yamanashi", "山梨県"),
    ("nagano", "長野県"),
    ("gifu", "岐阜県"),
    ("shizuoka", "静岡県"),
    ("aichi", "愛知県"),
    ("mie", "三重県"),
    ("shiga", "滋賀県"),
    ("kyoto", "京都府"),
    ("osaka", "大阪府"),
    ("hyogo", "兵庫県"),
    ("nara", "奈良県"),
    ("wakayama", "和歌山県"),
    ("tottori", "鳥取県"),
    ("shimane", "島根県"),
    ("okayama", "岡山県"),
    ("hiroshima", "広島県"),
    ("yamaguchi", "山口県"),
    ("tokushima", "徳島県"),
    ("kagawa", "香川県"),
    ("ehime", "愛媛県"),
    ("kochi", "高知県"),
    ("fukuoka", "福岡県"),
    ("saga", "佐賀県"),
    ("nagasaki", "長崎県"),
    ("kumamoto", "熊本県"),
    ("oita", "大分県"),
    ("miyazaki", "宮崎県"),
    ("kagoshima", "鹿児島県"),
    ("okinawa", "沖縄県"),
    ("ogasawara", "小笠原諸島"),
    ("izu", "伊豆諸島"),
    ("sado", "佐渡島"),
    ("awaji", "淡路島"),
    ("yakushima", "屋久島"),
    ("amami", "奄美大島"),
    ("ishigaki", "石垣島"),
    ("miyako", "宮古島"),
];

/// Resolve a location code to its display name; unknown codes fall back to
/// the code itself.
pub fn display_name(code: &str) -> &str {
    LOCATION_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(display_name("tokyo"), "東京都");
        assert_eq!(display_name("okinawa"), "沖縄県");
    }

    #[test]
    fn unknown_code_falls_back_to_code() {
        assert_eq!(display_name("atlantis"), "atlantis");
    }
}
