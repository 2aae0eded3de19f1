use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

/// Build a join key: trimmed, single-spaced, accent-free, uppercase.
///
/// Keys are never shown to users. Null input yields an empty key.
pub fn normalize_text(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let collapsed = value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let stripped: String = collapsed
        .nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect();
    stripped.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_spaces_case() {
        assert_eq!(normalize_text(Some(" Café  NOVO ")), "CAFE NOVO");
        assert_eq!(normalize_text(Some("Recapagem\t1ª")), "RECAPAGEM 1A");
        assert_eq!(normalize_text(Some("novo")), "NOVO");
    }

    #[test]
    fn test_empty_and_null() {
        assert_eq!(normalize_text(None), "");
        assert_eq!(normalize_text(Some("   ")), "");
    }
}
