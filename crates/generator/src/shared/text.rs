use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Нормализует текст для сравнения: обрезка, нижний регистр, удаление диакритики.
///
/// Диакритика убирается через разложение NFKD и отбрасывание комбинируемых знаков,
/// поэтому "MÁX" и "max" дают одинаковый результат.
pub fn normalize_text(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Ключ сопоставления товара фида со строкой таблицы
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JoinKey(String);

impl JoinKey {
    pub fn from_name(name: &str) -> Self {
        Self(normalize_text(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for JoinKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Zapatilla Max "), "zapatilla max");
        assert_eq!(normalize_text("ZAPATILLA MÁX"), "zapatilla max");
        assert_eq!(normalize_text("Pingüino Ñandú"), "pinguino nandu");
        // e + combining acute accent
        assert_eq!(normalize_text("Cafe\u{0301}"), "cafe");
    }

    #[test]
    fn test_join_key_equality() {
        let feed = JoinKey::from_name("Zapatilla Max");
        assert_eq!(feed, JoinKey::from_name("zapatilla max"));
        assert_eq!(feed, JoinKey::from_name("ZAPATILLA MÁX"));
        assert_ne!(feed, JoinKey::from_name("Zapatilla  Max"));
        assert_ne!(feed, JoinKey::from_name("Zapatilla Max 2"));
    }

    #[test]
    fn test_blank_name_gives_empty_key() {
        assert!(JoinKey::from_name("   ").is_empty());
    }
}
