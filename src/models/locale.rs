use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// String ordering used for alphabetical lists on reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collation {
    /// Cyrillic before Latin, case-insensitive, `ё` sorts with `е`.
    #[default]
    Russian,
    /// Lowercased code point order.
    Binary,
}

impl Collation {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::Russian => russian_key(a)
                .cmp(&russian_key(b))
                .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
                .then_with(|| a.cmp(b)),
            Collation::Binary => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
        }
    }
}

fn russian_key(s: &str) -> Vec<(u8, char)> {
    s.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'ё' => (2, 'е'),
            'а'..='я' => (2, c),
            'a'..='z' => (3, c),
            '0'..='9' => (1, c),
            c if c.is_whitespace() => (0, ' '),
            c if c.is_alphabetic() => (4, c),
            _ => (0, c),
        })
        .collect()
}

/// Explicit language settings for name ordering and title matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    pub collation: Collation,
    pub administrator_keyword: String,
}

impl Locale {
    pub fn russian() -> Self {
        Locale {
            collation: Collation::Russian,
            administrator_keyword: "администратор".to_string(),
        }
    }

    pub fn english() -> Self {
        Locale {
            collation: Collation::Binary,
            administrator_keyword: "administrator".to_string(),
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "ru" | "ru-ru" | "ru_ru" => Some(Self::russian()),
            "en" | "en-us" | "en_us" | "en-gb" => Some(Self::english()),
            _ => None,
        }
    }

    pub fn with_administrator_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.administrator_keyword = keyword.into();
        self
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collation.compare(a, b)
    }

    /// Case-insensitive substring test against the administrator keyword.
    pub fn is_administrator_title(&self, title: &str) -> bool {
        let keyword = self.administrator_keyword.trim().to_lowercase();
        !keyword.is_empty() && title.to_lowercase().contains(&keyword)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::russian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(collation: Collation, names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| collation.compare(a, b));
        names
    }

    #[test]
    fn test_russian_collation_orders_cyrillic_alphabetically() {
        assert_eq!(
            sorted(Collation::Russian, &["Ярцев", "ёлкин", "Борисов", "Елисеев", "абрамов"]),
            vec!["абрамов", "Борисов", "Елисеев", "ёлкин", "Ярцев"]
        );
    }

    #[test]
    fn test_russian_collation_puts_cyrillic_before_latin() {
        assert_eq!(
            sorted(Collation::Russian, &["Smith", "Андреев", "brown"]),
            vec!["Андреев", "brown", "Smith"]
        );
    }

    #[test]
    fn test_binary_collation_ignores_case() {
        assert_eq!(
            sorted(Collation::Binary, &["bob", "Alice", "carol"]),
            vec!["Alice", "bob", "carol"]
        );
    }

    #[test]
    fn test_case_only_differences_put_uppercase_first() {
        assert_eq!(sorted(Collation::Binary, &["abc", "Abc"]), vec!["Abc", "abc"]);
        assert_eq!(sorted(Collation::Russian, &["abc", "Abc"]), vec!["Abc", "abc"]);
        assert_eq!(
            sorted(Collation::Russian, &["иванов", "Иванов"]),
            vec!["Иванов", "иванов"]
        );
    }

    #[test]
    fn test_administrator_title_match() {
        let locale = Locale::russian();
        assert!(locale.is_administrator_title("Старший АДМИНИСТРАТОР"));
        assert!(locale.is_administrator_title("администратор зала"));
        assert!(!locale.is_administrator_title("Охранник"));
        assert!(Locale::english().is_administrator_title("System Administrator"));
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("RU"), Some(Locale::russian()));
        assert_eq!(Locale::from_tag("en"), Some(Locale::english()));
        assert_eq!(Locale::from_tag("de"), None);
    }
}
