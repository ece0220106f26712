// src/core/sanitize.rs

/// File stem for a query: every non-alphanumeric char becomes '-', then lowercase.
pub fn slug(query: &str) -> String {
    query
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

/// Last space-separated word; the whole string when there is no space.
pub fn last_word(s: &str) -> &str {
    s.rsplit(' ').next().unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_replaces_every_non_alnum() {
        assert_eq!(slug("Heart Failure (CHF)"), "heart-failure--chf-");
        assert_eq!(slug("café"), "caf-");
        assert_eq!(slug(""), "");
    }

    #[test]
    fn last_word_of_title() {
        assert_eq!(last_word("Cardiology Intro Smith"), "Smith");
        assert_eq!(last_word("Smith"), "Smith");
        assert_eq!(last_word("trailing "), "");
    }
}
