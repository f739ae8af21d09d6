//! Address search term validation

use super::ValidationError;

/// Minimum length of an autocomplete query, in characters
pub const MIN_SEARCH_LEN: usize = 2;

/// Validated address search term.
///
/// Length is counted in characters, not bytes, so `"ÉÉ"` is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() < MIN_SEARCH_LEN {
            return Err(ValidationError::TooShort {
                field: "q",
                min: MIN_SEARCH_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Build a `LIKE` pattern matching `needle` anywhere.
///
/// `%`, `_` and `\` are escaped. Case is left alone: queries fold both
/// sides with the database's own `LOWER`, i.e.
/// `LOWER(column) LIKE LOWER(pattern) ESCAPE '\'`, so the column and the
/// needle always get the same folding rules.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_terms() {
        assert!(matches!(
            SearchTerm::new("").unwrap_err(),
            ValidationError::TooShort { field: "q", min: 2 }
        ));
        assert!(SearchTerm::new("m").is_err());
    }

    #[test]
    fn accepts_two_characters() {
        assert_eq!(SearchTerm::new("ma").unwrap().as_str(), "ma");
    }

    #[test]
    fn counts_characters_not_bytes() {
        // one char, two bytes
        assert!(SearchTerm::new("é").is_err());
        assert!(SearchTerm::new("éé").is_ok());
    }

    #[test]
    fn pattern_keeps_case_and_wraps() {
        assert_eq!(contains_pattern("Main St"), "%Main St%");
        assert_eq!(contains_pattern("École"), "%École%");
    }

    #[test]
    fn pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }
}
