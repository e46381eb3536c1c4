//! Search term normalization.

/// Trim `term` and title-case it.
///
/// A character is lowercased when the character before it is cased (has an
/// upper/lower form) and uppercased otherwise, so `"new york"` and
/// `"NEW YORK"` both become `"New York"`. Returns `None` when nothing is
/// left after trimming.
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(trimmed.len());
    let mut after_cased = false;
    for ch in trimmed.chars() {
        if after_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        after_cased = ch.is_lowercase() || ch.is_uppercase();
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_title_cases() {
        assert_eq!(normalize_term("  paris ").as_deref(), Some("Paris"));
        assert_eq!(normalize_term("NEW YORK").as_deref(), Some("New York"));
        assert_eq!(normalize_term("rio de janeiro").as_deref(), Some("Rio De Janeiro"));
    }

    #[test]
    fn test_non_letters_start_new_words() {
        assert_eq!(normalize_term("winston-salem").as_deref(), Some("Winston-Salem"));
        assert_eq!(normalize_term("l'aquila").as_deref(), Some("L'Aquila"));
        assert_eq!(normalize_term("21st street").as_deref(), Some("21St Street"));
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(normalize_term("ÅRHUS").as_deref(), Some("Århus"));
        assert_eq!(normalize_term("münchen").as_deref(), Some("München"));
    }

    #[test]
    fn test_uncased_letters_start_new_words() {
        assert_eq!(normalize_term("東a").as_deref(), Some("東A"));
        assert_eq!(normalize_term("東京 tower").as_deref(), Some("東京 Tower"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_term(""), None);
        assert_eq!(normalize_term(" \t\n"), None);
    }
}
