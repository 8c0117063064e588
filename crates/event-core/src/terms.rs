//! Term-list parsing shared by filter inputs, URL parameters and tag cells.

use indexmap::IndexSet;

/// Separator between terms in filter inputs and URL parameters.
pub const FILTER_SEPARATOR: &str = ",";

/// Separator between games in a tag cell.
pub const TAG_SEPARATOR: &str = " / ";

/// Split `input` on `separator`, yielding trimmed, non-empty tokens.
pub fn split_terms<'a>(input: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    input
        .split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Normalize a single term for matching.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parse `input` into an ordered set of lower-cased terms.
pub fn parse_term_list(input: &str, separator: &str) -> IndexSet<String> {
    split_terms(input, separator).map(normalize_term).collect()
}

/// Join terms back into a single parameter value.
pub fn join_terms<'a, I>(terms: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    terms
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(FILTER_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_input() {
        let terms = parse_term_list(" Tekken, STREET fighter ,,  ", FILTER_SEPARATOR);
        let terms: Vec<_> = terms.into_iter().collect();
        assert_eq!(terms, vec!["tekken", "street fighter"]);
    }

    #[test]
    fn test_parse_dedupes_preserving_order() {
        let terms = parse_term_list("tx,ca,TX", FILTER_SEPARATOR);
        let terms: Vec<_> = terms.iter().map(String::as_str).collect();
        assert_eq!(terms, vec!["tx", "ca"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_term_list("", FILTER_SEPARATOR).is_empty());
        assert!(parse_term_list(" , ", FILTER_SEPARATOR).is_empty());
    }

    #[test]
    fn test_split_tags_keeps_case() {
        let tags: Vec<_> = split_terms("Street Fighter 6 / Tekken 8", TAG_SEPARATOR).collect();
        assert_eq!(tags, vec!["Street Fighter 6", "Tekken 8"]);
    }

    #[test]
    fn test_tag_separator_needs_spaces() {
        let tags: Vec<_> = split_terms("Guilty Gear -Strive-/Tekken 8", TAG_SEPARATOR).collect();
        assert_eq!(tags, vec!["Guilty Gear -Strive-/Tekken 8"]);
    }

    #[test]
    fn test_join_terms() {
        let terms = parse_term_list("ca,tx", FILTER_SEPARATOR);
        assert_eq!(join_terms(&terms), "ca,tx");
    }
}
