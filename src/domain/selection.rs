//! Parsing of menu answers into a validated set of sites.
//!
//! Accepts a single number, a comma-separated list of numbers, the number of
//! the "all of the above" option, or the word "todos". Tokens that are not a
//! number in range are ignored; an answer with nothing valid left is an
//! error carrying the range the re-prompt should name.

use thiserror::Error;

use super::catalog::{SiteCatalog, SiteEntry};

/// Keyword that selects every site in the catalog.
pub const ALL_KEYWORD: &str = "todos";

/// Returned when a menu answer contains no valid choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no valid option in answer, expected a number between 1 and {max_option}")]
pub struct SelectionError {
    /// Highest accepted menu number (the "all" option).
    pub max_option: usize,
}

impl SelectionError {
    pub fn new(max_option: usize) -> Self {
        Self { max_option }
    }
}

/// Parses a menu answer against the catalog.
///
/// Returns the chosen entries deduplicated, in catalog order of first
/// mention so prompts read back naturally.
pub fn parse_selection<'a>(
    input: &str,
    catalog: &'a SiteCatalog,
) -> Result<Vec<&'a SiteEntry>, SelectionError> {
    let normalized = input.to_lowercase();
    let all_number = catalog.all_option_number();

    let tokens: Vec<&str> = normalized
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    // "todos" or the trailing menu number short-circuit to the full catalog.
    let picks_all = tokens
        .iter()
        .any(|t| *t == ALL_KEYWORD || t.parse::<usize>() == Ok(all_number));
    if picks_all {
        return Ok(catalog.iter().collect());
    }

    let mut selected: Vec<&SiteEntry> = Vec::new();
    for token in tokens {
        let Ok(number) = token.parse::<usize>() else {
            continue;
        };
        let Some(entry) = catalog.by_menu_number(number) else {
            continue;
        };
        if !selected.iter().any(|e| e.source_id == entry.source_id) {
            selected.push(entry);
        }
    }

    if selected.is_empty() {
        return Err(SelectionError::new(all_number));
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> &'static SiteCatalog {
        SiteCatalog::builtin()
    }

    #[test]
    fn single_number_selects_one_site() {
        let picked = parse_selection("2", catalog()).unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].display_name, "Gupy");
    }

    #[test]
    fn comma_separated_numbers_select_multiple_sites() {
        let picked = parse_selection("1, 3,8", catalog()).unwrap();
        let names: Vec<_> = picked.iter().map(|e| e.display_name.as_str()).collect();
        assert_eq!(names, vec!["LinkedIn", "Glassdoor", "Catho"]);
    }

    #[test]
    fn duplicates_collapse_to_one_entry() {
        let picked = parse_selection("1,1,2", catalog()).unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn all_keyword_selects_whole_catalog() {
        let picked = parse_selection("Todos", catalog()).unwrap();
        assert_eq!(picked.len(), catalog().len());
    }

    #[test]
    fn all_menu_number_selects_whole_catalog() {
        let picked = parse_selection("9", catalog()).unwrap();
        assert_eq!(picked.len(), catalog().len());
    }

    #[test]
    fn all_short_circuits_other_tokens() {
        let picked = parse_selection("99, todos, 1", catalog()).unwrap();
        assert_eq!(picked.len(), catalog().len());
    }

    #[test]
    fn out_of_range_number_is_invalid() {
        let err = parse_selection("99", catalog()).unwrap_err();
        assert_eq!(err.max_option, 9);
    }

    #[test]
    fn zero_is_invalid() {
        assert!(parse_selection("0", catalog()).is_err());
    }

    #[test]
    fn junk_tokens_are_ignored_when_a_valid_one_remains() {
        let picked = parse_selection("abc, 4, 99", catalog()).unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].display_name, "VAGAS");
    }

    #[test]
    fn pure_junk_is_invalid() {
        assert!(parse_selection("linkedin por favor", catalog()).is_err());
        assert!(parse_selection("", catalog()).is_err());
        assert!(parse_selection(" , ,", catalog()).is_err());
    }

    proptest! {
        #[test]
        fn every_in_range_number_selects_exactly_that_entry(n in 1usize..=8) {
            let picked = parse_selection(&n.to_string(), catalog()).unwrap();
            prop_assert_eq!(picked.len(), 1);
            prop_assert_eq!(&picked[0].source_id, &catalog().entries()[n - 1].source_id);
        }

        #[test]
        fn out_of_range_single_numbers_are_invalid(n in 10usize..1000) {
            prop_assert!(parse_selection(&n.to_string(), catalog()).is_err());
        }
    }
}
