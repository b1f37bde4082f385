//! Ingredient list derivation.
//!
//! Recipes store their ingredients as a single comma-separated string. Everything
//! that needs individual ingredients (difficulty, search, reports) goes through here.

/// Split a comma-separated ingredients string into trimmed, non-empty entries.
///
/// Order is preserved. Empty or whitespace-only input yields an empty list.
pub fn ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of entries [`ingredient_list`] would return, without allocating them.
pub fn ingredient_count(raw: &str) -> usize {
    raw.split(',').filter(|s| !s.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_list() {
        assert_eq!(
            ingredient_list("Ingredient1, Ingredient2"),
            vec!["Ingredient1", "Ingredient2"]
        );
    }

    #[test]
    fn test_strips_embedded_empty_segments() {
        assert_eq!(ingredient_list("a, , b,  ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trims_outer_whitespace() {
        assert_eq!(
            ingredient_list("  Ingredient1 , Ingredient2  "),
            vec!["Ingredient1", "Ingredient2"]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(ingredient_list("").is_empty());
        assert!(ingredient_list("   ").is_empty());
        assert!(ingredient_list(" , ,, ").is_empty());
    }

    #[test]
    fn test_single_ingredient_keeps_inner_spaces() {
        assert_eq!(
            ingredient_list("Single Ingredient"),
            vec!["Single Ingredient"]
        );
    }

    #[test]
    fn test_rederiving_is_idempotent() {
        let first = ingredient_list(" flour ,, sugar , ,eggs,");
        let second = ingredient_list(&first.join(", "));
        assert_eq!(first, second);
        assert_eq!(second, vec!["flour", "sugar", "eggs"]);
    }

    #[test]
    fn test_count_matches_list() {
        for raw in ["", "a", "a, , b,  ,c", "x,y,z,w", " , "] {
            assert_eq!(ingredient_count(raw), ingredient_list(raw).len(), "{raw:?}");
        }
    }
}
