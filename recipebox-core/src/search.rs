//! Recipe search: wildcard translation and typed filter clauses.
//!
//! Search terms may contain `*` (any run of characters) and `?` (exactly one
//! character). Terms with wildcards become case-insensitive regular expressions
//! that must end on a word edge; plain terms fall back to case-insensitive
//! substring containment. Ingredient terms are matched against each ingredient
//! separately, so results don't depend on ingredient order. A [`RecipeFilter`] is a list of clauses that must all match.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::error::{FieldError, SearchError, ValidationErrors};
use crate::ingredients::ingredient_list;
use crate::types::{Difficulty, RecipeFields};
use crate::validation::{COOKING_TIME_MAX, COOKING_TIME_MIN};

/// Upper bound on a compiled search pattern, in bytes.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Returns true if `term` contains a `*` or `?` wildcard.
pub fn has_wildcards(term: &str) -> bool {
    term.contains(['*', '?'])
}

/// Translate a wildcard term into a regular expression.
///
/// The match may start anywhere in the field, like a plain substring search, but
/// must end at the end of the field or before a non-word character. That keeps
/// `pasta?` from matching "pastass" while `pasta*` still finds "Antipasta salad".
pub fn wildcard_to_regex(term: &str) -> String {
    let mut pattern = String::new();
    let mut literal = [0u8; 4];
    for c in term.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            _ => pattern.push_str(&regex::escape(c.encode_utf8(&mut literal))),
        }
    }
    pattern.push_str(r"(?:$|\W)");
    pattern
}

/// A compiled, case-insensitive text predicate for one search term.
#[derive(Debug, Clone)]
pub enum TextMatcher {
    /// Lowercased needle for plain substring containment
    Contains(String),
    Wildcard(Regex),
}

impl TextMatcher {
    /// Compile `term`. Returns `None` for a blank term, meaning "no filter".
    ///
    /// `field` is only used to report which input a bad pattern came from.
    pub fn new(term: &str, field: SearchField) -> Result<Option<Self>, SearchError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(None);
        }

        if !has_wildcards(term) {
            return Ok(Some(TextMatcher::Contains(term.to_lowercase())));
        }

        let pattern = wildcard_to_regex(term);
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|source| SearchError::InvalidPattern {
                field,
                pattern: term.to_string(),
                source,
            })?;
        Ok(Some(TextMatcher::Wildcard(regex)))
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            TextMatcher::Contains(needle) => haystack.to_lowercase().contains(needle.as_str()),
            TextMatcher::Wildcard(regex) => regex.is_match(haystack),
        }
    }
}

/// Which recipe field a text clause applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Ingredients,
}

impl SearchField {
    /// Name of the search form input this field is read from.
    pub fn input_name(&self) -> &'static str {
        match self {
            SearchField::Name => "recipe_name",
            SearchField::Ingredients => "ingredients",
        }
    }
}

#[derive(Debug, Clone)]
pub enum FilterClause {
    Text {
        field: SearchField,
        matcher: TextMatcher,
    },
    /// Cooking time at most this many minutes
    MaxCookingTime(i32),
    Difficulty(Difficulty),
}

impl FilterClause {
    pub fn matches<R: RecipeFields>(&self, recipe: &R) -> bool {
        match self {
            FilterClause::Text {
                field: SearchField::Name,
                matcher,
            } => matcher.is_match(recipe.name()),
            FilterClause::Text {
                field: SearchField::Ingredients,
                matcher,
            } => recipe
                .ingredient_list()
                .iter()
                .any(|ingredient| matcher.is_match(ingredient)),
            FilterClause::MaxCookingTime(max) => recipe.cooking_time() <= *max,
            FilterClause::Difficulty(difficulty) => recipe.difficulty() == *difficulty,
        }
    }
}

/// Filter clauses combined with logical AND. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    clauses: Vec<FilterClause>,
}

impl RecipeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, clause: FilterClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn matches<R: RecipeFields>(&self, recipe: &R) -> bool {
        self.clauses.iter().all(|clause| clause.matches(recipe))
    }

    /// Tightest cooking time limit in the filter, for pushing down into a query.
    pub fn max_cooking_time(&self) -> Option<i32> {
        self.clauses
            .iter()
            .filter_map(|clause| match clause {
                FilterClause::MaxCookingTime(max) => Some(*max),
                _ => None,
            })
            .min()
    }

    /// Required difficulty, for pushing down into a query.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.clauses.iter().find_map(|clause| match clause {
            FilterClause::Difficulty(difficulty) => Some(*difficulty),
            _ => None,
        })
    }

    pub fn has_text_clauses(&self) -> bool {
        self.clauses
            .iter()
            .any(|clause| matches!(clause, FilterClause::Text { .. }))
    }
}

/// User-supplied search criteria, before compilation into a [`RecipeFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub recipe_name: Option<String>,
    /// Comma-separated ingredient terms, all of which must match
    pub ingredients: Option<String>,
    pub cooking_time_max: Option<i32>,
    pub difficulty: Option<Difficulty>,
}

impl SearchCriteria {
    pub fn to_filter(&self) -> Result<RecipeFilter, SearchError> {
        let mut filter = RecipeFilter::new();

        if let Some(name) = self.recipe_name.as_deref() {
            if let Some(matcher) = TextMatcher::new(name, SearchField::Name)? {
                filter = filter.with(FilterClause::Text {
                    field: SearchField::Name,
                    matcher,
                });
            }
        }

        if let Some(ingredients) = self.ingredients.as_deref() {
            // ingredient_list already drops blank sub-terms
            for term in ingredient_list(ingredients) {
                if let Some(matcher) = TextMatcher::new(&term, SearchField::Ingredients)? {
                    filter = filter.with(FilterClause::Text {
                        field: SearchField::Ingredients,
                        matcher,
                    });
                }
            }
        }

        if let Some(max) = self.cooking_time_max {
            filter = filter.with(FilterClause::MaxCookingTime(max));
        }

        if let Some(difficulty) = self.difficulty {
            filter = filter.with(FilterClause::Difficulty(difficulty));
        }

        Ok(filter)
    }
}

/// Search form fields as submitted, before parsing.
///
/// Blank values mean "no filter". `chart_type` is carried through untouched for
/// report building.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchInput {
    #[serde(default)]
    pub recipe_name: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub cooking_time_max: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub chart_type: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl SearchInput {
    /// Parse the form into criteria, collecting every field error.
    pub fn criteria(&self) -> Result<SearchCriteria, ValidationErrors> {
        let mut errors = Vec::new();

        let cooking_time_max = match non_blank(&self.cooking_time_max) {
            None => None,
            Some(raw) => match raw.parse::<i64>() {
                Ok(t) if (COOKING_TIME_MIN..=COOKING_TIME_MAX).contains(&t) => Some(t as i32),
                Ok(_) => {
                    errors.push(FieldError::new(
                        "cooking_time_max",
                        format!(
                            "Ensure this value is between {} and {}.",
                            COOKING_TIME_MIN, COOKING_TIME_MAX
                        ),
                    ));
                    None
                }
                Err(_) => {
                    errors.push(FieldError::new("cooking_time_max", "Enter a whole number."));
                    None
                }
            },
        };

        let difficulty = match non_blank(&self.difficulty) {
            None => None,
            Some(raw) => match Difficulty::from_str(raw) {
                Some(d) => Some(d),
                None => {
                    errors.push(FieldError::new("difficulty", "Select a valid difficulty."));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        Ok(SearchCriteria {
            recipe_name: non_blank(&self.recipe_name).map(str::to_string),
            ingredients: non_blank(&self.ingredients).map(str::to_string),
            cooking_time_max,
            difficulty,
        })
    }

    /// The requested chart selector, if one was given.
    pub fn chart_selection(&self) -> Option<&str> {
        non_blank(&self.chart_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str);

    impl RecipeFields for Row {
        fn id(&self) -> i32 {
            1
        }
        fn name(&self) -> &str {
            "Salad"
        }
        fn ingredients(&self) -> &str {
            self.0
        }
        fn cooking_time(&self) -> i32 {
            5
        }
    }

    fn matcher(term: &str) -> TextMatcher {
        TextMatcher::new(term, SearchField::Name).unwrap().unwrap()
    }

    #[test]
    fn test_has_wildcards() {
        assert!(has_wildcards("pasta*"));
        assert!(has_wildcards("?asta"));
        assert!(!has_wildcards("pasta"));
    }

    #[test]
    fn test_star_matches_any_run() {
        let m = matcher("pasta*");
        assert!(m.is_match("pasta"));
        assert!(m.is_match("pastas"));
        assert!(m.is_match("pasta-bake"));
        assert!(m.is_match("Baked Pasta Primavera"));
    }

    #[test]
    fn test_question_mark_matches_exactly_one() {
        let m = matcher("pasta?");
        assert!(m.is_match("pastas"));
        assert!(m.is_match("Quick pastas tonight"));
        assert!(!m.is_match("pasta"));
        assert!(!m.is_match("pastass"));
    }

    #[test]
    fn test_wildcard_match_may_start_mid_word() {
        assert!(matcher("pasta*").is_match("Antipasta salad"));
        assert!(matcher("past*").is_match("Antipasta"));
        assert!(matcher("chee*").is_match("Mozzarellacheese"));
        assert!(matcher("?heese").is_match("Mozzarellacheese"));
    }

    #[test]
    fn test_wildcard_finds_at_least_what_plain_term_finds() {
        for haystack in ["Antipasta salad", "Pasta al Pesto", "pastas", "Baked pasta"] {
            assert!(matcher("pasta").is_match(haystack));
            assert!(matcher("pasta*").is_match(haystack), "{haystack}");
        }
    }

    #[test]
    fn test_ingredient_terms_match_single_ingredients() {
        let filter = SearchCriteria {
            ingredients: Some("tomato?".to_string()),
            ..Default::default()
        }
        .to_filter()
        .unwrap();

        let first = Row("tomato, cheese");
        let last = Row("cheese, tomato");
        let plural = Row("cheese, tomatos");
        assert!(!filter.matches(&first));
        assert!(!filter.matches(&last));
        assert!(filter.matches(&plural));
    }

    #[test]
    fn test_invalid_pattern_names_its_field() {
        let huge = format!("{}*", "a?".repeat(100_000));
        let err = SearchCriteria {
            ingredients: Some(huge),
            ..Default::default()
        }
        .to_filter()
        .unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidPattern {
                field: SearchField::Ingredients,
                ..
            }
        ));
        let errors = err.to_validation_errors();
        assert_eq!(errors.for_field("ingredients"), vec!["Enter a valid search term."]);
        assert!(!errors.has_field("recipe_name"));
    }

    #[test]
    fn test_plain_term_is_case_insensitive_substring() {
        let m = matcher("pasta");
        assert!(matches!(m, TextMatcher::Contains(_)));
        assert!(m.is_match("Pasta al Pesto"));
        assert!(m.is_match("antipasta"));
        assert!(!m.is_match("Risotto"));
    }

    #[test]
    fn test_wildcard_is_case_insensitive() {
        assert!(matcher("PAST?").is_match("pasta"));
        assert!(matcher("*pesto").is_match("Pasta al PESTO"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let m = matcher("1.5* (cups)");
        assert!(m.is_match("1.5 cups (cups)"));
        assert!(!m.is_match("125 cups (cups)"));
    }

    #[test]
    fn test_blank_term_is_no_filter() {
        assert!(TextMatcher::new("", SearchField::Name).unwrap().is_none());
        assert!(TextMatcher::new("   ", SearchField::Name).unwrap().is_none());
    }

    #[test]
    fn test_wildcard_to_regex_escapes() {
        assert_eq!(wildcard_to_regex("a*b?"), r"a.*b.(?:$|\W)");
        assert_eq!(wildcard_to_regex("a+b"), r"a\+b(?:$|\W)");
    }

    #[test]
    fn test_empty_criteria_make_empty_filter() {
        let filter = SearchCriteria::default().to_filter().unwrap();
        assert!(filter.is_empty());

        let filter = SearchCriteria {
            recipe_name: Some("  ".to_string()),
            ingredients: Some(" , ,".to_string()),
            ..Default::default()
        }
        .to_filter()
        .unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_criteria_build_one_clause_per_ingredient_term() {
        let filter = SearchCriteria {
            recipe_name: Some("soup".to_string()),
            ingredients: Some("tomato, , cheese".to_string()),
            cooking_time_max: Some(30),
            difficulty: Some(Difficulty::Hard),
        }
        .to_filter()
        .unwrap();

        assert_eq!(filter.clauses().len(), 5);
        assert!(filter.has_text_clauses());
        assert_eq!(filter.max_cooking_time(), Some(30));
        assert_eq!(filter.difficulty(), Some(Difficulty::Hard));
    }

    #[test]
    fn test_max_cooking_time_takes_tightest() {
        let filter = RecipeFilter::new()
            .with(FilterClause::MaxCookingTime(40))
            .with(FilterClause::MaxCookingTime(15));
        assert_eq!(filter.max_cooking_time(), Some(15));
    }

    #[test]
    fn test_search_input_blank_fields_are_unset() {
        let input = SearchInput {
            recipe_name: Some("  ".to_string()),
            cooking_time_max: Some("".to_string()),
            difficulty: Some("".to_string()),
            chart_type: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(input.criteria().unwrap(), SearchCriteria::default());
        assert_eq!(input.chart_selection(), None);
    }

    #[test]
    fn test_search_input_parses_fields() {
        let input = SearchInput {
            recipe_name: Some(" soup ".to_string()),
            ingredients: Some("tomato, basil".to_string()),
            cooking_time_max: Some("45".to_string()),
            difficulty: Some("Intermediate".to_string()),
            chart_type: Some("#2".to_string()),
        };
        let criteria = input.criteria().unwrap();
        assert_eq!(criteria.recipe_name.as_deref(), Some("soup"));
        assert_eq!(criteria.ingredients.as_deref(), Some("tomato, basil"));
        assert_eq!(criteria.cooking_time_max, Some(45));
        assert_eq!(criteria.difficulty, Some(Difficulty::Intermediate));
        assert_eq!(input.chart_selection(), Some("#2"));
    }

    #[test]
    fn test_search_input_reports_all_errors() {
        let input = SearchInput {
            cooking_time_max: Some("soon".to_string()),
            difficulty: Some("Impossible".to_string()),
            ..Default::default()
        };
        let errors = input.criteria().unwrap_err();
        assert_eq!(errors.for_field("cooking_time_max"), vec!["Enter a whole number."]);
        assert_eq!(errors.for_field("difficulty"), vec!["Select a valid difficulty."]);

        let input = SearchInput {
            cooking_time_max: Some("0".to_string()),
            ..Default::default()
        };
        let errors = input.criteria().unwrap_err();
        assert_eq!(
            errors.for_field("cooking_time_max"),
            vec!["Ensure this value is between 1 and 1440."]
        );
    }
}
