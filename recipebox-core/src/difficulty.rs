use crate::ingredients::ingredient_count;
use crate::types::Difficulty;

/// Cooking times below this many minutes count as quick.
pub const QUICK_COOKING_TIME: i32 = 10;

/// Ingredient lists shorter than this count as short.
pub const SHORT_INGREDIENT_COUNT: usize = 4;

/// Classify a recipe by cooking time (minutes) and number of ingredients.
pub fn classify(cooking_time: i32, ingredient_count: usize) -> Difficulty {
    let quick = cooking_time < QUICK_COOKING_TIME;
    let short = ingredient_count < SHORT_INGREDIENT_COUNT;

    match (quick, short) {
        (true, true) => Difficulty::Easy,
        (true, false) => Difficulty::Medium,
        (false, true) => Difficulty::Intermediate,
        (false, false) => Difficulty::Hard,
    }
}

/// Classify using the raw comma-separated ingredients string.
pub fn difficulty_for(cooking_time: i32, ingredients: &str) -> Difficulty {
    classify(cooking_time, ingredient_count(ingredients))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_regions() {
        assert_eq!(classify(5, 3), Difficulty::Easy);
        assert_eq!(classify(8, 5), Difficulty::Medium);
        assert_eq!(classify(15, 2), Difficulty::Intermediate);
        assert_eq!(classify(20, 5), Difficulty::Hard);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(9, 3), Difficulty::Easy);
        assert_eq!(classify(9, 4), Difficulty::Medium);
        assert_eq!(classify(10, 3), Difficulty::Intermediate);
        assert_eq!(classify(10, 4), Difficulty::Hard);
    }

    #[test]
    fn test_exhaustive_against_table() {
        for time in -5..=40 {
            for count in 0..=10 {
                let expected = match (time < 10, count < 4) {
                    (true, true) => Difficulty::Easy,
                    (true, false) => Difficulty::Medium,
                    (false, true) => Difficulty::Intermediate,
                    (false, false) => Difficulty::Hard,
                };
                assert_eq!(classify(time, count), expected, "time={time} count={count}");
            }
        }
    }

    #[test]
    fn test_empty_segments_do_not_count() {
        assert_eq!(difficulty_for(25, "a, , b,,c"), Difficulty::Intermediate);
        assert_eq!(difficulty_for(25, "a,b,c,d"), Difficulty::Hard);
        assert_eq!(difficulty_for(5, ""), Difficulty::Easy);
    }
}
