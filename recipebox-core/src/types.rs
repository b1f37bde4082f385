use serde::{Deserialize, Serialize};

use crate::difficulty::difficulty_for;
use crate::ingredients::ingredient_list;

/// Difficulty label derived from cooking time and ingredient count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Intermediate,
    Hard,
}

impl Difficulty {
    /// All labels, easiest first
    pub const ALL: &'static [Difficulty] = &[
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Intermediate,
        Difficulty::Hard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Intermediate" => Some(Difficulty::Intermediate),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to the recipe fields that search and reporting work on.
///
/// Storage models implement the four accessors; difficulty and the ingredient
/// list are always derived from them so they can't drift from the stored inputs.
pub trait RecipeFields {
    fn id(&self) -> i32;
    fn name(&self) -> &str;
    fn ingredients(&self) -> &str;
    fn cooking_time(&self) -> i32;

    fn ingredient_list(&self) -> Vec<String> {
        ingredient_list(self.ingredients())
    }

    fn difficulty(&self) -> Difficulty {
        difficulty_for(self.cooking_time(), self.ingredients())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trips_through_label() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(difficulty.as_str()), Some(*difficulty));
        }
    }

    #[test]
    fn test_difficulty_labels_are_case_sensitive() {
        assert_eq!(Difficulty::from_str("easy"), None);
        assert_eq!(Difficulty::from_str(""), None);
    }

    #[test]
    fn test_difficulty_serializes_as_label() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, "\"Intermediate\"");
    }
}
