pub mod chart;
pub mod difficulty;
pub mod error;
pub mod ingredients;
pub mod report;
pub mod search;
pub mod types;
pub mod validation;

pub use chart::{parse_chart_selection, render_chart, Chart, ChartType, LegendEntry};
pub use difficulty::{classify, difficulty_for};
pub use error::{ChartError, FieldError, SearchError, ValidationErrors};
pub use ingredients::{ingredient_count, ingredient_list};
pub use report::{build_report, RecipeTable, Report, TableRow};
pub use search::{
    FilterClause, RecipeFilter, SearchCriteria, SearchField, SearchInput, TextMatcher,
};
pub use types::{Difficulty, RecipeFields};
pub use validation::{prepare_recipe, PreparedRecipe, RecipeInput};

/// Image shown for recipes that were saved without one.
pub const DEFAULT_IMAGE: &str = "no_picture.png";
