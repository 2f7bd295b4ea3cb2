use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One candidate from the recipe generator. Treated as immutable input to
/// the matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeCandidate {
    pub title: String,
    pub used_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub time: String,
    pub calories: i32,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub dietary: Vec<String>,
}

/// A candidate plus its computed match. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoredRecipe {
    pub title: String,
    pub used_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub time: String,
    pub calories: i32,
    pub instructions: Vec<String>,
    pub dietary: Vec<String>,
    /// Integer 0-100: fraction of the recipe's ingredients already on hand.
    pub match_percentage: i32,
    /// False in cookbook mode, where the zero match signals "no inventory
    /// context" rather than a bad recipe.
    pub personalized: bool,
    pub image: String,
}

impl ScoredRecipe {
    pub fn from_candidate(
        candidate: RecipeCandidate,
        match_percentage: i32,
        personalized: bool,
    ) -> Self {
        let image = image_key(&candidate.title);

        Self {
            title: candidate.title,
            used_ingredients: candidate.used_ingredients,
            missing_ingredients: candidate.missing_ingredients,
            time: candidate.time,
            calories: candidate.calories,
            instructions: candidate.instructions,
            dietary: candidate.dietary,
            match_percentage,
            personalized,
            image,
        }
    }
}

/// Derive a stable image key from a recipe title.
fn image_key(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    format!("{slug}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_key_slugifies_titles() {
        assert_eq!(image_key("Creamy Mushroom Pasta"), "creamy-mushroom-pasta.jpg");
        assert_eq!(image_key("Chef's 5-Minute Salad!"), "chef-s-5-minute-salad.jpg");
        assert_eq!(image_key("  Soup  "), "soup.jpg");
    }
}
