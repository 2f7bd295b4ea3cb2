use crate::domain::recipe::entities::RecipeCandidate;

fn recipe(
    title: &str,
    used: &[&str],
    missing: &[&str],
    time: &str,
    calories: i32,
    instructions: &[&str],
    dietary: &[&str],
) -> RecipeCandidate {
    RecipeCandidate {
        title: title.to_string(),
        used_ingredients: used.iter().map(|s| s.to_string()).collect(),
        missing_ingredients: missing.iter().map(|s| s.to_string()).collect(),
        time: time.to_string(),
        calories,
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        dietary: dietary.iter().map(|s| s.to_string()).collect(),
    }
}

/// Built-in recipe catalog, served when the generator is unavailable.
/// Usable offline with no external dependency.
pub fn builtin_catalog() -> Vec<RecipeCandidate> {
    vec![
        recipe(
            "Vegetable Omelette",
            &["Eggs", "Milk", "Spinach"],
            &["Feta"],
            "15 min",
            320,
            &[
                "Whisk the eggs with a splash of milk.",
                "Wilt the spinach in a hot pan, pour in the eggs.",
                "Fold once set and crumble feta on top.",
            ],
            &["vegetarian"],
        ),
        recipe(
            "Creamy Mushroom Pasta",
            &["Pasta", "Mushrooms", "Cream", "Garlic"],
            &["Parmesan"],
            "25 min",
            540,
            &[
                "Cook the pasta until al dente.",
                "Fry mushrooms and garlic, add cream and reduce.",
                "Toss with the pasta and finish with parmesan.",
            ],
            &["vegetarian"],
        ),
        recipe(
            "Chicken Fried Rice",
            &["Rice", "Chicken", "Eggs", "Carrots"],
            &["Soy sauce", "Spring onion"],
            "20 min",
            480,
            &[
                "Dice and fry the chicken.",
                "Add cold rice, carrots and scrambled eggs.",
                "Season with soy sauce and top with spring onion.",
            ],
            &[],
        ),
        recipe(
            "Tomato Lentil Soup",
            &["Lentils", "Tomatoes", "Onion", "Garlic"],
            &["Vegetable stock"],
            "35 min",
            290,
            &[
                "Sweat the onion and garlic.",
                "Add lentils, tomatoes and stock.",
                "Simmer until the lentils are soft, then blend.",
            ],
            &["vegan"],
        ),
        recipe(
            "Yoghurt Berry Parfait",
            &["Yoghurt", "Berries", "Oats"],
            &["Honey"],
            "5 min",
            210,
            &[
                "Layer yoghurt, berries and oats in a glass.",
                "Drizzle with honey.",
            ],
            &["vegetarian"],
        ),
        recipe(
            "Pan-Seared Salmon with Greens",
            &["Salmon", "Lemon", "Spinach"],
            &["Olive oil"],
            "18 min",
            430,
            &[
                "Sear the salmon skin-side down.",
                "Dress the greens with lemon and oil.",
                "Serve the salmon over the greens.",
            ],
            &["pescatarian"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_entries_are_well_formed() {
        let catalog = builtin_catalog();
        assert!(!catalog.is_empty());
        for entry in catalog {
            assert!(!entry.title.trim().is_empty());
            assert!(!entry.used_ingredients.is_empty());
            assert!(!entry.instructions.is_empty());
        }
    }
}
