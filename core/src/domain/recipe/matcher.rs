use crate::domain::recipe::entities::{RecipeCandidate, ScoredRecipe};

/// Fraction of a recipe's ingredients already on hand, as an integer 0-100.
///
/// Both counts being zero is undefined input from the external generator
/// and is guarded to 0.
pub fn match_percentage(used: usize, missing: usize) -> i32 {
    let denominator = used + missing;
    if denominator == 0 {
        return 0;
    }

    (100.0 * used as f64 / denominator as f64).round() as i32
}

/// Score generator candidates and rank them by descending match.
///
/// In cookbook mode (`personalized == false`) every candidate scores 0 by
/// design; the generator's order is preserved. Ties in personalized mode
/// also keep the generator's original relative order.
pub fn score_candidates(candidates: Vec<RecipeCandidate>, personalized: bool) -> Vec<ScoredRecipe> {
    let mut scored: Vec<ScoredRecipe> = candidates
        .into_iter()
        .map(|candidate| {
            let percentage = if personalized {
                match_percentage(
                    candidate.used_ingredients.len(),
                    candidate.missing_ingredients.len(),
                )
            } else {
                0
            };
            ScoredRecipe::from_candidate(candidate, percentage, personalized)
        })
        .collect();

    scored.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    scored
}

/// The subset of `required` present in the inventory, by case-insensitive
/// substring match of each required ingredient's first word against the
/// inventory item names. Usable offline with no external dependency.
pub fn available_ingredients(required: &[String], inventory_names: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|ingredient| {
            let first_word = ingredient
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_lowercase();
            if first_word.is_empty() {
                return false;
            }
            inventory_names
                .iter()
                .any(|name| name.to_lowercase().contains(&first_word))
        })
        .cloned()
        .collect()
}

/// Offline scorer over a static candidate set, used when the generator is
/// unavailable or unparsable.
pub fn score_against_inventory(
    candidates: Vec<RecipeCandidate>,
    inventory_names: &[String],
    personalized: bool,
) -> Vec<ScoredRecipe> {
    let mut scored: Vec<ScoredRecipe> = candidates
        .into_iter()
        .map(|candidate| {
            let percentage = if personalized {
                let available =
                    available_ingredients(&candidate.used_ingredients, inventory_names);
                match_percentage(available.len(), candidate.missing_ingredients.len())
            } else {
                0
            };
            ScoredRecipe::from_candidate(candidate, percentage, personalized)
        })
        .collect();

    scored.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, used: &[&str], missing: &[&str]) -> RecipeCandidate {
        RecipeCandidate {
            title: title.to_string(),
            used_ingredients: used.iter().map(|s| s.to_string()).collect(),
            missing_ingredients: missing.iter().map(|s| s.to_string()).collect(),
            time: "20 min".to_string(),
            calories: 350,
            instructions: vec!["Cook.".to_string()],
            dietary: Vec::new(),
        }
    }

    #[test]
    fn match_percentage_stays_in_range() {
        assert_eq!(match_percentage(0, 0), 0);
        assert_eq!(match_percentage(3, 0), 100);
        assert_eq!(match_percentage(0, 4), 0);
        assert_eq!(match_percentage(1, 2), 33);
        assert_eq!(match_percentage(2, 1), 67);

        for used in 0..20 {
            for missing in 0..20 {
                let pct = match_percentage(used, missing);
                assert!((0..=100).contains(&pct));
            }
        }
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let scored = score_candidates(
            vec![
                candidate("Forty", &["a", "b"], &["c", "d", "e"]),
                candidate("Eighty A", &["a", "b", "c", "d"], &["e"]),
                candidate("Eighty B", &["w", "x", "y", "z"], &["v"]),
            ],
            true,
        );

        let titles: Vec<&str> = scored.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Eighty A", "Eighty B", "Forty"]);
        assert_eq!(scored[0].match_percentage, 80);
        assert_eq!(scored[2].match_percentage, 40);
    }

    #[test]
    fn no_missing_ingredients_scores_one_hundred() {
        let scored = score_candidates(vec![candidate("Full", &["a", "b"], &[])], true);
        assert_eq!(scored[0].match_percentage, 100);
    }

    #[test]
    fn nothing_on_hand_scores_zero() {
        let scored = score_candidates(vec![candidate("None", &[], &["a", "b"])], true);
        assert_eq!(scored[0].match_percentage, 0);
    }

    #[test]
    fn both_lists_empty_is_guarded_to_zero() {
        let scored = score_candidates(vec![candidate("Empty", &[], &[])], true);
        assert_eq!(scored[0].match_percentage, 0);
    }

    #[test]
    fn cookbook_mode_scores_zero_and_keeps_order() {
        let scored = score_candidates(
            vec![
                candidate("First", &["a", "b", "c"], &[]),
                candidate("Second", &["a"], &["b", "c"]),
            ],
            false,
        );

        let titles: Vec<&str> = scored.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert!(scored.iter().all(|r| r.match_percentage == 0));
        assert!(scored.iter().all(|r| !r.personalized));
    }

    #[test]
    fn fallback_substring_match_is_case_insensitive_on_first_word() {
        let inventory = vec!["Milk".to_string(), "Eggs".to_string()];
        let required = vec!["Milk".to_string(), "Cheese".to_string()];

        let available = available_ingredients(&required, &inventory);
        assert_eq!(available, vec!["Milk".to_string()]);

        // "whole milk" matches nothing: the first word is "whole".
        let required = vec!["whole milk".to_string()];
        assert!(available_ingredients(&required, &inventory).is_empty());

        // "egg noodles" matches "Eggs" via substring on "egg".
        let required = vec!["egg noodles".to_string()];
        assert_eq!(
            available_ingredients(&required, &inventory),
            vec!["egg noodles".to_string()]
        );
    }

    #[test]
    fn fallback_scoring_scenario() {
        let inventory = vec!["Milk".to_string(), "Eggs".to_string()];
        let scored = score_against_inventory(
            vec![candidate("Omelette", &["Milk", "Cheese"], &["Cheese"])],
            &inventory,
            true,
        );

        // available = ["Milk"], missing = ["Cheese"] -> round(100 * 1/2).
        assert_eq!(scored[0].match_percentage, 50);
    }
}
