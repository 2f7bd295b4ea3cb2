pub mod cookbook_recipes;
pub mod suggest_recipes;
