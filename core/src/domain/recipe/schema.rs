use serde_json::json;

/// Response schema sent with every recipe-generation LLM call: a JSON array
/// of recipe candidates.
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "used_ingredients": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "missing_ingredients": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "time": { "type": "string" },
                "calories": { "type": "integer" },
                "instructions": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "dietary": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": [
                "title", "used_ingredients", "missing_ingredients",
                "time", "calories", "instructions"
            ]
        }
    })
}
