use serde_json::json;

/// Response schema sent with every receipt-parsing LLM call: a JSON array of
/// `{name, category, quantity, confidence}` records.
pub fn get_receipt_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "category": {
                    "type": "string",
                    "enum": ["Produce", "Dairy", "Pantry", "Meat", "Other"]
                },
                "quantity": { "type": "string" },
                "confidence": { "type": "number" }
            },
            "required": ["name", "category"]
        }
    })
}
