use serde_json::json;

/// Returns the JSON schema for supplement recommendation LLM responses
pub fn get_recommendation_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recommendations": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "dosage": { "type": "string" },
                        "benefits": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "reasoning": { "type": "string" },
                        "precautions": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "confidence": { "type": "number" }
                    },
                    "required": [
                        "name", "dosage", "benefits",
                        "reasoning", "precautions", "confidence"
                    ]
                }
            },
            "summary": { "type": "string" },
            "disclaimer": { "type": "string" }
        },
        "required": ["recommendations", "summary", "disclaimer"]
    })
}
