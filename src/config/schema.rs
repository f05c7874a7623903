use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["crash_source", "notifier"],
        "properties": {
            "crash_source": {
                "type": "object",
                "required": ["app_id", "sdk_token"],
                "properties": {
                    "app_id": { "type": ["string", "integer"] },
                    "sdk_token": { "type": "string", "minLength": 1 },
                    "base_url": { "type": "string" },
                    "per_page": { "type": "integer", "minimum": 1, "maximum": 100 },
                    "symbolicated": { "type": "boolean" }
                }
            },
            "notifier": {
                "type": "object",
                "required": ["room_id", "room_token"],
                "properties": {
                    "room_id": { "type": ["string", "integer"] },
                    "room_token": { "type": "string", "minLength": 1 },
                    "base_url": { "type": "string" }
                }
            },
            "version_gate": {
                "type": "object",
                "required": ["itunes_app_id"],
                "properties": {
                    "itunes_app_id": { "type": ["string", "integer"] },
                    "base_url": { "type": "string" },
                    "match": { "type": "string", "enum": ["exact", "prefix"] }
                }
            },
            "thresholds": {
                "type": "array",
                "minItems": 1,
                "items": { "type": "integer", "minimum": 1 }
            },
            "cache_path": { "type": "string" },
            "flavor_path": { "type": "string" },
            "summary": { "type": "string", "enum": ["on_change", "always"] }
        }
    })
});
