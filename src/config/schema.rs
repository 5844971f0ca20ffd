use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "repositories_file": { "type": "string", "minLength": 1 },
            "source": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "kind": { "type": "string", "enum": ["simulated", "github"] },
                    "api_base_url": { "type": "string", "format": "uri" },
                    "token": { "type": "string" }
                }
            },
            "output": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "directory": { "type": "string" },
                    "security_json": { "$ref": "#/$defs/file_name" },
                    "security_markdown": { "$ref": "#/$defs/file_name" },
                    "performance_markdown": { "$ref": "#/$defs/file_name" },
                    "cost_markdown": { "$ref": "#/$defs/file_name" }
                }
            }
        },
        "$defs": {
            "file_name": { "type": "string", "minLength": 1 }
        }
    })
});
