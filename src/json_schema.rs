//! JSON Schema generation for the document and CLI output types.
//!
//! Schemas are generated using the schemars crate and can be exported via the `schema` subcommand.

use schemars::{schema_for, Schema};
use std::collections::BTreeMap;

/// Returns every schema the `schema` subcommand can print.
/// Uses BTreeMap for deterministic ordering (important for diffable output).
pub fn all_schemas() -> BTreeMap<&'static str, Schema> {
    let mut schemas = BTreeMap::new();

    // the generated user list file itself
    schemas.insert("document", schema_for!(user_list_seeder::Document));

    // generate --json
    schemas.insert(
        "generate",
        schema_for!(crate::cmd::generate::GenerateJsonOutput),
    );

    // verify --json
    schemas.insert("verify", schema_for!(crate::cmd::verify::VerifyJsonOutput));

    schemas
}

/// Generate a single schema by name.
pub fn get_schema(name: &str) -> Option<Schema> {
    all_schemas().remove(name)
}

/// List all available schema names.
pub fn schema_names() -> Vec<&'static str> {
    all_schemas().keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names() {
        assert_eq!(schema_names(), vec!["document", "generate", "verify"]);
    }

    #[test]
    fn test_document_schema_requires_both_keys() {
        let schema = get_schema("document").unwrap();
        let value = serde_json::to_value(&schema).unwrap();
        let required = value["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("data")));
        assert!(required.contains(&serde_json::json!("config")));
    }

    #[test]
    fn test_unknown_schema() {
        assert!(get_schema("split").is_none());
    }
}
