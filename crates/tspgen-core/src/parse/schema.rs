use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A JSON Schema `type` keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    /// Any keyword outside the set above (`null`, vendor extensions, typos).
    #[serde(other)]
    Unrecognized,
}

/// A reference or inline schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

impl SchemaOrRef {
    /// The inline schema, if this is not a reference.
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaOrRef::Schema(schema) => Some(schema),
            SchemaOrRef::Ref { .. } => None,
        }
    }
}

impl Default for SchemaOrRef {
    fn default() -> Self {
        SchemaOrRef::Schema(Box::default())
    }
}

/// The subset of a JSON Schema object used by the Riot API schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Object properties
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<AdditionalProperties>,

    // Array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaOrRef>>,

    // Enum values
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<serde_json::Value>>,
}

/// `additionalProperties` can be a boolean or a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<SchemaOrRef>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_wins_over_sibling_keys() {
        let parsed: SchemaOrRef = serde_json::from_str(
            r##"{"$ref": "#/components/schemas/account-v1.AccountDto", "description": "x"}"##,
        )
        .unwrap();
        assert_eq!(
            parsed,
            SchemaOrRef::Ref {
                ref_path: "#/components/schemas/account-v1.AccountDto".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_type_keyword() {
        let parsed: Schema = serde_json::from_str(r#"{"type": "null"}"#).unwrap();
        assert_eq!(parsed.schema_type, Some(SchemaType::Unrecognized));
    }

    #[test]
    fn test_property_order_preserved() {
        let parsed: Schema = serde_json::from_str(
            r#"{"type": "object", "properties": {"zeta": {"type": "string"}, "alpha": {"type": "integer"}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = parsed.properties.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn test_additional_properties_forms() {
        let as_bool: Schema =
            serde_json::from_str(r#"{"type": "object", "additionalProperties": true}"#).unwrap();
        assert_eq!(
            as_bool.additional_properties,
            Some(AdditionalProperties::Bool(true))
        );

        let as_schema: Schema = serde_json::from_str(
            r#"{"type": "object", "additionalProperties": {"type": "integer"}}"#,
        )
        .unwrap();
        assert!(matches!(
            as_schema.additional_properties,
            Some(AdditionalProperties::Schema(_))
        ));
    }

    #[test]
    fn test_empty_enum_is_still_an_enum() {
        let parsed: Schema = serde_json::from_str(r#"{"enum": []}"#).unwrap();
        assert_eq!(parsed.enum_values, Some(vec![]));
    }
}
