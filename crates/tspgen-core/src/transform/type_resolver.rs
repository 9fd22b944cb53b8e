use crate::ir::TypeExpr;
use crate::parse::schema::{AdditionalProperties, Schema, SchemaOrRef, SchemaType};

use super::name_normalizer::{namespace_name, ref_target};

/// The shape of a schema fragment as far as type mapping is concerned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaShape<'a> {
    /// `$ref` to a component, by component name.
    Reference(&'a str),
    Scalar {
        kind: ScalarKind,
        format: Option<&'a str>,
    },
    /// `type: array`; items may be missing.
    Array(Option<&'a SchemaOrRef>),
    /// `type: object` with `additionalProperties`.
    Map(&'a AdditionalProperties),
    /// `type: object` with nothing describing its values.
    GenericObject,
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Integer,
    Number,
    String,
    Boolean,
}

/// Classify a fragment. References win over everything else, then the `type`
/// keyword decides.
pub fn classify(schema_or_ref: &SchemaOrRef) -> SchemaShape<'_> {
    match schema_or_ref {
        SchemaOrRef::Ref { ref_path } => SchemaShape::Reference(ref_target(ref_path)),
        SchemaOrRef::Schema(schema) => classify_schema(schema),
    }
}

fn classify_schema(schema: &Schema) -> SchemaShape<'_> {
    let format = schema.format.as_deref();
    let scalar = |kind| SchemaShape::Scalar { kind, format };
    match schema.schema_type {
        Some(SchemaType::Integer) => scalar(ScalarKind::Integer),
        Some(SchemaType::Number) => scalar(ScalarKind::Number),
        Some(SchemaType::String) => scalar(ScalarKind::String),
        Some(SchemaType::Boolean) => scalar(ScalarKind::Boolean),
        Some(SchemaType::Array) => SchemaShape::Array(schema.items.as_deref()),
        Some(SchemaType::Object) => match schema.additional_properties {
            Some(ref additional) => SchemaShape::Map(additional),
            None => SchemaShape::GenericObject,
        },
        Some(SchemaType::Unrecognized) | None => SchemaShape::Unrecognized,
    }
}

/// Resolve a fragment to a `TypeExpr` relative to the namespace `current`.
///
/// Never fails: shapes with no precise mapping become `TypeExpr::Unknown`.
pub fn resolve_type(schema_or_ref: &SchemaOrRef, current: &str) -> TypeExpr {
    match classify(schema_or_ref) {
        SchemaShape::Reference(target) => resolve_reference(target, current),
        SchemaShape::Scalar { kind, format } => resolve_scalar(kind, format),
        SchemaShape::Array(items) => resolve_array(items, current),
        SchemaShape::Map(additional) => resolve_map(additional, current),
        SchemaShape::GenericObject => TypeExpr::UnknownMap,
        SchemaShape::Unrecognized => TypeExpr::Unknown,
    }
}

/// Split a dotted component name on its first dot. Same-namespace targets
/// become bare names; others are qualified with the capitalized namespace.
fn resolve_reference(target: &str, current: &str) -> TypeExpr {
    match target.split_once('.') {
        Some((namespace, model)) if namespace == current => TypeExpr::local(model),
        Some((namespace, model)) => TypeExpr::qualified(namespace_name(namespace), model),
        None => TypeExpr::local(target),
    }
}

fn resolve_scalar(kind: ScalarKind, format: Option<&str>) -> TypeExpr {
    match (kind, format) {
        (ScalarKind::Integer, Some("int64")) => TypeExpr::Int64,
        (ScalarKind::Integer, _) => TypeExpr::Int32,
        (ScalarKind::Number, Some("double")) => TypeExpr::Float64,
        (ScalarKind::Number, _) => TypeExpr::Float32,
        (ScalarKind::String, _) => TypeExpr::String,
        (ScalarKind::Boolean, _) => TypeExpr::Boolean,
    }
}

fn resolve_array(items: Option<&SchemaOrRef>, current: &str) -> TypeExpr {
    let item_type = match items {
        Some(items) => resolve_type(items, current),
        None => TypeExpr::Unknown,
    };
    TypeExpr::Array(Box::new(item_type))
}

fn resolve_map(additional: &AdditionalProperties, current: &str) -> TypeExpr {
    match additional {
        AdditionalProperties::Schema(value) => {
            TypeExpr::Map(Box::new(resolve_type(value, current)))
        }
        AdditionalProperties::Bool(_) => TypeExpr::UnknownMap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(json: &str) -> SchemaOrRef {
        serde_json::from_str(json).unwrap()
    }

    fn resolve(json: &str, current: &str) -> TypeExpr {
        resolve_type(&fragment(json), current)
    }

    #[test]
    fn test_same_namespace_ref_is_bare() {
        assert_eq!(
            resolve(
                r##"{"$ref": "#/components/schemas/account-v1.AccountDto"}"##,
                "account-v1"
            ),
            TypeExpr::local("AccountDto")
        );
    }

    #[test]
    fn test_cross_namespace_ref_is_qualified() {
        assert_eq!(
            resolve(
                r##"{"$ref": "#/components/schemas/lol-status-v4.ContentDto"}"##,
                "account-v1"
            ),
            TypeExpr::qualified("LolStatusV4", "ContentDto")
        );
    }

    #[test]
    fn test_ref_keeps_inner_dots() {
        assert_eq!(
            resolve(r##"{"$ref": "#/components/schemas/match-v5.Info.Team"}"##, "match-v5"),
            TypeExpr::local("Info.Team")
        );
        assert_eq!(
            resolve(r##"{"$ref": "#/components/schemas/match-v5.Info.Team"}"##, "a-v1"),
            TypeExpr::qualified("MatchV5", "Info.Team")
        );
    }

    #[test]
    fn test_undotted_ref_is_verbatim() {
        assert_eq!(
            resolve(r##"{"$ref": "#/components/schemas/Error"}"##, "account-v1"),
            TypeExpr::local("Error")
        );
    }

    #[test]
    fn test_ref_to_namespace_with_shared_prefix() {
        // `account-v1x` is not `account-v1`.
        assert_eq!(
            resolve(r##"{"$ref": "#/components/schemas/account-v1x.Dto"}"##, "account-v1"),
            TypeExpr::qualified("AccountV1x", "Dto")
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(resolve(r#"{"type": "integer"}"#, "a"), TypeExpr::Int32);
        assert_eq!(
            resolve(r#"{"type": "integer", "format": "int32"}"#, "a"),
            TypeExpr::Int32
        );
        assert_eq!(
            resolve(r#"{"type": "integer", "format": "int64"}"#, "a"),
            TypeExpr::Int64
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(resolve(r#"{"type": "number"}"#, "a"), TypeExpr::Float32);
        assert_eq!(
            resolve(r#"{"type": "number", "format": "float"}"#, "a"),
            TypeExpr::Float32
        );
        assert_eq!(
            resolve(r#"{"type": "number", "format": "double"}"#, "a"),
            TypeExpr::Float64
        );
    }

    #[test]
    fn test_string_and_boolean() {
        assert_eq!(resolve(r#"{"type": "string"}"#, "a"), TypeExpr::String);
        assert_eq!(
            resolve(r#"{"type": "string", "enum": ["A", "B"]}"#, "a"),
            TypeExpr::String
        );
        assert_eq!(resolve(r#"{"type": "boolean"}"#, "a"), TypeExpr::Boolean);
    }

    #[test]
    fn test_nested_arrays() {
        assert_eq!(
            resolve(
                r#"{"type": "array", "items": {"type": "array", "items": {"type": "integer"}}}"#,
                "a"
            ),
            TypeExpr::Array(Box::new(TypeExpr::Array(Box::new(TypeExpr::Int32))))
        );
    }

    #[test]
    fn test_array_without_items() {
        assert_eq!(
            resolve(r#"{"type": "array"}"#, "a"),
            TypeExpr::Array(Box::new(TypeExpr::Unknown))
        );
    }

    #[test]
    fn test_maps() {
        assert_eq!(
            resolve(
                r##"{"type": "object", "additionalProperties": {"$ref": "#/components/schemas/b-v1.Bar"}}"##,
                "a-v1"
            ),
            TypeExpr::Map(Box::new(TypeExpr::qualified("BV1", "Bar")))
        );
        assert_eq!(
            resolve(r#"{"type": "object", "additionalProperties": true}"#, "a"),
            TypeExpr::UnknownMap
        );
        assert_eq!(resolve(r#"{"type": "object"}"#, "a"), TypeExpr::UnknownMap);
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(resolve(r#"{}"#, "a"), TypeExpr::Unknown);
        assert_eq!(resolve(r#"{"type": "null"}"#, "a"), TypeExpr::Unknown);
        assert_eq!(
            resolve(r#"{"properties": {"x": {"type": "string"}}}"#, "a"),
            TypeExpr::Unknown
        );
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify(&fragment(r#"{"type": "integer", "format": "int64"}"#)),
            SchemaShape::Scalar {
                kind: ScalarKind::Integer,
                format: Some("int64")
            }
        );
        assert_eq!(
            classify(&fragment(r#"{"type": "object"}"#)),
            SchemaShape::GenericObject
        );
        assert_eq!(classify(&fragment(r#"{"enum": [1]}"#)), SchemaShape::Unrecognized);
    }
}
