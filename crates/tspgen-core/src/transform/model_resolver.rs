use crate::ir::{IrEnum, IrField, IrModel, IrModelKind};
use crate::parse::schema::{Schema, SchemaOrRef, SchemaType};

use super::name_normalizer::model_name;
use super::type_resolver::resolve_type;

/// Resolve one component schema of `namespace` into an `IrModel`.
///
/// Records win over enumerations: a fragment with `properties` or
/// `type: object` is a record even if it also lists `enum` values.
pub fn resolve_model(dotted_name: &str, schema_or_ref: &SchemaOrRef, namespace: &str) -> IrModel {
    let kind = match schema_or_ref.as_schema() {
        Some(schema) if is_record(schema) => IrModelKind::Record(resolve_fields(schema, namespace)),
        Some(Schema {
            enum_values: Some(values),
            schema_type,
            ..
        }) => IrModelKind::Enum(IrEnum {
            string_typed: *schema_type == Some(SchemaType::String),
            values: values.clone(),
        }),
        _ => IrModelKind::Alias(resolve_type(schema_or_ref, namespace)),
    };

    IrModel {
        name: model_name(dotted_name, namespace),
        kind,
    }
}

fn is_record(schema: &Schema) -> bool {
    schema.schema_type == Some(SchemaType::Object) || !schema.properties.is_empty()
}

fn resolve_fields(schema: &Schema, namespace: &str) -> Vec<IrField> {
    schema
        .properties
        .iter()
        .map(|(name, prop)| IrField {
            name: name.clone(),
            field_type: resolve_type(prop, namespace),
            required: schema.required.contains(name),
        })
        .collect()
}
