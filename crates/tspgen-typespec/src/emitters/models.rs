use minijinja::{Value, context};
use tspgen_core::ir::{IrEnum, IrField, IrModel, IrModelKind};
use tspgen_core::transform::name_normalizer::is_identifier;

use crate::type_mapper::type_expr_to_tsp;

/// Template context for `models.tsp.j2`, which renders each declaration
/// followed by a blank line.
pub(crate) fn models_to_ctx(models: &[IrModel]) -> Vec<Value> {
    models.iter().map(model_to_ctx).collect()
}

fn model_to_ctx(model: &IrModel) -> Value {
    match &model.kind {
        IrModelKind::Record(fields) => {
            let fields: Vec<Value> = fields.iter().map(field_to_ctx).collect();
            context! {
                kind => "record",
                name => model.name.clone(),
                fields => fields,
            }
        }
        IrModelKind::Enum(e) => context! {
            kind => "enum",
            name => model.name.clone(),
            members => enum_members(e),
        },
        IrModelKind::Alias(target) => context! {
            kind => "alias",
            name => model.name.clone(),
            target => type_expr_to_tsp(target),
        },
    }
}

fn field_to_ctx(field: &IrField) -> Value {
    context! {
        name => property_name(&field.name),
        optional => !field.required,
        type_str => type_expr_to_tsp(&field.field_type),
    }
}

/// Quote property names that are not plain identifiers.
pub fn property_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("\"{name}\"")
    }
}

/// Member lines for an enum: bare values for string enums, `Value_<lit>: <lit>`
/// for everything else.
pub fn enum_members(e: &IrEnum) -> Vec<String> {
    e.values
        .iter()
        .map(|value| {
            let literal = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if e.string_typed {
                literal
            } else {
                format!("Value_{literal}: {literal}")
            }
        })
        .collect()
}
