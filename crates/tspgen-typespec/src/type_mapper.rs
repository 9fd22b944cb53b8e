use tspgen_core::ir::TypeExpr;
use tspgen_core::parse::schema::SchemaOrRef;
use tspgen_core::transform::resolve_type;

/// Map a `TypeExpr` to its TypeSpec type string representation.
pub fn type_expr_to_tsp(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Int32 => "int32".to_string(),
        TypeExpr::Int64 => "int64".to_string(),
        TypeExpr::Float32 => "float32".to_string(),
        TypeExpr::Float64 => "float64".to_string(),
        TypeExpr::String => "string".to_string(),
        TypeExpr::Boolean => "boolean".to_string(),
        TypeExpr::Array(inner) => {
            let inner_tsp = type_expr_to_tsp(inner);
            format!("{inner_tsp}[]")
        }
        TypeExpr::Map(value_type) => {
            let value_tsp = type_expr_to_tsp(value_type);
            format!("Record<{value_tsp}>")
        }
        TypeExpr::UnknownMap => "Record<unknown>".to_string(),
        TypeExpr::Unknown => "unknown".to_string(),
        TypeExpr::Void => "void".to_string(),
        TypeExpr::Ref {
            namespace: Some(namespace),
            name,
        } => format!("{namespace}.{name}"),
        TypeExpr::Ref {
            namespace: None,
            name,
        } => name.clone(),
    }
}

/// Map a schema fragment straight to TypeSpec, relative to the namespace key
/// `namespace`.
pub fn map_type(schema: &SchemaOrRef, namespace: &str) -> String {
    type_expr_to_tsp(&resolve_type(schema, namespace))
}
