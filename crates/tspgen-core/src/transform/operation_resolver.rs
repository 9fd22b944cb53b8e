use log::debug;

use crate::ir::{IrOperation, IrParameter, IrParameterLocation, NamespaceOperation, TypeExpr};
use crate::parse::operation::Operation;
use crate::parse::parameter::{ParameterLocation, ParameterOrRef};
use crate::parse::response::ResponseOrRef;

use super::name_normalizer::operation_name;
use super::type_resolver::resolve_type;

const SUCCESS_STATUS: &str = "200";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Resolve an operation filed under `namespace`. Missing data falls back to
/// `unknown` names, `void` returns and optional parameters.
pub fn resolve_operation(entry: &NamespaceOperation, namespace: &str) -> IrOperation {
    let op = &entry.operation;
    IrOperation {
        name: operation_name(op.operation_id.as_deref()),
        method: entry.method,
        path: entry.path.clone(),
        parameters: resolve_parameters(op, namespace),
        return_type: resolve_return_type(op, namespace),
    }
}

fn resolve_parameters(op: &Operation, namespace: &str) -> Vec<IrParameter> {
    op.parameters
        .iter()
        .filter_map(|p| match p {
            ParameterOrRef::Parameter(param) => Some(IrParameter {
                name: param.name.clone(),
                location: match param.location {
                    ParameterLocation::Path => IrParameterLocation::Path,
                    ParameterLocation::Query => IrParameterLocation::Query,
                    ParameterLocation::Header => IrParameterLocation::Header,
                    ParameterLocation::Cookie => IrParameterLocation::Cookie,
                    ParameterLocation::Other => IrParameterLocation::Other,
                },
                param_type: param
                    .schema
                    .as_ref()
                    .map(|s| resolve_type(s, namespace))
                    .unwrap_or(TypeExpr::Unknown),
                required: param.required,
            }),
            ParameterOrRef::Ref { ref_path } => {
                debug!("skipping parameter reference {ref_path}");
                None
            }
        })
        .collect()
}

fn resolve_return_type(op: &Operation, namespace: &str) -> TypeExpr {
    let schema = match op.responses.get(SUCCESS_STATUS) {
        Some(ResponseOrRef::Response(response)) => response
            .content
            .get(JSON_CONTENT_TYPE)
            .and_then(|media| media.schema.as_ref()),
        _ => None,
    };
    schema
        .map(|s| resolve_type(s, namespace))
        .unwrap_or(TypeExpr::Void)
}
