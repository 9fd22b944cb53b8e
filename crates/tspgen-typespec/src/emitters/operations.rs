use minijinja::{Value, context};
use tspgen_core::ir::{IrOperation, IrParameter, IrParameterLocation};

use crate::type_mapper::type_expr_to_tsp;

/// Template context for the operations of the `<Namespace>Service` interface.
pub(crate) fn operations_to_ctx(operations: &[IrOperation]) -> Vec<Value> {
    operations.iter().map(operation_to_ctx).collect()
}

fn operation_to_ctx(op: &IrOperation) -> Value {
    let params: Vec<String> = op.parameters.iter().map(render_parameter).collect();
    context! {
        name => op.name.clone(),
        path => op.path.clone(),
        method => op.method.as_lowercase(),
        params => params,
        return_type => type_expr_to_tsp(&op.return_type),
    }
}

/// Render one parameter. Only path and query parameters carry a location
/// decorator.
pub fn render_parameter(param: &IrParameter) -> String {
    let optional = if param.required { "" } else { "?" };
    let type_str = type_expr_to_tsp(&param.param_type);
    let decorator = match param.location {
        IrParameterLocation::Path => "@path ",
        IrParameterLocation::Query => "@query ",
        _ => "",
    };
    format!("{decorator}{}{optional}: {type_str}", param.name)
}
