use minijinja::{Environment, context};
use tspgen_core::ir::IrNamespace;

use super::models::models_to_ctx;
use super::operations::operations_to_ctx;

/// Emit `<key>.tsp`: imports, the namespace declaration, models, and the
/// service interface when the namespace has operations.
pub fn emit_namespace(env: &Environment<'_>, ns: &IrNamespace) -> Result<String, minijinja::Error> {
    let tmpl = env.get_template("namespace.tsp.j2")?;
    tmpl.render(context! {
        name => ns.name.clone(),
        models => models_to_ctx(&ns.models),
        operations => operations_to_ctx(&ns.operations),
    })
}
