pub mod model_resolver;
pub mod name_normalizer;
pub mod operation_resolver;
pub mod type_resolver;

use crate::ir::{IrNamespace, Namespace, NamespaceSet};

pub use type_resolver::resolve_type;

/// Resolve one grouped namespace into generator-ready IR.
pub fn resolve_namespace(namespace: &Namespace) -> IrNamespace {
    let key = namespace.key.as_str();

    let models = namespace
        .models
        .iter()
        .map(|(dotted_name, schema)| model_resolver::resolve_model(dotted_name, schema, key))
        .collect();

    let operations = namespace
        .operations
        .iter()
        .map(|entry| operation_resolver::resolve_operation(entry, key))
        .collect();

    IrNamespace {
        key: key.to_string(),
        name: name_normalizer::namespace_name(key),
        models,
        operations,
    }
}

/// Resolve every namespace, preserving grouping order.
pub fn resolve_namespaces(set: &NamespaceSet) -> Vec<IrNamespace> {
    set.iter().map(resolve_namespace).collect()
}
