pub mod grouping;
pub mod operations;
pub mod schemas;
pub mod types;

pub use grouping::{Namespace, NamespaceOperation, NamespaceSet, group_namespaces};
pub use operations::*;
pub use schemas::*;
pub use types::IrNamespace;
