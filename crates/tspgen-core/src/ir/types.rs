use super::operations::IrOperation;
use super::schemas::IrModel;

/// A fully resolved, generator-ready namespace.
#[derive(Debug, Clone)]
pub struct IrNamespace {
    /// Dashed key from the schema, e.g. `lol-status-v4`.
    pub key: String,
    /// Capitalized form used as the TypeSpec namespace, e.g. `LolStatusV4`.
    pub name: String,
    pub models: Vec<IrModel>,
    pub operations: Vec<IrOperation>,
}

impl IrNamespace {
    pub fn has_operations(&self) -> bool {
        !self.operations.is_empty()
    }
}
