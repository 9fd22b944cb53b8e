/// A resolved type reference.
///
/// References are already qualified relative to the namespace the type was
/// resolved in: `namespace` is `None` for same-namespace references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    Boolean,
    Array(Box<TypeExpr>),
    Map(Box<TypeExpr>), // Record<T>
    UnknownMap,         // untyped object
    Unknown,
    Void,
    Ref {
        namespace: Option<String>,
        name: String,
    },
}

impl TypeExpr {
    /// Reference to a model in the namespace being generated.
    pub fn local(name: impl Into<String>) -> Self {
        TypeExpr::Ref {
            namespace: None,
            name: name.into(),
        }
    }

    /// Reference to a model in another namespace.
    pub fn qualified(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Ref {
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }
}

/// A resolved model definition.
#[derive(Debug, Clone)]
pub struct IrModel {
    /// Name inside its namespace (dotted prefix stripped).
    pub name: String,
    pub kind: IrModelKind,
}

#[derive(Debug, Clone)]
pub enum IrModelKind {
    Record(Vec<IrField>),
    Enum(IrEnum),
    Alias(TypeExpr),
}

/// A property on a record model.
#[derive(Debug, Clone)]
pub struct IrField {
    pub name: String,
    pub field_type: TypeExpr,
    pub required: bool,
}

/// Enumeration members, in declaration order.
#[derive(Debug, Clone)]
pub struct IrEnum {
    /// Whether the fragment declared `type: string`.
    pub string_typed: bool,
    pub values: Vec<serde_json::Value>,
}
