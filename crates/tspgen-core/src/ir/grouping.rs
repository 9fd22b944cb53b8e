use indexmap::IndexMap;
use log::{debug, warn};

use super::operations::HttpMethod;
use crate::parse::operation::{Operation, PathItem};
use crate::parse::schema::SchemaOrRef;
use crate::parse::spec::OpenApiSpec;

/// Models and operations sharing one namespace key, still in raw schema form.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    pub key: String,
    /// Dotted component name → fragment, in component order.
    pub models: IndexMap<String, SchemaOrRef>,
    pub operations: Vec<NamespaceOperation>,
}

impl Namespace {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }
}

/// One operation filed under a namespace.
#[derive(Debug, Clone)]
pub struct NamespaceOperation {
    pub method: HttpMethod,
    pub path: String,
    pub operation: Operation,
}

/// All namespaces of a document, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct NamespaceSet {
    pub namespaces: IndexMap<String, Namespace>,
}

impl NamespaceSet {
    pub fn get(&self, key: &str) -> Option<&Namespace> {
        self.namespaces.get(key)
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.values()
    }

    /// Namespace keys in alphabetical order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.namespaces.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    fn bucket(&mut self, key: &str) -> &mut Namespace {
        self.namespaces
            .entry(key.to_string())
            .or_insert_with(|| Namespace::new(key))
    }
}

/// Partition a document's component schemas and operations into namespaces.
///
/// Schemas are filed under the prefix before the first dot of their name;
/// undotted schemas are dropped. Operations are filed under their first tag;
/// untagged operations are dropped.
pub fn group_namespaces(spec: &OpenApiSpec) -> NamespaceSet {
    let mut set = NamespaceSet::default();

    if let Some(ref components) = spec.components {
        for (name, schema) in &components.schemas {
            match name.split_once('.') {
                Some((prefix, _)) => {
                    set.bucket(prefix).models.insert(name.clone(), schema.clone());
                }
                None => debug!("skipping schema without namespace prefix: {name}"),
            }
        }
    }

    for (path, item) in &spec.paths {
        for (method, operation) in walk_operations(path, item) {
            let Some(tag) = operation.first_tag() else {
                debug!("skipping untagged operation {method} {path}");
                continue;
            };
            let tag = tag.to_string();
            set.bucket(&tag).operations.push(NamespaceOperation {
                method,
                path: path.clone(),
                operation,
            });
        }
    }

    set
}

/// The operation descriptors of a path item, in document order.
///
/// Entries whose key is not an HTTP method or whose value is not a JSON
/// object (shared `parameters` lists, vendor extensions) are skipped. Inside
/// a descriptor, malformed fields fall back to defaults, so every object
/// under a method key yields an operation.
pub fn walk_operations(path: &str, item: &PathItem) -> Vec<(HttpMethod, Operation)> {
    item.iter()
        .filter_map(|(key, value)| {
            if !value.is_object() {
                return None;
            }
            let method = match key.parse::<HttpMethod>() {
                Ok(method) => method,
                Err(_) => {
                    debug!("skipping non-method entry `{key}` under {path}");
                    return None;
                }
            };
            match serde_json::from_value::<Operation>(value.clone()) {
                Ok(operation) => Some((method, operation)),
                Err(e) => {
                    warn!("skipping malformed operation {method} {path}: {e}");
                    None
                }
            }
        })
        .collect()
}
