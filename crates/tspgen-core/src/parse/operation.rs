use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::lenient;
use super::parameter::ParameterOrRef;
use super::response::ResponseOrRef;

/// A path item, kept as raw JSON keyed by method name.
///
/// Path items mix operation descriptors with shared entries (`parameters`
/// lists, `x-*` extensions), so entries are interpreted lazily: only keys that
/// name an HTTP method and hold a JSON object are operations.
pub type PathItem = IndexMap<String, serde_json::Value>;

/// An API operation descriptor.
///
/// A malformed field falls back to its default instead of failing the whole
/// descriptor; malformed parameters and responses are dropped one by one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    #[serde(
        rename = "operationId",
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_id: Option<String>,

    #[serde(deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `None` when the key is absent, which is not the same as an empty list.
    #[serde(deserialize_with = "lenient::tag_list", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(deserialize_with = "lenient::skip_malformed", skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterOrRef>,

    #[serde(
        deserialize_with = "lenient::skip_malformed_entries",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub responses: IndexMap<String, ResponseOrRef>,
}

impl Operation {
    /// The first listed tag, which names the operation's namespace.
    pub fn first_tag(&self) -> Option<&str> {
        self.tags
            .as_ref()
            .and_then(|tags| tags.first())
            .map(String::as_str)
    }
}
