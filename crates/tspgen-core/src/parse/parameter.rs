use serde::{Deserialize, Serialize};

use super::lenient;
use super::schema::SchemaOrRef;

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
    #[default]
    #[serde(other)]
    Other,
}

/// An API parameter. Each malformed field reads as its default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,

    /// Missing or unknown `in` values parse as `Other`.
    #[serde(rename = "in", deserialize_with = "lenient::or_default")]
    pub location: ParameterLocation,

    #[serde(deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(deserialize_with = "lenient::or_default")]
    pub required: bool,

    #[serde(deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

/// A reference or inline parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Parameter(Parameter),
}
