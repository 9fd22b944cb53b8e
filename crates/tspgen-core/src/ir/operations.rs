use std::fmt;
use std::str::FromStr;

use super::schemas::TypeExpr;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Lowercase form, as used for path item keys.
    pub fn as_lowercase(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a path item key does not name an HTTP method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotAMethod(pub String);

impl FromStr for HttpMethod {
    type Err = NotAMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [HttpMethod; 8] = [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
            HttpMethod::Patch,
            HttpMethod::Options,
            HttpMethod::Head,
            HttpMethod::Trace,
        ];
        ALL.into_iter()
            .find(|m| m.as_lowercase().eq_ignore_ascii_case(s))
            .ok_or_else(|| NotAMethod(s.to_string()))
    }
}

/// A fully resolved API operation.
#[derive(Debug, Clone)]
pub struct IrOperation {
    /// Last dot-separated segment of `operationId`, or `unknown`.
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    pub parameters: Vec<IrParameter>,
    /// `Void` unless a `200` response carries a JSON schema.
    pub return_type: TypeExpr,
}

/// A resolved path/query/header parameter.
#[derive(Debug, Clone)]
pub struct IrParameter {
    pub name: String,
    pub location: IrParameterLocation,
    pub param_type: TypeExpr,
    pub required: bool,
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Other,
}
