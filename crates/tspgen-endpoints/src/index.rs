use std::collections::BTreeMap;

use tspgen_core::ir::HttpMethod;
use tspgen_core::ir::grouping::walk_operations;
use tspgen_core::parse::operation::Operation;
use tspgen_core::parse::spec::OpenApiSpec;

/// Bucket for operations without a `tags` key, and for empty tag lists whose
/// path gives no hint.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// The rows of one tag, already rendered as markdown table lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointGroup {
    pub tag: String,
    pub rows: Vec<String>,
}

/// Every operation of a document, bucketed by tag.
///
/// Groups are sorted by tag and rows are sorted within a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointIndex {
    pub groups: Vec<EndpointGroup>,
}

impl EndpointIndex {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, tag: &str) -> Option<&EndpointGroup> {
        self.groups.iter().find(|g| g.tag == tag)
    }
}

/// Walk every path/method pair of the document and bucket it by tag.
///
/// Unlike namespace grouping, untagged operations are kept. A missing `tags`
/// key files the operation under [`UNCATEGORIZED`]; an empty list guesses the
/// tag from a `/riot/<api>/<version>/...` path first.
pub fn build_index(spec: &OpenApiSpec) -> EndpointIndex {
    let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (path, item) in &spec.paths {
        for (method, operation) in walk_operations(path, item) {
            let tag = match &operation.tags {
                None => UNCATEGORIZED.to_string(),
                Some(tags) => match tags.first() {
                    Some(tag) => tag.clone(),
                    None => guess_tag(path).unwrap_or_else(|| UNCATEGORIZED.to_string()),
                },
            };
            buckets
                .entry(tag)
                .or_default()
                .push(render_row(method, path, &operation));
        }
    }

    let groups = buckets
        .into_iter()
        .map(|(tag, mut rows)| {
            rows.sort();
            EndpointGroup { tag, rows }
        })
        .collect();

    EndpointIndex { groups }
}

/// Guess a tag from a `/riot/<api>/<version>/...` path.
pub fn guess_tag(path: &str) -> Option<String> {
    let parts: Vec<&str> = path.trim_matches('/').split('/').collect();
    match parts.as_slice() {
        ["riot", api, version, ..] => Some(format!("{api}-{version}")),
        _ => None,
    }
}

/// `| METHOD | path | summary |`
pub fn render_row(method: HttpMethod, path: &str, operation: &Operation) -> String {
    format!("| {method} | {path} | {} |", summary_cell(operation))
}

/// The summary, or the description when the summary is absent or empty,
/// flattened to a single table cell.
pub fn summary_cell(operation: &Operation) -> String {
    let text = operation
        .summary
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(operation.description.as_deref())
        .unwrap_or_default();
    text.replace('\n', " ").replace('|', "\\|")
}
