/// Convert a dashed namespace key to its capitalized, separator-free form.
///
/// The key is split on `-` and `_`; each segment gets an uppercase first
/// character and lowercase remainder.
///
/// - `account-v1` → `AccountV1`
/// - `lol-status-v4` → `LolStatusV4`
/// - `tft_league-v1` → `TftLeagueV1`
pub fn namespace_name(key: &str) -> String {
    key.split(['-', '_']).map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Strip the `<namespace>.` prefix from a dotted component name.
///
/// A name outside the namespace falls back to replacing every dot with an
/// underscore.
pub fn model_name(dotted_name: &str, namespace: &str) -> String {
    dotted_name
        .strip_prefix(namespace)
        .and_then(|rest| rest.strip_prefix('.'))
        .map(str::to_string)
        .unwrap_or_else(|| dotted_name.replace('.', "_"))
}

/// The component name a `$ref` points at (its last `/` segment).
pub fn ref_target(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

/// The identifier an operation is emitted under: the last dot-separated
/// segment of its `operationId`, or `unknown`.
pub fn operation_name(operation_id: Option<&str>) -> String {
    operation_id
        .and_then(|id| id.rsplit('.').next())
        .unwrap_or("unknown")
        .to_string()
}

/// Whether `name` matches `[a-zA-Z_][a-zA-Z0-9_]*`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
