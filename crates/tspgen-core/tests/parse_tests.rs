use tspgen_core::parse;
use tspgen_core::parse::parameter::{ParameterLocation, ParameterOrRef};
use tspgen_core::parse::response::ResponseOrRef;
use tspgen_core::parse::schema::SchemaOrRef;

const RIOT_MINI: &str = include_str!("fixtures/riot-mini.json");

#[test]
fn parse_riot_mini_json() {
    let spec = parse::from_json(RIOT_MINI).expect("should parse riot-mini.json");
    assert_eq!(spec.openapi.as_deref(), Some("3.0.0"));
    assert_eq!(spec.info.title, "Riot API");
    assert_eq!(spec.paths.len(), 8);

    let components = spec.components.as_ref().expect("should have components");
    assert_eq!(components.schemas.len(), 10);
    assert!(components.schemas.contains_key("match-v5.ParticipantDto"));

    // Path items keep vendor keys alongside operations
    let item = spec
        .paths
        .get("/riot/account/v1/accounts/by-puuid/{puuid}")
        .expect("should have by-puuid path");
    assert!(item.contains_key("get"));
    assert!(item.contains_key("x-endpoint"));
    assert!(item.contains_key("parameters"));
}

#[test]
fn parse_riot_mini_as_yaml() {
    // JSON is a subset of YAML
    let spec = parse::from_yaml(RIOT_MINI).expect("should parse as yaml");
    assert_eq!(spec.paths.len(), 8);
}

#[test]
fn parse_response_content() {
    let spec = parse::from_json(RIOT_MINI).unwrap();
    let item = spec.paths.get("/lol/status/v4/platform-data").unwrap();
    let op: parse::operation::Operation = serde_json::from_value(item["get"].clone()).unwrap();

    assert_eq!(op.first_tag(), Some("lol-status-v4"));
    match op.responses.get("200") {
        Some(ResponseOrRef::Response(r)) => {
            let media = r.content.get("application/json").unwrap();
            assert!(matches!(media.schema, Some(SchemaOrRef::Ref { .. })));
        }
        other => panic!("expected inline 200 response, got {other:?}"),
    }
}

#[test]
fn parse_rejects_malformed_documents() {
    assert!(parse::from_json("{\"openapi\": ").is_err());
    assert!(parse::from_json("\"not a document\"").is_err());
    assert!(parse::from_yaml("openapi: [unclosed").is_err());
}

#[test]
fn parse_accepts_minimal_document() {
    let spec = parse::from_json("{}").unwrap();
    assert!(spec.paths.is_empty());
    assert!(spec.components.is_none());
}

#[test]
fn parse_tags_absent_differs_from_empty() {
    let op = |json: &str| -> parse::operation::Operation { serde_json::from_str(json).unwrap() };

    assert_eq!(op("{}").tags, None);
    assert_eq!(op(r#"{"tags": []}"#).tags, Some(vec![]));
    assert_eq!(op(r#"{"tags": null}"#).tags, Some(vec![]));
    assert_eq!(op(r#"{"tags": "account-v1"}"#).tags, Some(vec![]));
    assert_eq!(op(r#"{"tags": []}"#).first_tag(), None);
}

#[test]
fn parse_malformed_parameter_fields_default() {
    let op: parse::operation::Operation = serde_json::from_str(
        r#"{"parameters": [{"name": "count", "in": 5, "required": "yes", "schema": true}]}"#,
    )
    .unwrap();

    let [ParameterOrRef::Parameter(param)] = op.parameters.as_slice() else {
        panic!("expected one inline parameter, got {:?}", op.parameters);
    };
    assert_eq!(param.name, "count");
    assert_eq!(param.location, ParameterLocation::Other);
    assert!(!param.required);
    assert!(param.schema.is_none());
}
