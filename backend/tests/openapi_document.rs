//! Structure of the published OpenAPI document.
//!
//! The document is checked as served at `/api-docs/openapi.json` and as
//! built by `ApiDocument::build`, which the server and `openapi-dump` share.
//! Validity is judged against the OpenAPI 3.1 meta-schema kept in
//! `fixtures/`.

mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use users_api::inbound::http::docs::{ApiDocument, OPENAPI_JSON_PATH};
use users_api::outbound::memory::InMemoryUserGateway;

use support::{init_app, send};

#[fixture]
fn document() -> Value {
    let document = ApiDocument::build().expect("document serialises");
    serde_json::from_str(document.as_str()).expect("document is JSON")
}

/// OpenAPI 3.1 JSON Schema (2022-10-07) published alongside the standard.
const OPENAPI_3_1_SCHEMA: &str = include_str!("fixtures/openapi-3.1-schema.json");

fn compile_meta_schema() -> jsonschema::Validator {
    let schema: Value = serde_json::from_str(OPENAPI_3_1_SCHEMA).expect("meta-schema is JSON");
    jsonschema::validator_for(&schema).expect("meta-schema compiles")
}

#[fixture]
fn meta_schema() -> jsonschema::Validator {
    compile_meta_schema()
}

fn violations(validator: &jsonschema::Validator, document: &Value) -> Vec<String> {
    validator
        .iter_errors(document)
        .map(|error| error.to_string())
        .collect()
}

#[rstest]
fn document_conforms_to_the_openapi_meta_schema(
    meta_schema: jsonschema::Validator,
    document: Value,
) {
    let errors = violations(&meta_schema, &document);
    assert!(errors.is_empty(), "meta-schema violations: {errors:#?}");

    let version = document["openapi"].as_str().expect("openapi version");
    assert!(version.starts_with("3."), "unexpected version {version}");
}

#[rstest]
#[case::relative_path_key(json!({ "api/users": { "get": { "responses": { "200": { "description": "ok" } } } } }))]
#[case::empty_responses(json!({ "/api/users": { "get": { "responses": {} } } }))]
fn meta_schema_rejects_malformed_paths(meta_schema: jsonschema::Validator, #[case] paths: Value) {
    let document = json!({
        "openapi": "3.1.0",
        "info": { "title": "Users API", "version": "1.0.0" },
        "paths": paths,
    });

    assert!(!violations(&meta_schema, &document).is_empty());
}

#[rstest]
fn info_and_servers_describe_the_service(document: Value) {
    assert_eq!(document["info"]["title"], "Users API");
    assert_eq!(document["info"]["version"], "1.0.0");
    assert_eq!(
        document["info"]["description"],
        "API documentation for the users service"
    );
    assert_eq!(document["servers"][0]["url"], "http://localhost:3000");
}

#[rstest]
fn exactly_two_operations_are_documented(document: Value) {
    let paths = document["paths"].as_object().expect("paths object");
    assert_eq!(paths.keys().collect::<Vec<_>>(), vec!["/api/users"]);

    let item = paths["/api/users"].as_object().expect("path item");
    let mut methods: Vec<&str> = item.keys().map(String::as_str).collect();
    methods.sort_unstable();
    assert_eq!(methods, vec!["get", "post"]);
}

#[rstest]
fn create_operation_references_component_schemas(document: Value) {
    let post = &document["paths"]["/api/users"]["post"];
    assert_eq!(post["operationId"], "createUser");
    assert_eq!(
        post["requestBody"]["content"]["application/json"]["schema"]["$ref"],
        "#/components/schemas/CreateUserRequest"
    );
    assert_eq!(
        post["responses"]["201"]["content"]["application/json"]["schema"]["$ref"],
        "#/components/schemas/User"
    );
    let failure = &post["responses"]["500"]["content"]["application/json"];
    assert_eq!(failure["schema"]["$ref"], "#/components/schemas/ErrorBody");
    assert_eq!(failure["example"]["error"], "Error creating user");
}

#[rstest]
fn list_operation_returns_an_array_of_users(document: Value) {
    let get = &document["paths"]["/api/users"]["get"];
    assert_eq!(get["operationId"], "listUsers");
    let schema = &get["responses"]["200"]["content"]["application/json"]["schema"];
    assert_eq!(schema["type"], "array");
    assert_eq!(schema["items"]["$ref"], "#/components/schemas/User");
    assert_eq!(
        get["responses"]["500"]["content"]["application/json"]["example"]["error"],
        "Error fetching users"
    );
}

#[rstest]
#[case("User", &["id", "name", "email"])]
#[case("CreateUserRequest", &["name", "email"])]
#[case("ErrorBody", &["error"])]
fn component_schemas_declare_their_properties(
    document: Value,
    #[case] name: &str,
    #[case] properties: &[&str],
) {
    let schema = &document["components"]["schemas"][name];
    assert_eq!(schema["type"], "object", "{name} should be an object");
    for property in properties {
        assert!(
            schema["properties"].get(property).is_some(),
            "{name} should declare {property}"
        );
    }
}

#[rstest]
fn user_schema_carries_examples(document: Value) {
    let properties = &document["components"]["schemas"]["User"]["properties"];
    assert_eq!(properties["id"]["example"], 1);
    assert_eq!(properties["name"]["example"], "John Doe");
    assert_eq!(properties["email"]["example"], "john.doe@example.com");
}

#[actix_web::test]
async fn served_document_matches_the_built_document() {
    let app = init_app(Arc::new(InMemoryUserGateway::default())).await;
    let expected = ApiDocument::build().expect("document serialises");

    let first = send(&app, actix_test::TestRequest::get().uri(OPENAPI_JSON_PATH)).await;
    let second = send(&app, actix_test::TestRequest::get().uri(OPENAPI_JSON_PATH)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, expected.as_str().as_bytes());
    assert_eq!(first.body, second.body);
    assert!(first.trace_id.is_some());

    let served: Value = serde_json::from_slice(&first.body).expect("served document is JSON");
    let errors = violations(&compile_meta_schema(), &served);
    assert!(errors.is_empty(), "meta-schema violations: {errors:#?}");
}
