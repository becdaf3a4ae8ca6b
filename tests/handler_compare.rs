mod common;

use axum::http::StatusCode;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use axum_test::TestServer;
use axum_test::multipart::MultipartForm;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use resource_tally::api::handlers::compare_handler;
use resource_tally::application::services::ShapePolicy;
use resource_tally::state::AppState;
use serde_json::{Value, json};

fn compare_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/compare", post(compare_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

fn counts(entries: &Value) -> Vec<(String, u64)> {
    entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["type"].as_str().unwrap().to_string(),
                e["count"].as_u64().unwrap(),
            )
        })
        .collect()
}

fn pairs(items: &[(&str, u64)]) -> Vec<(String, u64)> {
    items.iter().map(|(t, c)| (t.to_string(), *c)).collect()
}

#[tokio::test]
async fn test_compare_same_type_in_both_files() {
    let server = compare_server(common::create_test_state());

    let response = server
        .post("/api/compare")
        .multipart(common::upload_form(
            &json!({
                "resources": [{ "type": "azurerm_subnet" }, { "type": "azurerm_subnet" }]
            }),
            &json!([{ "type": "azurerm_subnet", "count": 5 }]),
        ))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["labels"], json!(["azurerm_subnet"]));
    assert_eq!(counts(&json["first"]), pairs(&[("azurerm_subnet", 2)]));
    assert_eq!(counts(&json["second"]), pairs(&[("azurerm_subnet", 5)]));
    assert_eq!(counts(&json["first_only"]), pairs(&[("azurerm_subnet", 2)]));
    assert_eq!(json["first"][0]["label"], "subnet");
    assert_eq!(json["summary"], "azurerm_subnet: 2\n");
}

#[tokio::test]
async fn test_compare_disjoint_labels_are_zero_filled() {
    let server = compare_server(common::create_test_state());

    let response = server
        .post("/api/compare")
        .multipart(common::upload_form(
            &json!({ "resources": [{ "type": "A" }] }),
            &json!([{ "type": "B", "count": 4 }]),
        ))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["labels"], json!(["A", "B"]));
    assert_eq!(counts(&json["first"]), pairs(&[("A", 1), ("B", 0)]));
    assert_eq!(counts(&json["second"]), pairs(&[("A", 0), ("B", 4)]));
    assert_eq!(counts(&json["first_only"]), pairs(&[("A", 1)]));
}

#[tokio::test]
async fn test_compare_list_form_overwrites_and_skips() {
    let server = compare_server(common::create_test_state());

    let response = server
        .post("/api/compare")
        .multipart(common::upload_form(
            &json!({ "resources": [] }),
            &json!([
                { "type": "azurerm_subnet", "count": 1 },
                { "type": "azurerm_subnet", "count": 9 },
                { "type": "no_count" },
                { "count": 3 }
            ]),
        ))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["labels"], json!(["azurerm_subnet", "no_count"]));
    assert_eq!(
        counts(&json["first"]),
        pairs(&[("azurerm_subnet", 0), ("no_count", 0)])
    );
    assert_eq!(
        counts(&json["second"]),
        pairs(&[("azurerm_subnet", 9), ("no_count", 0)])
    );
    assert_eq!(counts(&json["first_only"]), pairs(&[]));
    assert_eq!(json["summary"], "");
}

#[tokio::test]
async fn test_compare_returns_base64_svg_charts() {
    let server = compare_server(common::create_test_state());

    let response = server
        .post("/api/compare")
        .multipart(common::upload_form(
            &json!({ "resources": [{ "type": "azurerm_resource_group" }] }),
            &json!([{ "type": "azurerm_resource_group", "count": 2 }]),
        ))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    for key in ["first", "second"] {
        let chart = &json["charts"][key];
        assert_eq!(chart["mime_type"], "image/svg+xml");

        let svg = STANDARD.decode(chart["data"].as_str().unwrap()).unwrap();
        let svg = String::from_utf8(svg).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("resource_group"));
    }
}

#[tokio::test]
async fn test_compare_malformed_json() {
    let server = compare_server(common::create_test_state());

    let form = MultipartForm::new()
        .add_part("file1", common::raw_part(b"{\"resources\": [".to_vec()))
        .add_part("file2", common::json_part(&json!([])));

    let response = server.post("/api/compare").multipart(form).await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Malformed JSON");
    assert_eq!(json["error"]["details"]["upload"], "file1");
    assert!(json.get("charts").is_none());
}

#[tokio::test]
async fn test_compare_object_form_missing_type() {
    let server = compare_server(common::create_test_state());

    let response = server
        .post("/api/compare")
        .multipart(common::upload_form(
            &json!({ "resources": [{ "type": "a" }, { "name": "no type" }] }),
            &json!([]),
        ))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["details"]["upload"], "file1");
    assert_eq!(json["error"]["details"]["index"], 1);
}

#[tokio::test]
async fn test_compare_missing_upload_field() {
    let server = compare_server(common::create_test_state());

    let form = MultipartForm::new().add_part("file1", common::json_part(&json!([])));

    let response = server.post("/api/compare").multipart(form).await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["details"]["missing"], json!(["file2"]));
}

#[tokio::test]
async fn test_compare_ignores_unknown_fields() {
    let server = compare_server(common::create_test_state());

    let form = common::upload_form(&json!([{ "type": "x", "count": 1 }]), &json!([]))
        .add_text("comment", "extra");

    let response = server.post("/api/compare").multipart(form).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_compare_strict_mode_rejects_list_first() {
    let server = compare_server(common::create_state_with_policy(ShapePolicy::Strict));

    let response = server
        .post("/api/compare")
        .multipart(common::upload_form(
            &json!([{ "type": "a", "count": 1 }]),
            &json!([{ "type": "a", "count": 1 }]),
        ))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "Unexpected dataset shape");
    assert_eq!(json["error"]["details"]["expected"], "object-form");
}

#[tokio::test]
async fn test_compare_strict_mode_accepts_expected_shapes() {
    let server = compare_server(common::create_state_with_policy(ShapePolicy::Strict));

    let response = server
        .post("/api/compare")
        .multipart(common::upload_form(
            &json!({ "resources": [{ "type": "a" }] }),
            &json!([{ "type": "a", "count": 3 }]),
        ))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_compare_body_limit() {
    let app = Router::new()
        .route("/api/compare", post(compare_handler))
        .with_state(common::create_test_state())
        .layer(DefaultBodyLimit::max(1024));
    let server = TestServer::new(app).unwrap();

    let resources: Vec<Value> = (0..200).map(|_| json!({ "type": "azurerm_subnet" })).collect();

    let response = server
        .post("/api/compare")
        .multipart(common::upload_form(&json!({ "resources": resources }), &json!([])))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}
