use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use nutrisense_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::{AsyncTestContext, test_context};
use uuid::Uuid;

struct ApiContext {
    server: TestServer,
    session_id: Uuid,
}

impl ApiContext {
    fn session_path(&self, path: &str) -> String {
        format!("/sessions/{}{path}", self.session_id)
    }
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let args = Args::try_parse_from(["nutrisense-api", "--rng-seed", "5"]).unwrap();
        let app = router(state(Arc::new(args))).unwrap();

        ApiContext {
            server: TestServer::new(app).unwrap(),
            session_id: Uuid::new_v4(),
        }
    }
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_health_live(ctx: &mut ApiContext) {
    let response = ctx.server.get("/health/live").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_new_session_has_default_profile(ctx: &mut ApiContext) {
    let response = ctx.server.get(&ctx.session_path("/profile")).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "data": {
            "language": "en",
            "dietary_preferences": [],
            "medical_conditions": ["Hypertension"],
            "medications": ["Lisinopril"],
            "allergies": ["Nuts", "Dairy"]
        }
    }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_profile_patch_accepts_delimited_tags(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .patch(&ctx.session_path("/profile"))
        .json(&json!({
            "dietary_preferences": ["vegan"],
            "allergies": "Shellfish, ,Soy "
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["allergies"], json!(["Shellfish", "Soy"]));
    assert_eq!(body["data"]["dietary_preferences"], json!(["vegan"]));
    assert_eq!(body["data"]["medical_conditions"], json!(["Hypertension"]));

    let stored = ctx.server.get(&ctx.session_path("/profile")).await;
    assert_eq!(stored.json::<Value>(), body);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_profile_patch_rejects_empty_language(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .patch(&ctx.session_path("/profile"))
        .json(&json!({ "language": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "E_VALIDATION");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_profile_patch_rejects_blank_language(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .patch(&ctx.session_path("/profile"))
        .json(&json!({ "language": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "E_VALIDATION");

    let stored = ctx.server.get(&ctx.session_path("/profile")).await;
    assert_eq!(stored.json::<Value>()["data"]["language"], "en");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_malformed_session_id_is_json_bad_request(ctx: &mut ApiContext) {
    let response = ctx.server.get("/sessions/not-a-uuid/profile").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert_eq!(body["status"], 400);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_malformed_tip_index_is_json_bad_request(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/catalog/tips")
        .add_query_param("index", "abc")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert_eq!(body["status"], 400);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_recommendations_for_default_profile(ctx: &mut ApiContext) {
    let response = ctx.server.get(&ctx.session_path("/recommendations")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(
        body["data"]["meal_plan"]["snacks"],
        json!(["Hummus with cucumber", "Berries with dark chocolate"])
    );
    assert_eq!(
        body["data"]["meal_plan"]["breakfast"],
        json!([
            "Oatmeal with fresh berries",
            "Avocado toast with eggs",
            "Smoothie bowl with spinach"
        ])
    );
    assert_eq!(
        body["data"]["health_tips"][0],
        "Limit sodium intake to less than 2,300mg per day"
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_meal_slot(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get(&ctx.session_path("/recommendations/meals/lunch"))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["slot"], "lunch");
    assert_eq!(body["data"]["meals"].as_array().map(Vec::len), Some(4));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_unknown_meal_slot_is_not_found(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get(&ctx.session_path("/recommendations/meals/brunch"))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["code"], "E_NOT_FOUND");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_scan_unhealthy_fixture(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post(&ctx.session_path("/scans"))
        .json(&json!({ "fixture": "unhealthy" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["data"]["record"]["name"], "Processed Instant Noodles");
    assert_eq!(body["data"]["record"]["health_score"], 15);
    assert_eq!(body["data"]["record"]["category"], "Avoidable");
    assert_eq!(body["data"]["score_band"], "poor");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_scan_barcode_keeps_barcode(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post(&ctx.session_path("/scans"))
        .json(&json!({ "barcode": "4006381333931" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>()["data"]["record"]["barcode"],
        "4006381333931"
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_scan_rejects_bad_requests(ctx: &mut ApiContext) {
    for payload in [
        json!({}),
        json!({ "barcode": "   " }),
        json!({ "fixture": "spicy" }),
        json!({ "fixture": "healthy", "barcode": "123" }),
    ] {
        let response = ctx
            .server
            .post(&ctx.session_path("/scans"))
            .json(&payload)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_adjust_scan_applies_profile_checks(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post(&ctx.session_path("/scans/adjust"))
        .json(&json!({
            "name": "Cheese Crackers",
            "category": "Advisable",
            "health_score": 70,
            "calories": 160,
            "nutrition": { "sodium": 450, "protein": "3" },
            "ingredients": ["Wheat flour", "Dairy whey"]
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["record"]["category"], "Avoidable");
    assert_eq!(body["data"]["record"]["health_score"], 20);
    assert_eq!(
        body["data"]["record"]["alerts"],
        json!([
            "⚠️ High sodium - not recommended for hypertension management",
            "🚨 Contains allergens from your profile"
        ])
    );
    assert_eq!(body["data"]["record"]["nutrition"]["protein"], 3.0);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_adjust_scan_rejects_score_above_100(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post(&ctx.session_path("/scans/adjust"))
        .json(&json!({ "name": "Chips", "category": "Acceptable", "health_score": 120 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_chat_round_trip(ctx: &mut ApiContext) {
    let history = ctx.server.get(&ctx.session_path("/chat")).await;
    history.assert_status_ok();
    assert_eq!(history.json::<Value>()["data"][0]["role"], "bot");

    let sent = ctx
        .server
        .post(&ctx.session_path("/chat"))
        .json(&json!({ "message": "  What should I eat?  " }))
        .await;
    sent.assert_status(StatusCode::CREATED);
    let sent = sent.json::<Value>();
    assert_eq!(sent["data"][0]["role"], "user");
    assert_eq!(sent["data"][0]["content"], "What should I eat?");
    assert_eq!(sent["data"][1]["role"], "bot");

    let history = ctx.server.get(&ctx.session_path("/chat")).await;
    assert_eq!(history.json::<Value>()["data"].as_array().map(Vec::len), Some(3));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_chat_rejects_blank_message(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post(&ctx.session_path("/chat"))
        .json(&json!({ "message": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_workout_for_default_profile(ctx: &mut ApiContext) {
    let response = ctx.server.get(&ctx.session_path("/workout")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["title"], "Low-Impact Recovery");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_tip_wraps_around(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/catalog/tips")
        .add_query_param("index", 9)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["index"], 1);
    assert_eq!(body["data"]["next_index"], 2);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_dietary_options(ctx: &mut ApiContext) {
    let response = ctx.server.get("/catalog/dietary-options").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["data"][0]["id"], "vegan");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_openapi_document_is_served(ctx: &mut ApiContext) {
    let response = ctx.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert!(body["paths"]["/sessions/{session_id}/profile"].is_object());
    assert!(body["paths"]["/catalog/tips"].is_object());
}
