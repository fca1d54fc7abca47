//! End-to-end tests over the router, no sockets involved. Every test builds
//! its own seeded store, so nothing leaks between tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use server::state::AppState;
use server::store::Store;

fn app() -> Router {
    server::app(AppState::with_store(Store::seeded()))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    with_auth(Request::get(path), token).body(Body::empty()).unwrap()
}

fn send_json(method: &str, path: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    with_auth(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json"),
        token,
    )
    .body(Body::from(body.to_string()))
    .unwrap()
}

fn with_auth(
    builder: axum::http::request::Builder,
    token: Option<&str>,
) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

async fn login(router: &Router, email: &str) -> String {
    let (status, body) = send(
        router,
        send_json(
            "POST",
            "/auth/login",
            None,
            &json!({"email": email, "password": "password"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["accessToken"].as_str().unwrap().to_string()
}

fn valid_draft() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "departmentId": "11111111-1111-1111-1111-111111111111",
        "wingId": "22222222-2222-2222-2222-222222222221",
        "pickupTime": "12:30",
        "hasAllergies": false,
        "sandwichConfig": "SPECIAL",
        "selectedSpecialId": "33333333-3333-3333-3333-333333333331",
        "selectedIngredientIds": [],
        "selectedExtraIds": [],
        "notes": ""
    })
}

#[tokio::test]
async fn service_is_open_by_default() {
    let router = app();
    let (status, body) = send(&router, get("/service/status", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isOpen"], true);
    assert_eq!(body["message"], Value::Null);
}

#[tokio::test]
async fn order_windows_reflect_time_settings() {
    let router = app();
    let (status, body) = send(&router, get("/config/order-windows", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderWindow"]["from"], "06:00");
    assert_eq!(body["orderWindow"]["to"], "22:00");
    assert_eq!(body["dayShift"]["from"], "09:00");
}

#[tokio::test]
async fn public_catalog_is_active_only() {
    let router = app();

    let (_, ingredients) = send(&router, get("/catalog/ingredients", None)).await;
    let names: Vec<&str> = ingredients
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Chicken"));
    assert!(!names.contains(&"Spicy Sauce"));

    let (_, specials) = send(&router, get("/catalog/special-sandwiches", None)).await;
    let names: Vec<&str> = specials
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert!(!names.contains(&"Tuna Mayo"));
}

#[tokio::test]
async fn order_submission_and_status_progression() {
    let router = app();

    let (status, body) = send(&router, send_json("POST", "/orders", None, &valid_draft())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "SENT_TO_PRINT");
    let order_id = body["orderId"].as_str().unwrap().to_string();
    assert_eq!(order_id, "99999999-0000-0000-0000-000000000001");

    let path = format!("/orders/{order_id}/status");
    for expected in ["SENT_TO_PRINT", "SENT_TO_PRINT", "PRINTED", "PRINTED"] {
        let (status, body) = send(&router, get(&path, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], expected);
    }
}

#[tokio::test]
async fn unknown_order_is_404() {
    let router = app();
    let (status, _) = send(&router, get("/orders/nope/status", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_draft_returns_aggregated_422() {
    let router = app();
    let mut draft = valid_draft();
    draft["firstName"] = json!("");
    draft["pickupTime"] = json!("23:30");
    draft["sandwichConfig"] = json!("MIXED");
    draft["selectedSpecialId"] = json!("");

    let (status, body) = send(&router, send_json("POST", "/orders", None, &draft)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION");

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"firstName"));
    assert!(fields.contains(&"pickupTime"));
    assert!(fields.contains(&"selectedSpecialId"));
    assert!(fields.contains(&"selectedIngredientIds"));
}

#[tokio::test]
async fn maintenance_mode_closes_the_service() {
    let router = app();
    let admin = login(&router, "admin@goose.lake").await;

    let (status, _) = send(
        &router,
        send_json(
            "PUT",
            "/admin/settings/maintenance",
            Some(&admin),
            &json!({"isEnabled": true, "message": "Back at noon", "untilIso": null}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&router, get("/service/status", None)).await;
    assert_eq!(body["isOpen"], false);
    assert_eq!(body["message"], "Back at noon");

    let (status, _) = send(&router, send_json("POST", "/orders", None, &valid_draft())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let router = app();
    let (status, body) = send(
        &router,
        send_json(
            "POST",
            "/auth/login",
            None,
            &json!({"email": "admin@goose.lake", "password": "wrong"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn me_returns_user_without_password() {
    let router = app();
    let chef = login(&router, "chef@goose.lake").await;
    let (status, body) = send(&router, get("/auth/me", Some(&chef))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "CHEF");
    assert_eq!(body["fullName"], "Head Chef");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn admin_surface_requires_a_token() {
    let router = app();
    let (status, _) = send(&router, get("/admin/users", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn role_gates_follow_the_policy() {
    let router = app();
    let chef = login(&router, "chef@goose.lake").await;
    let manager = login(&router, "manager@goose.lake").await;

    let (status, _) = send(&router, get("/admin/users", Some(&chef))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&router, get("/admin/ingredients", Some(&manager))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&router, get("/admin/ingredients", Some(&chef))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&router, get("/admin/settings/time", Some(&manager))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn manager_can_only_manage_chefs() {
    let router = app();
    let manager = login(&router, "manager@goose.lake").await;

    let (status, _) = send(
        &router,
        send_json(
            "POST",
            "/admin/users",
            Some(&manager),
            &json!({"fullName": "New Manager", "email": "m2@goose.lake", "role": "MANAGER", "password": "pw"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &router,
        send_json(
            "POST",
            "/admin/users",
            Some(&manager),
            &json!({"fullName": "Line Chef", "email": "chef2@goose.lake", "role": "CHEF", "password": "pw"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "CHEF");
    assert_eq!(body["isActive"], true);

    let (status, _) = send(
        &router,
        send_json(
            "POST",
            "/admin/users/user-admin-001/reset-password",
            Some(&manager),
            &json!({}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &router,
        send_json(
            "POST",
            "/admin/users/user-chef-001/reset-password",
            Some(&manager),
            &json!({}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn ingredient_filters() {
    let router = app();
    let chef = login(&router, "chef@goose.lake").await;

    let (_, all) = send(&router, get("/admin/ingredients", Some(&chef))).await;
    assert_eq!(all.as_array().unwrap().len(), 16);

    let (_, meat) = send(&router, get("/admin/ingredients?category=MEAT", Some(&chef))).await;
    assert_eq!(meat.as_array().unwrap().len(), 5);

    let (_, all_again) = send(&router, get("/admin/ingredients?category=ALL", Some(&chef))).await;
    assert_eq!(all_again.as_array().unwrap().len(), 16);

    let (_, bread) = send(&router, get("/admin/ingredients?query=bread", Some(&chef))).await;
    assert_eq!(bread.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn catalog_crud_round_trip() {
    let router = app();
    let chef = login(&router, "chef@goose.lake").await;

    let (status, created) = send(
        &router,
        send_json(
            "POST",
            "/admin/extras",
            Some(&chef),
            &json!({"name": "Granola Bar"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["isActive"], true);

    let (status, patched) = send(
        &router,
        send_json(
            "PATCH",
            &format!("/admin/extras/{id}"),
            Some(&chef),
            &json!({"isActive": false}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["isActive"], false);

    // deactivated items vanish from the public list
    let (_, public) = send(&router, get("/catalog/extras", None)).await;
    assert!(
        public
            .as_array()
            .unwrap()
            .iter()
            .all(|e| e["id"] != created["id"])
    );

    let (status, body) = send(
        &router,
        Request::delete(format!("/admin/extras/{id}"))
            .header(header::AUTHORIZATION, format!("Bearer {chef}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(
        &router,
        send_json(
            "PATCH",
            &format!("/admin/extras/{id}"),
            Some(&chef),
            &json!({"name": "gone"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn time_settings_validate_their_ranges() {
    let router = app();
    let manager = login(&router, "manager@goose.lake").await;

    let (status, _) = send(
        &router,
        send_json(
            "PUT",
            "/admin/settings/time",
            Some(&manager),
            &json!({
                "orderWindowFrom": "22:00",
                "orderWindowTo": "06:00",
                "dayShiftFrom": "09:00",
                "dayShiftTo": "17:00",
                "nightShiftFrom": "17:00",
                "nightShiftTo": "02:00"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // a shrunk window immediately gates submissions
    let (status, _) = send(
        &router,
        send_json(
            "PUT",
            "/admin/settings/time",
            Some(&manager),
            &json!({
                "orderWindowFrom": "08:00",
                "orderWindowTo": "10:00",
                "dayShiftFrom": "09:00",
                "dayShiftTo": "17:00",
                "nightShiftFrom": "17:00",
                "nightShiftTo": "02:00"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, send_json("POST", "/orders", None, &valid_draft())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"][0]["field"], "pickupTime");
}

#[tokio::test]
async fn qr_sheet_is_gated_and_simulated() {
    let router = app();
    let chef = login(&router, "chef@goose.lake").await;
    let admin = login(&router, "admin@goose.lake").await;

    let (status, _) = send(&router, send_json("POST", "/admin/qr/pdf", Some(&chef), &json!({}))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&router, send_json("POST", "/admin/qr/pdf", Some(&admin), &json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["pdfUrl"].as_str().unwrap().ends_with(".pdf"));
}
