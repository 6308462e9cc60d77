//! In-process fake of the food-sharing backend.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "tok-101";
pub const PASSWORD: &str = "secret1";

#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub len: usize,
}

#[derive(Default)]
pub struct Recorded {
    pub register_bodies: Vec<Value>,
    pub update_bodies: Vec<Value>,
    pub donation_fields: HashMap<String, String>,
    pub files: Vec<UploadedFile>,
    pub queries: Vec<HashMap<String, String>>,
    pub request_bodies: Vec<Value>,
    pub fail_donations: bool,
}

#[derive(Clone, Default)]
pub struct Backend {
    pub recorded: Arc<Mutex<Recorded>>,
}

impl Backend {
    pub fn fail_donations(&self) {
        self.recorded.lock().unwrap().fail_donations = true;
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"status": "error", "message": "Token is invalid or expired"})),
    )
        .into_response()
}

async fn register(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    backend.recorded.lock().unwrap().register_bodies.push(body.clone());
    if body["email"] == "taken@x.com" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "Email already exists"})),
        )
            .into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Registered successfully",
            "data": {"user_id": 101, "role": body["role"], "token": TOKEN}
        })),
    )
        .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == PASSWORD {
        Json(json!({
            "message": "Login successful",
            "user_id": 101,
            "role": "donor",
            "token": TOKEN,
            "full_name": "Jane"
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid credentials"})),
        )
            .into_response()
    }
}

fn profile_json(id: &str, full_name: &str) -> Value {
    json!({
        "user_id": id.parse::<u64>().unwrap_or(0),
        "email": "jane@x.com",
        "full_name": full_name,
        "phone_number": "555",
        "address": "1 Main",
        "role": "donor",
        "profile_picture": null
    })
}

async fn profile(headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"status": "success", "data": profile_json(&id, "Jane")})).into_response()
}

async fn update_profile(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    backend.recorded.lock().unwrap().update_bodies.push(body.clone());
    let name = body["full_name"].as_str().unwrap_or("Jane").to_string();
    Json(json!({"status": "success", "message": "Profile updated", "data": profile_json(&id, &name)}))
        .into_response()
}

async fn collect_multipart(backend: &Backend, mut multipart: Multipart) {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.unwrap();
        let mut recorded = backend.recorded.lock().unwrap();
        if file_name.is_some() {
            recorded.files.push(UploadedFile {
                field: name,
                file_name,
                content_type,
                len: bytes.len(),
            });
        } else {
            recorded
                .donation_fields
                .insert(name, String::from_utf8_lossy(&bytes).to_string());
        }
    }
}

async fn upload_picture(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    collect_multipart(&backend, multipart).await;
    let mut profile = profile_json(&id, "Jane");
    profile["profile_picture"] = json!("/uploads/jane.png");
    Json(json!({"status": "success", "message": "Picture uploaded", "data": profile})).into_response()
}

async fn create_donation(
    State(backend): State<Backend>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    collect_multipart(&backend, multipart).await;
    let recorded = backend.recorded.lock().unwrap();
    if recorded.fail_donations {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "error", "message": "Database unavailable"})),
        )
            .into_response();
    }
    let food_item = recorded.donation_fields.get("food_item").cloned().unwrap_or_default();
    (
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Donation created",
            "data": {"donation_id": 55, "food_item": food_item, "status": "available"}
        })),
    )
        .into_response()
}

async fn list_donations(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    backend.recorded.lock().unwrap().queries.push(query);
    Json(json!({
        "status": "success",
        "message": "Donations loaded",
        "data": [
            {"donation_id": 1, "food_item": "Soup", "quantity": "2", "status": "available"},
            {"donation_id": 2, "food_item": "Bread", "quantity": 6, "status": "claimed"}
        ],
        "total": 12,
        "page": 1,
        "limit": 2,
        "total_pages": 6
    }))
    .into_response()
}

async fn available_foods(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let page = query.get("page").map(String::as_str).unwrap_or("1").to_string();
    backend.recorded.lock().unwrap().queries.push(query);
    // ignores max_distance on purpose; two items per page
    let data = if page == "1" {
        json!([
            {"donation_id": 1, "food_item": "Rice and Curry", "distance": 1.2},
            {"donation_id": 2, "food_item": "Fruit Basket", "distance": 4.7}
        ])
    } else {
        json!([{"donation_id": 3, "food_item": "Market Crates", "distance": 12.0}])
    };
    Json(json!({
        "status": "success",
        "data": data,
        "total": 3,
        "page": page.parse::<u32>().unwrap_or(1),
        "limit": 2,
        "total_pages": 2
    }))
    .into_response()
}

fn request_row(id: u64, donation_id: &Value, quantity: &Value, purpose: &Value) -> Value {
    json!({
        "request_id": id,
        "donation_id": donation_id,
        "requester_id": 101,
        "quantity_requested": quantity,
        "purpose": purpose,
        "status": "pending",
        "created_at": "Sat, 17 Oct 2026 18:00:00 GMT"
    })
}

async fn create_request(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    backend.recorded.lock().unwrap().request_bodies.push(body.clone());
    if body["donation_id"] == "404" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status": "error",
                "message": "Donation not found or not available",
                "error": "Not found"
            })),
        )
            .into_response();
    }
    let row = request_row(9, &body["donation_id"], &body["quantity_requested"], &body["purpose"]);
    (
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Request created successfully",
            "data": {"request": row}
        })),
    )
        .into_response()
}

async fn pending_requests(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    backend.recorded.lock().unwrap().queries.push(query);
    let mut first = request_row(9, &json!(4), &json!(3), &json!("Shelter dinner"));
    first["requester_name"] = json!("Eastside Pantry");
    first["food_item"] = json!("Soup");
    let second = request_row(8, &json!(2), &json!(1), &json!(""));
    Json(json!({
        "status": "success",
        "message": "Requests retrieved successfully",
        "data": {
            "requests": [first, second],
            "pagination": {"total": 5, "page": 1, "limit": 2, "pages": 3}
        }
    }))
    .into_response()
}

async fn accept_request(headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if id == "404" {
        return (StatusCode::NOT_FOUND, Json(json!({}))).into_response();
    }
    Json(json!({"status": "success", "message": "Request accepted"})).into_response()
}

async fn leaderboard() -> Response {
    Json(json!([
        {"user_id": 3, "full_name": "Jane", "donation_count": 12, "total_quantity": "48"},
        {"user_id": 9, "full_name": "Sam", "donation_count": 4, "total_quantity": null}
    ]))
    .into_response()
}

async fn broken() -> Response {
    (StatusCode::OK, "<html>maintenance</html>").into_response()
}

pub fn router(backend: Backend) -> Router {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/user/profile/{id}", get(profile))
        .route("/api/user/update/{id}", axum::routing::put(update_profile))
        .route("/api/user/upload-profile-picture/{id}", post(upload_picture))
        .route("/api/donations", post(create_donation).get(list_donations))
        .route("/api/food/available", get(available_foods))
        .route("/api/requests", post(create_request))
        .route("/api/requests/pending", get(pending_requests))
        .route("/api/requests/{id}/accept", post(accept_request))
        .route("/api/leaderboard", get(leaderboard))
        .route("/api/leaderboard/monthly", get(broken))
        .with_state(backend)
}

/// Serves the fake backend on an ephemeral port and returns its API base URL.
pub async fn spawn(backend: Backend) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(backend)).await.unwrap();
    });
    format!("http://{addr}/api")
}
