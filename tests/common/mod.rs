#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use school_connect::{app, db};

/// Fresh router over its own in-memory database.
pub fn test_app() -> Router {
    let pool = db::build_pool(":memory:", 1).expect("in-memory pool");
    app(pool)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Posts to a create endpoint and returns the new record's id.
pub async fn create(app: &Router, uri: &str, body: Value) -> String {
    let (status, value) = post(app, uri, body).await;
    assert_eq!(status, StatusCode::OK, "create at {uri} failed: {value}");
    value["id"].as_str().expect("id in create response").to_string()
}

pub async fn register_school(app: &Router, udise: &str) -> String {
    create(
        app,
        "/api/school/register",
        json!({
            "schoolName": format!("School {udise}"),
            "schoolAddress": "Nashik",
            "udiseNumber": udise,
            "password": "school-pw"
        }),
    )
    .await
}

pub async fn register_volunteer(app: &Router, email: &str) -> String {
    create(
        app,
        "/api/volunteer/register",
        json!({
            "name": "Meera",
            "email": email,
            "experience": "Retired teacher",
            "availability": ["Monday", "Wednesday"],
            "subjects": ["Maths", "Science"],
            "standard": ["5", "6"],
            "password": "volunteer-pw"
        }),
    )
    .await
}

pub async fn create_student(app: &Router, sap_id: &str, school_id: &str) -> String {
    create(
        app,
        "/api/student/create",
        json!({
            "name": format!("Student {sap_id}"),
            "standard": "6",
            "rollNo": "12",
            "sapId": sap_id,
            "password": "student-pw",
            "schoolId": school_id
        }),
    )
    .await
}

pub async fn create_request(app: &Router, school_id: &str, subject: &str) -> String {
    create(
        app,
        "/api/requests/create",
        json!({
            "subjectName": subject,
            "date": "2025-07-14",
            "topicName": "Fractions",
            "description": "Standard 6 needs help with fractions",
            "schoolName": "ZP School",
            "schoolId": school_id
        }),
    )
    .await
}
