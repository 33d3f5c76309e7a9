mod common;

use axum::http::StatusCode;
use common::*;
use std::collections::BTreeSet;

fn ids(body: &serde_json::Value) -> BTreeSet<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|s| s["_id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn filter_returns_exactly_the_schools_students() {
    let app = test_app();
    let north = register_school(&app, "100").await;
    let south = register_school(&app, "200").await;

    let north_students: BTreeSet<String> = [
        create_student(&app, "N-1", &north).await,
        create_student(&app, "N-2", &north).await,
    ]
    .into_iter()
    .collect();
    let south_student = create_student(&app, "S-1", &south).await;

    let (status, body) = get(&app, &format!("/api/students/bySchool/{north}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), north_students);

    let (_, body) = get(&app, &format!("/api/students/bySchool/{south}")).await;
    assert_eq!(ids(&body), BTreeSet::from([south_student]));

    let (_, body) = get(&app, "/api/students").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn school_without_students_gets_an_empty_list() {
    let app = test_app();
    let school = register_school(&app, "300").await;

    let (status, body) = get(&app, &format!("/api/students/bySchool/{school}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn malformed_school_id_is_a_bad_request() {
    let app = test_app();
    let (status, body) = get(&app, "/api/students/bySchool/xyz").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
