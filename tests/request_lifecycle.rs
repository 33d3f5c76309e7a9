mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

fn contains(list: &serde_json::Value, id: &str) -> bool {
    list.as_array()
        .unwrap()
        .iter()
        .any(|r| r["_id"].as_str() == Some(id))
}

#[tokio::test]
async fn assign_moves_request_out_of_unassigned() {
    let app = test_app();
    let school = register_school(&app, "100").await;
    let volunteer = register_volunteer(&app, "meera@example.org").await;
    let request = create_request(&app, &school, "Maths").await;

    let (status, unassigned) = get(&app, "/api/requests/unassigned").await;
    assert_eq!(status, StatusCode::OK);
    assert!(contains(&unassigned, &request));

    let (status, body) = put(
        &app,
        "/api/requests/assign",
        json!({"requestId": request, "volunteerId": volunteer}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Volunteer assigned to request");
    assert_eq!(body["updatedRequest"]["volunteerId"], volunteer);

    let (_, unassigned) = get(&app, "/api/requests/unassigned").await;
    assert!(!contains(&unassigned, &request));

    let (_, by_school) = get(&app, &format!("/api/requests/bySchool/{school}")).await;
    let stored = by_school
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["_id"] == request)
        .unwrap();
    assert_eq!(stored["volunteerId"], volunteer);
    assert_eq!(stored["subjectName"], "Maths");
}

#[tokio::test]
async fn new_requests_start_with_null_volunteer() {
    let app = test_app();
    let school = register_school(&app, "100").await;
    create_request(&app, &school, "Science").await;

    let (_, by_school) = get(&app, &format!("/api/requests/bySchool/{school}")).await;
    assert_eq!(by_school[0]["volunteerId"], serde_json::Value::Null);
}

#[tokio::test]
async fn by_school_excludes_other_schools() {
    let app = test_app();
    let a = register_school(&app, "100").await;
    let b = register_school(&app, "200").await;
    let mine = create_request(&app, &a, "Maths").await;
    create_request(&app, &b, "English").await;

    let (_, by_school) = get(&app, &format!("/api/requests/bySchool/{a}")).await;
    assert_eq!(by_school.as_array().unwrap().len(), 1);
    assert!(contains(&by_school, &mine));
}

#[tokio::test]
async fn assigning_unknown_request_is_404() {
    let app = test_app();
    let volunteer = register_volunteer(&app, "meera@example.org").await;

    let (status, body) = put(
        &app,
        "/api/requests/assign",
        json!({"requestId": uuid::Uuid::new_v4().to_string(), "volunteerId": volunteer}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Request not found");
}

#[tokio::test]
async fn malformed_ids_are_400() {
    let app = test_app();
    let school = register_school(&app, "100").await;
    let request = create_request(&app, &school, "Maths").await;

    let (status, _) = put(
        &app,
        "/api/requests/assign",
        json!({"requestId": "bogus", "volunteerId": uuid::Uuid::new_v4().to_string()}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = put(
        &app,
        "/api/requests/assign",
        json!({"requestId": request, "volunteerId": "bogus"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// Known race: accepts are unconditional, so both succeed and the last write stays.
// The handlers never yield, so `join_all` finishes them in submission order.
#[tokio::test]
async fn concurrent_accepts_both_succeed_and_last_write_wins() {
    let app = test_app();
    let school = register_school(&app, "100").await;
    let first = register_volunteer(&app, "first@example.org").await;
    let second = register_volunteer(&app, "second@example.org").await;
    let request = create_request(&app, &school, "Maths").await;

    let accept = |volunteer: String| {
        let app = app.clone();
        let request = request.clone();
        async move {
            put(
                &app,
                "/api/requests/assign",
                json!({"requestId": request, "volunteerId": volunteer}),
            )
            .await
        }
    };

    let results = futures_util::future::join_all([accept(first.clone()), accept(second.clone())]).await;
    for (status, _) in &results {
        assert_eq!(*status, StatusCode::OK);
    }

    let (_, by_school) = get(&app, &format!("/api/requests/bySchool/{school}")).await;
    let winner = by_school[0]["volunteerId"].as_str().unwrap().to_string();
    assert_eq!(winner, second);

    let answered: Vec<String> = results
        .iter()
        .map(|(_, body)| body["updatedRequest"]["volunteerId"].as_str().unwrap().to_string())
        .collect();
    assert!(answered.contains(&winner));
}
