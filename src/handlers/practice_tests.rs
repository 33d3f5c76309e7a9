use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    DbPool,
    data::models::{ApiError, CreateTestForm, CreatedResponse, Test, TestSummary},
    data::repositories::TestRepository,
    features::api::ApiJson,
    utils::ids::parse_id,
};

pub async fn create_test(
    State(pool): State<DbPool>,
    ApiJson(form): ApiJson<CreateTestForm>,
) -> Result<Json<CreatedResponse>, ApiError> {
    form.validate()?;
    let volunteer_id = parse_id(&form.volunteer_id, "volunteerId")?;

    let mut conn = pool.get()?;
    let test = TestRepository::create(&mut conn, &form, &volunteer_id)?;

    log::info!(
        "Volunteer {} created test {} with {} questions",
        volunteer_id,
        test.id,
        test.questions.len()
    );
    Ok(Json(CreatedResponse::new("Test created", test.id)))
}

pub async fn list_tests(State(pool): State<DbPool>) -> Result<Json<Vec<TestSummary>>, ApiError> {
    let mut conn = pool.get()?;
    let tests = TestRepository::list_all(&mut conn)?;
    Ok(Json(tests.iter().map(TestSummary::from).collect()))
}

pub async fn tests_by_standard(
    State(pool): State<DbPool>,
    Path(standard): Path<String>,
) -> Result<Json<Vec<TestSummary>>, ApiError> {
    let mut conn = pool.get()?;
    let tests = TestRepository::list_by_standard(&mut conn, &standard)?;
    Ok(Json(tests.iter().map(TestSummary::from).collect()))
}

/// Full test including the correct answers; grading happens on the client.
pub async fn get_test(
    State(pool): State<DbPool>,
    Path(test_id): Path<String>,
) -> Result<Json<Test>, ApiError> {
    let test_id = parse_id(&test_id, "testId")?;
    let mut conn = pool.get()?;
    TestRepository::find_by_id(&mut conn, &test_id)?
        .map(Json)
        .ok_or(ApiError::NotFound("Test"))
}

pub fn tests_router() -> Router<DbPool> {
    Router::new()
        .route("/tests", get(list_tests))
        .route("/tests/create", post(create_test))
        .route("/tests/standard/{standard}", get(tests_by_standard))
        .route("/tests/{test_id}", get(get_test))
}
