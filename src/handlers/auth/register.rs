use axum::{Json, Router, extract::State, routing::post};
use validator::Validate;

use crate::{
    DbPool,
    data::models::{
        ApiError, CreatedResponse, SchoolRegisterForm, StudentCreateForm, VolunteerRegisterForm,
    },
    data::repositories::{SchoolRepository, StudentRepository, VolunteerRepository},
    features::api::ApiJson,
    utils::ids::parse_id,
};

#[axum::debug_handler]
pub async fn register_school(
    State(pool): State<DbPool>,
    ApiJson(form): ApiJson<SchoolRegisterForm>,
) -> Result<Json<CreatedResponse>, ApiError> {
    form.validate()?;

    let mut conn = pool.get()?;
    let school = SchoolRepository::create(&mut conn, &form).map_err(|e| {
        log::warn!("School registration failed for {}: {}", form.udise_number, e);
        ApiError::Store(e)
    })?;

    log::info!("New school registered: {}", school.udise_number);
    Ok(Json(CreatedResponse::new(
        "School registered successfully",
        school.id,
    )))
}

#[axum::debug_handler]
pub async fn register_volunteer(
    State(pool): State<DbPool>,
    ApiJson(form): ApiJson<VolunteerRegisterForm>,
) -> Result<Json<CreatedResponse>, ApiError> {
    form.validate()?;

    let mut conn = pool.get()?;
    let volunteer = VolunteerRepository::create(&mut conn, &form).map_err(|e| {
        log::warn!("Volunteer registration failed for {}: {}", form.email, e);
        ApiError::Store(e)
    })?;

    log::info!("New volunteer registered: {}", volunteer.email);
    Ok(Json(CreatedResponse::new(
        "Volunteer registered successfully",
        volunteer.id,
    )))
}

/// Schools enrol their own students; there is no student self sign-up.
#[axum::debug_handler]
pub async fn create_student(
    State(pool): State<DbPool>,
    ApiJson(form): ApiJson<StudentCreateForm>,
) -> Result<Json<CreatedResponse>, ApiError> {
    form.validate()?;
    let school_id = parse_id(&form.school_id, "schoolId")?;

    let mut conn = pool.get()?;
    let student = StudentRepository::create(&mut conn, &form, &school_id).map_err(|e| {
        log::warn!("Student creation failed for {}: {}", form.sap_id, e);
        ApiError::Store(e)
    })?;

    log::info!("Student {} enrolled at school {}", student.sap_id, school_id);
    Ok(Json(CreatedResponse::new("Student created", student.id)))
}

pub fn register_router() -> Router<DbPool> {
    Router::new()
        .route("/school/register", post(register_school))
        .route("/volunteer/register", post(register_volunteer))
        .route("/student/create", post(create_student))
}
