use axum::{Json, Router, extract::State, routing::post};

use crate::{
    DbPool,
    data::models::{
        ApiError, School, SchoolLoginForm, Student, StudentLoginForm, Volunteer,
        VolunteerLoginForm,
    },
    data::repositories::{SchoolRepository, StudentRepository, VolunteerRepository},
    features::api::ApiJson,
};

// Logins compare plaintext credentials and hand back the whole record.
// Nothing is issued; the caller keeps the record as its identity.

#[axum::debug_handler]
pub async fn login_school(
    State(pool): State<DbPool>,
    ApiJson(form): ApiJson<SchoolLoginForm>,
) -> Result<Json<School>, ApiError> {
    let mut conn = pool.get()?;

    match SchoolRepository::find_by_credentials(&mut conn, &form.udise_number, &form.password)? {
        Some(school) => Ok(Json(school)),
        None => {
            log::warn!("Failed school login for UDISE {}", form.udise_number);
            Err(ApiError::InvalidCredentials)
        }
    }
}

#[axum::debug_handler]
pub async fn login_volunteer(
    State(pool): State<DbPool>,
    ApiJson(form): ApiJson<VolunteerLoginForm>,
) -> Result<Json<Volunteer>, ApiError> {
    let mut conn = pool.get()?;

    match VolunteerRepository::find_by_credentials(&mut conn, &form.email, &form.password)? {
        Some(volunteer) => Ok(Json(volunteer)),
        None => {
            log::warn!("Failed volunteer login for {}", form.email);
            Err(ApiError::InvalidCredentials)
        }
    }
}

#[axum::debug_handler]
pub async fn login_student(
    State(pool): State<DbPool>,
    ApiJson(form): ApiJson<StudentLoginForm>,
) -> Result<Json<Student>, ApiError> {
    let mut conn = pool.get()?;

    match StudentRepository::find_by_credentials(&mut conn, &form.sap_id, &form.password)? {
        Some(student) => Ok(Json(student)),
        None => {
            log::warn!("Failed student login for SAP id {}", form.sap_id);
            Err(ApiError::InvalidCredentials)
        }
    }
}

pub fn login_router() -> Router<DbPool> {
    Router::new()
        .route("/school/login", post(login_school))
        .route("/volunteer/login", post(login_volunteer))
        .route("/student/login", post(login_student))
}
