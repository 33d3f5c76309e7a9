use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};

use crate::{
    DbPool,
    data::models::{
        ApiError, AssignRequestForm, AssignResponse, CreateRequestForm, CreatedResponse,
        TeachingRequest,
    },
    data::repositories::RequestRepository,
    features::api::ApiJson,
    utils::ids::parse_id,
};

pub async fn create_request(
    State(pool): State<DbPool>,
    ApiJson(form): ApiJson<CreateRequestForm>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let school_id = parse_id(&form.school_id, "schoolId")?;
    let volunteer_id = form
        .volunteer_id
        .as_deref()
        .map(|id| parse_id(id, "volunteerId"))
        .transpose()?;

    let mut conn = pool.get()?;
    let request =
        RequestRepository::create(&mut conn, &form, &school_id, volunteer_id.as_deref())?;

    log::info!(
        "School {} posted request {} for {}",
        school_id,
        request.id,
        request.subject_name
    );
    Ok(Json(CreatedResponse::new(
        "Request created successfully",
        request.id,
    )))
}

/// A volunteer accepts a request. There is no check that the request is
/// still open: concurrent accepts all succeed and the last write is kept.
pub async fn assign_request(
    State(pool): State<DbPool>,
    ApiJson(form): ApiJson<AssignRequestForm>,
) -> Result<Json<AssignResponse>, ApiError> {
    let request_id = parse_id(&form.request_id, "requestId")?;
    let volunteer_id = parse_id(&form.volunteer_id, "volunteerId")?;

    let mut conn = pool.get()?;
    let updated = RequestRepository::assign_volunteer(&mut conn, &request_id, &volunteer_id)?
        .ok_or(ApiError::NotFound("Request"))?;

    log::info!("Volunteer {} assigned to request {}", volunteer_id, request_id);
    Ok(Json(AssignResponse {
        message: "Volunteer assigned to request".to_string(),
        updated_request: updated,
    }))
}

pub async fn unassigned_requests(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<TeachingRequest>>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(RequestRepository::list_unassigned(&mut conn)?))
}

pub async fn requests_by_school(
    State(pool): State<DbPool>,
    Path(school_id): Path<String>,
) -> Result<Json<Vec<TeachingRequest>>, ApiError> {
    let school_id = parse_id(&school_id, "schoolId")?;
    let mut conn = pool.get()?;
    Ok(Json(RequestRepository::list_by_school(&mut conn, &school_id)?))
}

pub fn requests_router() -> Router<DbPool> {
    Router::new()
        .route("/requests/create", post(create_request))
        .route("/requests/assign", put(assign_request))
        .route("/requests/unassigned", get(unassigned_requests))
        .route("/requests/bySchool/{school_id}", get(requests_by_school))
}
