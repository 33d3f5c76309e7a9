use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    DbPool,
    data::models::{ApiError, CreateMeetingForm, CreatedResponse, Meeting},
    data::repositories::MeetingRepository,
    features::api::ApiJson,
    utils::ids::parse_id,
};

pub async fn create_meeting(
    State(pool): State<DbPool>,
    ApiJson(form): ApiJson<CreateMeetingForm>,
) -> Result<Json<CreatedResponse>, ApiError> {
    form.validate()?;
    let volunteer_id = parse_id(&form.volunteer_id, "volunteerId")?;

    let mut conn = pool.get()?;
    let meeting = MeetingRepository::create(&mut conn, &form, &volunteer_id)?;

    log::info!(
        "Volunteer {} scheduled meeting {} for standard {}",
        volunteer_id,
        meeting.id,
        meeting.standard
    );
    Ok(Json(CreatedResponse::new("Meeting created", meeting.id)))
}

pub async fn meetings_by_standard(
    State(pool): State<DbPool>,
    Path(standard): Path<String>,
) -> Result<Json<Vec<Meeting>>, ApiError> {
    let standard: i32 = standard
        .trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("Invalid standard: {standard:?}")))?;

    let mut conn = pool.get()?;
    Ok(Json(MeetingRepository::list_by_standard(&mut conn, standard)?))
}

pub async fn meetings_by_volunteer(
    State(pool): State<DbPool>,
    Path(volunteer_id): Path<String>,
) -> Result<Json<Vec<Meeting>>, ApiError> {
    let volunteer_id = parse_id(&volunteer_id, "volunteerId")?;
    let mut conn = pool.get()?;
    Ok(Json(MeetingRepository::list_by_volunteer(&mut conn, &volunteer_id)?))
}

pub fn meetings_router() -> Router<DbPool> {
    Router::new()
        .route("/meetings/create", post(create_meeting))
        .route("/meetings/byStandard/{standard}", get(meetings_by_standard))
        .route("/meetings/byVolunteer/{volunteer_id}", get(meetings_by_volunteer))
}
