use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    DbPool,
    data::models::{ApiError, Student},
    data::repositories::StudentRepository,
    utils::ids::parse_id,
};

pub async fn list_students(State(pool): State<DbPool>) -> Result<Json<Vec<Student>>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(StudentRepository::list_all(&mut conn)?))
}

pub async fn students_by_school(
    State(pool): State<DbPool>,
    Path(school_id): Path<String>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let school_id = parse_id(&school_id, "schoolId")?;
    let mut conn = pool.get()?;
    Ok(Json(StudentRepository::list_by_school(&mut conn, &school_id)?))
}

pub fn students_router() -> Router<DbPool> {
    Router::new()
        .route("/students", get(list_students))
        .route("/students/bySchool/{school_id}", get(students_by_school))
}
