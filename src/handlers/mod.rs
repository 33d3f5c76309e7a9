use axum::Router;

use crate::DbPool;

pub mod auth;
pub mod meetings;
pub mod practice_tests;
pub mod requests;
pub mod students;

/// Every JSON endpoint, to be nested under `/api`.
pub fn api_router() -> Router<DbPool> {
    Router::new()
        .merge(auth::register::register_router())
        .merge(auth::login::login_router())
        .merge(students::students_router())
        .merge(requests::requests_router())
        .merge(meetings::meetings_router())
        .merge(practice_tests::tests_router())
}
