//! Client-side logic: persisted identity, route gating, grading, and a
//! typed client for the REST API.

pub mod api;
pub mod grading;
pub mod guard;
pub mod session;

pub use api::{ApiClient, ClientError, Credentials};
pub use grading::{QuestionResult, TestResult, grade};
pub use guard::{RouteDecision, guard_route, login_route, unknown_route};
pub use session::{AuthSession, AuthStore, UserData};
