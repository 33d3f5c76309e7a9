use crate::client::session::AuthSession;
use crate::data::models::UserType;

/// What the client should do when a route is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(String),
}

pub const LOGIN_PATH: &str = "/login";
pub const LANDING_PATH: &str = "/";

/// Gate for a role-scoped route. Controls navigation only; the API itself
/// answers any caller.
pub fn guard_route(session: Option<&AuthSession>, required: UserType) -> RouteDecision {
    match session {
        None => RouteDecision::Redirect(LOGIN_PATH.to_string()),
        Some(s) if s.user_type() != required => {
            RouteDecision::Redirect(s.user_type().dashboard_path())
        }
        Some(_) => RouteDecision::Render,
    }
}

/// Logged-in users skip the login page.
pub fn login_route(session: Option<&AuthSession>) -> RouteDecision {
    match session {
        Some(s) => RouteDecision::Redirect(s.user_type().dashboard_path()),
        None => RouteDecision::Render,
    }
}

pub fn unknown_route(session: Option<&AuthSession>) -> RouteDecision {
    match session {
        Some(s) => RouteDecision::Redirect(s.user_type().dashboard_path()),
        None => RouteDecision::Redirect(LANDING_PATH.to_string()),
    }
}
