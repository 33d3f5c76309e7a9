use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three kinds of account that can log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    School,
    Volunteer,
    Student,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::School => "school",
            UserType::Volunteer => "volunteer",
            UserType::Student => "student",
        }
    }

    pub fn dashboard_path(&self) -> String {
        format!("/{}/dashboard", self.as_str())
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "school" => Ok(UserType::School),
            "volunteer" => Ok(UserType::Volunteer),
            "student" => Ok(UserType::Student),
            other => Err(format!("unknown user type: {other}")),
        }
    }
}

// Login forms. Missing fields deserialize as empty strings and simply fail to match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolLoginForm {
    #[serde(default)]
    pub udise_number: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerLoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentLoginForm {
    #[serde(default)]
    pub sap_id: String,
    #[serde(default)]
    pub password: String,
}

/// Generic acknowledgement returned by every create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: String,
}

impl CreatedResponse {
    pub fn new(message: &str, id: String) -> Self {
        Self {
            message: message.to_string(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_round_trips_through_its_name() {
        for kind in [UserType::School, UserType::Volunteer, UserType::Student] {
            assert_eq!(kind.as_str().parse::<UserType>(), Ok(kind));
        }
        assert!("admin".parse::<UserType>().is_err());
    }

    #[test]
    fn dashboard_path_is_scoped_by_role() {
        assert_eq!(UserType::Volunteer.dashboard_path(), "/volunteer/dashboard");
    }
}
