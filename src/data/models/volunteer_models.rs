use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::volunteers;
use crate::utils::lenient::one_or_many;

/// Row as stored: list columns hold JSON arrays.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = volunteers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VolunteerRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub experience: String,
    pub availability: String,
    pub subjects: String,
    pub standards: String,
    pub password: String,
}

#[derive(Insertable)]
#[diesel(table_name = volunteers)]
pub struct NewVolunteer<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub experience: &'a str,
    pub availability: String,
    pub subjects: String,
    pub standards: String,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub experience: String,
    /// Weekdays the volunteer can teach on.
    pub availability: Vec<String>,
    pub subjects: Vec<String>,
    /// Standards (grade levels) the volunteer is willing to teach.
    pub standard: Vec<String>,
    pub password: String,
}

impl TryFrom<VolunteerRow> for Volunteer {
    type Error = serde_json::Error;

    fn try_from(row: VolunteerRow) -> Result<Self, Self::Error> {
        Ok(Volunteer {
            availability: serde_json::from_str(&row.availability)?,
            subjects: serde_json::from_str(&row.subjects)?,
            standard: serde_json::from_str(&row.standards)?,
            id: row.id,
            name: row.name,
            email: row.email,
            experience: row.experience,
            password: row.password,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VolunteerRegisterForm {
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub availability: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub subjects: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub standard: Vec<String>,
    #[serde(default)]
    pub password: String,
}
