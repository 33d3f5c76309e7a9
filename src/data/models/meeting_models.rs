use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::meetings;

/// A session scheduled by a volunteer for one standard.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = meetings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[serde(rename = "_id")]
    pub id: String,
    pub volunteer_id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub standard: i32,
    pub location: String,
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = meetings)]
pub struct NewMeeting<'a> {
    pub id: &'a str,
    pub volunteer_id: &'a str,
    pub title: &'a str,
    pub start_time: &'a str,
    pub end_time: &'a str,
    pub standard: i32,
    pub location: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingForm {
    #[serde(default)]
    pub volunteer_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[validate(range(min = 1, max = 10, message = "standard must be between 1 and 10"))]
    pub standard: i32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}
