use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::schema::requests;

/// A school's posted need for a tutor. `volunteer_id` stays `None` until a
/// volunteer accepts it.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = requests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TeachingRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject_name: String,
    pub date: String,
    pub topic_name: String,
    pub description: String,
    pub school_name: String,
    pub school_id: String,
    pub volunteer_id: Option<String>,
}

impl TeachingRequest {
    pub fn is_assigned(&self) -> bool {
        self.volunteer_id.is_some()
    }
}

#[derive(Insertable)]
#[diesel(table_name = requests)]
pub struct NewTeachingRequest<'a> {
    pub id: &'a str,
    pub subject_name: &'a str,
    pub date: &'a str,
    pub topic_name: &'a str,
    pub description: &'a str,
    pub school_name: &'a str,
    pub school_id: &'a str,
    pub volunteer_id: Option<&'a str>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestForm {
    #[serde(default)]
    pub subject_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub topic_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub school_name: String,
    #[serde(default)]
    pub school_id: String,
    #[serde(default)]
    pub volunteer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequestForm {
    pub request_id: String,
    pub volunteer_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignResponse {
    pub message: String,
    pub updated_request: TeachingRequest,
}
