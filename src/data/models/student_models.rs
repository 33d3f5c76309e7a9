use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::students;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub standard: String,
    pub roll_no: String,
    pub sap_id: String,
    pub password: String,
    pub school_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = students)]
pub struct NewStudent<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub standard: &'a str,
    pub roll_no: &'a str,
    pub sap_id: &'a str,
    pub password: &'a str,
    pub school_id: &'a str,
}

/// Submitted by a school when enrolling one of its students.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentCreateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub standard: String,
    #[serde(default)]
    pub roll_no: String,
    #[validate(length(min = 1, message = "sapId is required"))]
    #[serde(default)]
    pub sap_id: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub school_id: String,
}
