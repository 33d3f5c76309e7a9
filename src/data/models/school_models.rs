use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::schools;

/// A registered school. Serialized in full, password included.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = schools)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct School {
    #[serde(rename = "_id")]
    pub id: String,
    pub school_name: String,
    pub school_address: String,
    pub udise_number: String,
    pub password: String,
}

#[derive(Insertable)]
#[diesel(table_name = schools)]
pub struct NewSchool<'a> {
    pub id: &'a str,
    pub school_name: &'a str,
    pub school_address: &'a str,
    pub udise_number: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRegisterForm {
    #[serde(default)]
    pub school_name: String,
    #[serde(default)]
    pub school_address: String,
    #[validate(length(min = 1, message = "udiseNumber is required"))]
    #[serde(default)]
    pub udise_number: String,
    #[serde(default)]
    pub password: String,
}
