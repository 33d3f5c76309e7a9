use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::schema::tests;
use crate::utils::lenient::int_or_string;

/// One multiple-choice question. `correct_answer` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_question"))]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: usize,
}

fn validate_question(question: &Question) -> Result<(), ValidationError> {
    if question.correct_answer >= question.options.len() {
        let mut err = ValidationError::new("correct_answer_out_of_range");
        err.message = Some("correctAnswer must index one of the options".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = tests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TestRow {
    pub id: String,
    pub subject: String,
    pub title: String,
    pub standard: String,
    pub description: String,
    pub duration: i32,
    pub volunteer_id: String,
    pub questions: String,
}

#[derive(Insertable)]
#[diesel(table_name = tests)]
pub struct NewTest<'a> {
    pub id: &'a str,
    pub subject: &'a str,
    pub title: &'a str,
    pub standard: &'a str,
    pub description: &'a str,
    pub duration: i32,
    pub volunteer_id: &'a str,
    pub questions: String,
}

/// A full test, answers included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject: String,
    pub title: String,
    pub standard: String,
    pub description: String,
    /// Minutes.
    pub duration: i32,
    pub volunteer_id: String,
    pub questions: Vec<Question>,
}

impl TryFrom<TestRow> for Test {
    type Error = serde_json::Error;

    fn try_from(row: TestRow) -> Result<Self, Self::Error> {
        Ok(Test {
            questions: serde_json::from_str(&row.questions)?,
            id: row.id,
            subject: row.subject,
            title: row.title,
            standard: row.standard,
            description: row.description,
            duration: row.duration,
            volunteer_id: row.volunteer_id,
        })
    }
}

/// Listing shape: everything but the questions themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSummary {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub standard: String,
    pub duration: i32,
    pub description: String,
    pub volunteer_id: String,
    pub question_count: usize,
}

impl From<&Test> for TestSummary {
    fn from(test: &Test) -> Self {
        TestSummary {
            id: test.id.clone(),
            title: test.title.clone(),
            subject: test.subject.clone(),
            standard: test.standard.clone(),
            duration: test.duration,
            description: test.description.clone(),
            volunteer_id: test.volunteer_id.clone(),
            question_count: test.questions.len(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestForm {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub standard: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0, message = "duration cannot be negative"))]
    #[serde(default, deserialize_with = "int_or_string")]
    pub duration: i32,
    #[serde(default)]
    pub volunteer_id: String,
    #[validate(nested)]
    #[serde(default)]
    pub questions: Vec<Question>,
}
