use crate::data::models::{CreateTestForm, NewTest, Test, TestRow};
use crate::schema::tests;
use crate::utils::{decode_row, ids::new_id, to_json_column};
use diesel::prelude::*;

pub struct TestRepository;

impl TestRepository {
    /// Stores the test together with its questions in submission order.
    pub fn create(
        conn: &mut SqliteConnection,
        form: &CreateTestForm,
        volunteer_id: &str,
    ) -> Result<Test, diesel::result::Error> {
        let id = new_id();

        diesel::insert_into(tests::table)
            .values(&NewTest {
                id: &id,
                subject: &form.subject,
                title: &form.title,
                standard: &form.standard,
                description: &form.description,
                duration: form.duration,
                volunteer_id,
                questions: to_json_column(&form.questions)?,
            })
            .execute(conn)?;

        Self::find_by_id(conn, &id)?.ok_or(diesel::result::Error::NotFound)
    }

    pub fn find_by_id(
        conn: &mut SqliteConnection,
        test_id: &str,
    ) -> Result<Option<Test>, diesel::result::Error> {
        tests::table
            .find(test_id)
            .select(TestRow::as_select())
            .first(conn)
            .optional()?
            .map(decode_row)
            .transpose()
    }

    pub fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Test>, diesel::result::Error> {
        tests::table
            .select(TestRow::as_select())
            .load(conn)?
            .into_iter()
            .map(decode_row)
            .collect()
    }

    pub fn list_by_standard(
        conn: &mut SqliteConnection,
        standard: &str,
    ) -> Result<Vec<Test>, diesel::result::Error> {
        tests::table
            .filter(tests::standard.eq(standard))
            .select(TestRow::as_select())
            .load(conn)?
            .into_iter()
            .map(decode_row)
            .collect()
    }
}
