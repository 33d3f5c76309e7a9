use crate::data::models::{NewSchool, School, SchoolRegisterForm};
use crate::schema::schools;
use crate::utils::ids::new_id;
use diesel::prelude::*;

pub struct SchoolRepository;

impl SchoolRepository {
    pub fn create(
        conn: &mut SqliteConnection,
        form: &SchoolRegisterForm,
    ) -> Result<School, diesel::result::Error> {
        let id = new_id();

        diesel::insert_into(schools::table)
            .values(&NewSchool {
                id: &id,
                school_name: &form.school_name,
                school_address: &form.school_address,
                udise_number: &form.udise_number,
                password: &form.password,
            })
            .execute(conn)?;

        schools::table
            .find(id.as_str())
            .select(School::as_select())
            .first(conn)
    }

    /// Plaintext credential match on UDISE number and password.
    pub fn find_by_credentials(
        conn: &mut SqliteConnection,
        udise_number: &str,
        password: &str,
    ) -> Result<Option<School>, diesel::result::Error> {
        schools::table
            .filter(schools::udise_number.eq(udise_number))
            .filter(schools::password.eq(password))
            .select(School::as_select())
            .first(conn)
            .optional()
    }
}
