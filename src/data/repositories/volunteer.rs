use crate::data::models::{NewVolunteer, Volunteer, VolunteerRegisterForm, VolunteerRow};
use crate::schema::volunteers;
use crate::utils::{decode_row, ids::new_id, to_json_column};
use diesel::prelude::*;

pub struct VolunteerRepository;

impl VolunteerRepository {
    pub fn create(
        conn: &mut SqliteConnection,
        form: &VolunteerRegisterForm,
    ) -> Result<Volunteer, diesel::result::Error> {
        let id = new_id();

        diesel::insert_into(volunteers::table)
            .values(&NewVolunteer {
                id: &id,
                name: &form.name,
                email: &form.email,
                experience: &form.experience,
                availability: to_json_column(&form.availability)?,
                subjects: to_json_column(&form.subjects)?,
                standards: to_json_column(&form.standard)?,
                password: &form.password,
            })
            .execute(conn)?;

        let row = volunteers::table
            .find(id.as_str())
            .select(VolunteerRow::as_select())
            .first(conn)?;
        decode_row(row)
    }

    pub fn find_by_credentials(
        conn: &mut SqliteConnection,
        email: &str,
        password: &str,
    ) -> Result<Option<Volunteer>, diesel::result::Error> {
        volunteers::table
            .filter(volunteers::email.eq(email))
            .filter(volunteers::password.eq(password))
            .select(VolunteerRow::as_select())
            .first(conn)
            .optional()?
            .map(decode_row)
            .transpose()
    }
}
