use crate::data::models::{NewStudent, Student, StudentCreateForm};
use crate::schema::students;
use crate::utils::ids::new_id;
use diesel::prelude::*;

pub struct StudentRepository;

impl StudentRepository {
    /// `school_id` is expected to be canonical already.
    pub fn create(
        conn: &mut SqliteConnection,
        form: &StudentCreateForm,
        school_id: &str,
    ) -> Result<Student, diesel::result::Error> {
        let id = new_id();

        diesel::insert_into(students::table)
            .values(&NewStudent {
                id: &id,
                name: &form.name,
                standard: &form.standard,
                roll_no: &form.roll_no,
                sap_id: &form.sap_id,
                password: &form.password,
                school_id,
            })
            .execute(conn)?;

        students::table
            .find(id.as_str())
            .select(Student::as_select())
            .first(conn)
    }

    pub fn find_by_credentials(
        conn: &mut SqliteConnection,
        sap_id: &str,
        password: &str,
    ) -> Result<Option<Student>, diesel::result::Error> {
        students::table
            .filter(students::sap_id.eq(sap_id))
            .filter(students::password.eq(password))
            .select(Student::as_select())
            .first(conn)
            .optional()
    }

    pub fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Student>, diesel::result::Error> {
        students::table.select(Student::as_select()).load(conn)
    }

    pub fn list_by_school(
        conn: &mut SqliteConnection,
        school_id: &str,
    ) -> Result<Vec<Student>, diesel::result::Error> {
        students::table
            .filter(students::school_id.eq(school_id))
            .select(Student::as_select())
            .load(conn)
    }
}
