use crate::data::models::{CreateMeetingForm, Meeting, NewMeeting};
use crate::schema::meetings;
use crate::utils::ids::new_id;
use diesel::prelude::*;

pub struct MeetingRepository;

impl MeetingRepository {
    pub fn create(
        conn: &mut SqliteConnection,
        form: &CreateMeetingForm,
        volunteer_id: &str,
    ) -> Result<Meeting, diesel::result::Error> {
        let id = new_id();

        diesel::insert_into(meetings::table)
            .values(&NewMeeting {
                id: &id,
                volunteer_id,
                title: &form.title,
                start_time: &form.start_time,
                end_time: &form.end_time,
                standard: form.standard,
                location: &form.location,
                description: &form.description,
            })
            .execute(conn)?;

        meetings::table
            .find(id.as_str())
            .select(Meeting::as_select())
            .first(conn)
    }

    pub fn list_by_standard(
        conn: &mut SqliteConnection,
        standard: i32,
    ) -> Result<Vec<Meeting>, diesel::result::Error> {
        meetings::table
            .filter(meetings::standard.eq(standard))
            .select(Meeting::as_select())
            .load(conn)
    }

    pub fn list_by_volunteer(
        conn: &mut SqliteConnection,
        volunteer_id: &str,
    ) -> Result<Vec<Meeting>, diesel::result::Error> {
        meetings::table
            .filter(meetings::volunteer_id.eq(volunteer_id))
            .select(Meeting::as_select())
            .load(conn)
    }
}
