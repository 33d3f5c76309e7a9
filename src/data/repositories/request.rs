use crate::data::models::{CreateRequestForm, NewTeachingRequest, TeachingRequest};
use crate::schema::requests;
use crate::utils::ids::new_id;
use diesel::prelude::*;

pub struct RequestRepository;

impl RequestRepository {
    /// Ids are expected to be canonical already.
    pub fn create(
        conn: &mut SqliteConnection,
        form: &CreateRequestForm,
        school_id: &str,
        volunteer_id: Option<&str>,
    ) -> Result<TeachingRequest, diesel::result::Error> {
        let id = new_id();

        diesel::insert_into(requests::table)
            .values(&NewTeachingRequest {
                id: &id,
                subject_name: &form.subject_name,
                date: &form.date,
                topic_name: &form.topic_name,
                description: &form.description,
                school_name: &form.school_name,
                school_id,
                volunteer_id,
            })
            .execute(conn)?;

        requests::table
            .find(id.as_str())
            .select(TeachingRequest::as_select())
            .first(conn)
    }

    /// Unconditional update-by-id: whoever writes last owns the request.
    /// Returns `None` when no request has this id.
    pub fn assign_volunteer(
        conn: &mut SqliteConnection,
        request_id: &str,
        volunteer_id: &str,
    ) -> Result<Option<TeachingRequest>, diesel::result::Error> {
        let updated = diesel::update(requests::table.find(request_id))
            .set(requests::volunteer_id.eq(Some(volunteer_id)))
            .execute(conn)?;

        if updated == 0 {
            return Ok(None);
        }

        requests::table
            .find(request_id)
            .select(TeachingRequest::as_select())
            .first(conn)
            .optional()
    }

    pub fn list_unassigned(
        conn: &mut SqliteConnection,
    ) -> Result<Vec<TeachingRequest>, diesel::result::Error> {
        requests::table
            .filter(requests::volunteer_id.is_null())
            .select(TeachingRequest::as_select())
            .load(conn)
    }

    pub fn list_by_school(
        conn: &mut SqliteConnection,
        school_id: &str,
    ) -> Result<Vec<TeachingRequest>, diesel::result::Error> {
        requests::table
            .filter(requests::school_id.eq(school_id))
            .select(TeachingRequest::as_select())
            .load(conn)
    }
}
