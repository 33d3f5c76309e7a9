pub mod auth_models;
pub mod error_models;
pub mod meeting_models;
pub mod request_models;
pub mod school_models;
pub mod student_models;
pub mod test_models;
pub mod volunteer_models;

pub use auth_models::{
    CreatedResponse, SchoolLoginForm, StudentLoginForm, UserType, VolunteerLoginForm,
};
pub use error_models::ApiError;
pub use meeting_models::{CreateMeetingForm, Meeting, NewMeeting};
pub use request_models::{
    AssignRequestForm, AssignResponse, CreateRequestForm, NewTeachingRequest, TeachingRequest,
};
pub use school_models::{NewSchool, School, SchoolRegisterForm};
pub use student_models::{NewStudent, Student, StudentCreateForm};
pub use test_models::{CreateTestForm, NewTest, Question, Test, TestRow, TestSummary};
pub use volunteer_models::{NewVolunteer, Volunteer, VolunteerRegisterForm, VolunteerRow};
