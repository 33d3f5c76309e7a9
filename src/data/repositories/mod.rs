pub mod meeting;
pub mod request;
pub mod school;
pub mod student;
pub mod test;
pub mod volunteer;

pub use meeting::MeetingRepository;
pub use request::RequestRepository;
pub use school::SchoolRepository;
pub use student::StudentRepository;
pub use test::TestRepository;
pub use volunteer::VolunteerRepository;
