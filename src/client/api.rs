use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::client::session::{AuthSession, UserData};
use crate::data::models::{
    AssignRequestForm, AssignResponse, CreateMeetingForm, CreateRequestForm, CreateTestForm,
    CreatedResponse, Meeting, School, SchoolLoginForm, SchoolRegisterForm, Student,
    StudentCreateForm, StudentLoginForm, TeachingRequest, Test, TestSummary, Volunteer,
    VolunteerLoginForm, VolunteerRegisterForm,
};

#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with an error body; `message` is shown as-is.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
        }
    }
}

/// What a user types into the login form, per role.
#[derive(Debug, Clone)]
pub enum Credentials {
    School { udise_number: String, password: String },
    Volunteer { email: String, password: String },
    Student { sap_id: String, password: String },
}

/// Thin typed wrapper over the REST API. Calls are independent; nothing is
/// cached or de-duplicated.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/api{}", self.base_url, path);
        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or(text);
        Err(ClientError::Api { status, message })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send::<(), T>(Method::GET, path, None).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn register_school(
        &self,
        form: &SchoolRegisterForm,
    ) -> Result<CreatedResponse, ClientError> {
        self.post("/school/register", form).await
    }

    pub async fn register_volunteer(
        &self,
        form: &VolunteerRegisterForm,
    ) -> Result<CreatedResponse, ClientError> {
        self.post("/volunteer/register", form).await
    }

    pub async fn create_student(
        &self,
        form: &StudentCreateForm,
    ) -> Result<CreatedResponse, ClientError> {
        self.post("/student/create", form).await
    }

    /// Logs in with the role-specific endpoint and wraps the returned record
    /// as a session, ready to be persisted.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ClientError> {
        let user = match credentials {
            Credentials::School {
                udise_number,
                password,
            } => {
                let form = SchoolLoginForm {
                    udise_number: udise_number.clone(),
                    password: password.clone(),
                };
                UserData::School(self.post::<_, School>("/school/login", &form).await?)
            }
            Credentials::Volunteer { email, password } => {
                let form = VolunteerLoginForm {
                    email: email.clone(),
                    password: password.clone(),
                };
                UserData::Volunteer(self.post::<_, Volunteer>("/volunteer/login", &form).await?)
            }
            Credentials::Student { sap_id, password } => {
                let form = StudentLoginForm {
                    sap_id: sap_id.clone(),
                    password: password.clone(),
                };
                UserData::Student(self.post::<_, Student>("/student/login", &form).await?)
            }
        };
        Ok(AuthSession::new(user))
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, ClientError> {
        self.get("/students").await
    }

    pub async fn students_by_school(&self, school_id: &str) -> Result<Vec<Student>, ClientError> {
        self.get(&format!("/students/bySchool/{school_id}")).await
    }

    pub async fn create_request(
        &self,
        form: &CreateRequestForm,
    ) -> Result<CreatedResponse, ClientError> {
        self.post("/requests/create", form).await
    }

    pub async fn assign_request(
        &self,
        request_id: &str,
        volunteer_id: &str,
    ) -> Result<AssignResponse, ClientError> {
        let form = AssignRequestForm {
            request_id: request_id.to_string(),
            volunteer_id: volunteer_id.to_string(),
        };
        self.send(Method::PUT, "/requests/assign", Some(&form)).await
    }

    pub async fn unassigned_requests(&self) -> Result<Vec<TeachingRequest>, ClientError> {
        self.get("/requests/unassigned").await
    }

    pub async fn requests_by_school(
        &self,
        school_id: &str,
    ) -> Result<Vec<TeachingRequest>, ClientError> {
        self.get(&format!("/requests/bySchool/{school_id}")).await
    }

    pub async fn create_meeting(
        &self,
        form: &CreateMeetingForm,
    ) -> Result<CreatedResponse, ClientError> {
        self.post("/meetings/create", form).await
    }

    pub async fn meetings_by_standard(&self, standard: i32) -> Result<Vec<Meeting>, ClientError> {
        self.get(&format!("/meetings/byStandard/{standard}")).await
    }

    pub async fn meetings_by_volunteer(
        &self,
        volunteer_id: &str,
    ) -> Result<Vec<Meeting>, ClientError> {
        self.get(&format!("/meetings/byVolunteer/{volunteer_id}")).await
    }

    pub async fn create_test(&self, form: &CreateTestForm) -> Result<CreatedResponse, ClientError> {
        self.post("/tests/create", form).await
    }

    pub async fn list_tests(&self) -> Result<Vec<TestSummary>, ClientError> {
        self.get("/tests").await
    }

    pub async fn tests_by_standard(&self, standard: &str) -> Result<Vec<TestSummary>, ClientError> {
        self.get(&format!("/tests/standard/{standard}")).await
    }

    pub async fn get_test(&self, test_id: &str) -> Result<Test, ClientError> {
        self.get(&format!("/tests/{test_id}")).await
    }
}
