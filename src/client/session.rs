use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::data::models::{School, Student, UserType, Volunteer};

/// The record returned by a successful login, typed by role.
#[derive(Debug, Clone, PartialEq)]
pub enum UserData {
    School(School),
    Volunteer(Volunteer),
    Student(Student),
}

impl UserData {
    pub fn user_type(&self) -> UserType {
        match self {
            UserData::School(_) => UserType::School,
            UserData::Volunteer(_) => UserType::Volunteer,
            UserData::Student(_) => UserType::Student,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            UserData::School(s) => &s.id,
            UserData::Volunteer(v) => &v.id,
            UserData::Student(s) => &s.id,
        }
    }
}

/// A logged-in identity. Nothing in it is verified by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user: UserData,
}

impl AuthSession {
    pub fn new(user: UserData) -> Self {
        Self { user }
    }

    pub fn user_type(&self) -> UserType {
        self.user.user_type()
    }
}

// On-disk layout, same keys the browser client keeps in local storage.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAuth {
    user_data: serde_json::Value,
    user_type: UserType,
}

/// File-backed identity store. Entries never expire; only `logout` clears them.
#[derive(Debug, Clone)]
pub struct AuthStore {
    path: PathBuf,
}

impl AuthStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn login(&self, session: &AuthSession) -> Result<()> {
        let user_data = match &session.user {
            UserData::School(s) => serde_json::to_value(s),
            UserData::Volunteer(v) => serde_json::to_value(v),
            UserData::Student(s) => serde_json::to_value(s),
        }
        .context("Failed to encode user data")?;

        let stored = StoredAuth {
            user_data,
            user_type: session.user_type(),
        };
        let body = serde_json::to_string_pretty(&stored)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        fs::write(&self.path, body)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    /// `Ok(None)` when nobody is logged in.
    pub fn load(&self) -> Result<Option<AuthSession>> {
        let body = match fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()));
            }
        };

        let stored: StoredAuth =
            serde_json::from_str(&body).context("Stored identity is not valid JSON")?;
        let user = match stored.user_type {
            UserType::School => UserData::School(serde_json::from_value(stored.user_data)?),
            UserType::Volunteer => UserData::Volunteer(serde_json::from_value(stored.user_data)?),
            UserType::Student => UserData::Student(serde_json::from_value(stored.user_data)?),
        };
        Ok(Some(AuthSession::new(user)))
    }

    pub fn logout(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", self.path.display())),
        }
    }
}
