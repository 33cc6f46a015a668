use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;

/// Signup payload. Field names follow the original client's wire format.
/// Missing fields deserialize to empty strings so that every violation is
/// collected into one validation response instead of a serde error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RUserCreate {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

impl RUserCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        if self.first_name.trim().is_empty() {
            errors.push(r#"Please provide a value for "firstName""#.to_string());
        }
        if self.last_name.trim().is_empty() {
            errors.push(r#"Please provide a value for "lastName""#.to_string());
        }
        if self.email_address.trim().is_empty() {
            errors.push(r#"Please provide a value for "emailAddress""#.to_string());
        } else if !is_email(self.email_address.trim()) {
            errors.push("The email address you provided is not valid".to_string());
        }
        if self.password.is_empty() {
            errors.push(r#"Please provide a value for "password""#.to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// Structural check only: one `@` with a dotted domain behind it.
fn is_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub struct DBUserCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// User as exposed over the API. The password hash and the timestamp columns
/// never leave the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRes {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<entity::user::Model> for UserRes {
    fn from(user: entity::user::Model) -> Self {
        UserRes {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUserRes {
    pub authenticated_user: UserRes,
}
