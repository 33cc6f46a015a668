use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::user::UserRes;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RCourseCreate {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl RCourseCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_course_fields(&self.title, &self.description)
    }
}

/// PUT payload. Same required fields as creation: a course can never be
/// updated into a title-less or description-less state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RCourseUpdate {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl RCourseUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_course_fields(&self.title, &self.description)
    }
}

fn validate_course_fields(title: &str, description: &str) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if title.trim().is_empty() {
        errors.push(r#"Please provide a value for "title""#.to_string());
    }
    if description.trim().is_empty() {
        errors.push(r#"Please provide a value for "description""#.to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

pub struct DBCourseCreate {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

pub struct DBCourseUpdate {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

/// Course as exposed over the API, with its owner embedded the way the
/// catalog client expects. Timestamps stay server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRes {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user: UserRes,
}

impl From<(entity::course::Model, entity::user::Model)> for CourseRes {
    fn from((course, owner): (entity::course::Model, entity::user::Model)) -> Self {
        CourseRes {
            id: course.id,
            user_id: course.user_id,
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            user: UserRes::from(owner),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct CoursesRes {
    pub courses: Vec<CourseRes>,
}

#[derive(Serialize, Deserialize)]
pub struct CourseBody {
    pub course: CourseRes,
}
