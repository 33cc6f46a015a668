use std::sync::Arc;

use actix_web::{put, web};
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::course::{DBCourseUpdate, RCourseUpdate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthenticatedUser;

/// Replace the mutable fields of a course. Only the owner may do this, and
/// the ownership check runs before payload validation.
#[put("/courses/{id}")]
pub async fn update(
    auth: AuthenticatedUser,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RCourseUpdate>,
) -> ApiResult<()> {
    let (course, _owner) = db.get_course_by_id(&path).await?;
    if course.user_id != auth.0.id {
        return Err(AppError::Forbidden);
    }

    body.validate()?;

    db.update_course(
        course,
        DBCourseUpdate {
            title: body.title.trim().to_string(),
            description: body.description.trim().to_string(),
            estimated_time: body.estimated_time.clone(),
            materials_needed: body.materials_needed.clone(),
        },
    )
    .await?;

    Ok(ApiResponse::NoContent)
}
