use std::sync::Arc;

use actix_web::{delete, web};
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthenticatedUser;

#[delete("/courses/{id}")]
pub async fn delete(
    auth: AuthenticatedUser,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let (course, _owner) = db.get_course_by_id(&path).await?;
    if course.user_id != auth.0.id {
        return Err(AppError::Forbidden);
    }

    db.delete_course(&course.id).await?;

    Ok(ApiResponse::NoContent)
}
