use std::sync::Arc;

use actix_web::{get, web};
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::course::{CourseBody, CourseRes};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/courses/{id}")]
pub async fn get(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<CourseBody> {
    let (course, owner) = db.get_course_by_id(&path).await?;
    let owner = owner.ok_or_else(|| {
        AppError::Internal(format!("course {} has no owner row", course.id))
    })?;

    Ok(ApiResponse::Ok(CourseBody {
        course: CourseRes::from((course, owner)),
    }))
}
