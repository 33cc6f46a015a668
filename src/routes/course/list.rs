use std::sync::Arc;

use actix_web::{get, web};

use crate::db::postgres_service::PostgresService;
use crate::types::course::{CourseRes, CoursesRes};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

/// Whole catalog, every course with its owner embedded.
#[get("/courses")]
pub async fn list(db: web::Data<Arc<PostgresService>>) -> ApiResult<CoursesRes> {
    let rows = db.get_all_courses().await?;

    let mut courses = Vec::with_capacity(rows.len());
    for (course, owner) in rows {
        let owner = owner.ok_or_else(|| {
            AppError::Internal(format!("course {} has no owner row", course.id))
        })?;
        courses.push(CourseRes::from((course, owner)));
    }

    Ok(ApiResponse::Ok(CoursesRes { courses }))
}
