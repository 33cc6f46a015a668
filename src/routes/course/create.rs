use std::sync::Arc;

use actix_web::{post, web};

use crate::db::postgres_service::PostgresService;
use crate::types::course::{DBCourseCreate, RCourseCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthenticatedUser;

/// Create a course owned by the authenticated requester. The new resource's
/// URI comes back in the Location header.
#[post("/courses")]
pub async fn create(
    auth: AuthenticatedUser,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RCourseCreate>,
) -> ApiResult<()> {
    body.validate()?;

    let course_id = db
        .create_course(DBCourseCreate {
            user_id: auth.0.id,
            title: body.title.trim().to_string(),
            description: body.description.trim().to_string(),
            estimated_time: body.estimated_time.clone(),
            materials_needed: body.materials_needed.clone(),
        })
        .await?;

    Ok(ApiResponse::Created {
        location: format!("/api/courses/{course_id}"),
    })
}
