use std::sync::Arc;

use actix_web::{post, web};

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate};
use crate::utils::password;

/// Signup. Field violations and a taken email address all come back as one
/// 400 with the collected messages.
#[post("/users")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<()> {
    body.validate()?;

    let password_hash = password::hash(&body.password)
        .map_err(|e| AppError::Internal(format!("failed to hash password: {e}")))?;

    db.create_user(DBUserCreate {
        first_name: body.first_name.trim().to_string(),
        last_name: body.last_name.trim().to_string(),
        email: body.email_address.trim().to_string(),
        password_hash,
    })
    .await?;

    Ok(ApiResponse::Created {
        location: "/".to_string(),
    })
}
