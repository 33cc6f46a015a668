use actix_web::{get, web, HttpResponse};

use crate::types::error::AppError;
use crate::types::user::{AuthenticatedUserRes, UserRes};
use crate::utils::webutils::{signed_user_cookie, AuthenticatedUser, CookieKey};

/// Log in: authenticate the Basic credentials and return the matching user.
/// A signed `user` cookie is attached so the client can remember the login.
#[get("/users")]
pub async fn signin(
    auth: AuthenticatedUser,
    key: web::Data<CookieKey>,
) -> Result<HttpResponse, AppError> {
    let user = auth.0;

    let mut resp = HttpResponse::Ok();
    if let Some(cookie) = signed_user_cookie(&key.0, &user.id.to_string()) {
        resp.cookie(cookie);
    }

    Ok(resp.json(AuthenticatedUserRes {
        authenticated_user: UserRes::from(user),
    }))
}
