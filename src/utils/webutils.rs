use std::sync::Arc;

use actix_web::cookie::{Cookie, CookieJar, Key, SameSite};
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use actix_web_httpauth::extractors::basic::BasicAuth;
use futures_util::future::LocalBoxFuture;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::password;

pub const USER_COOKIE: &str = "user";

/// Key for the signed `user` cookie, shared through app data.
#[derive(Clone)]
pub struct CookieKey(pub Key);

/// Resolved requester. Extracting this runs the whole basic-auth check:
/// parse the Authorization header, load the user by email, verify the
/// password against the stored Argon2 hash. Any failure ends the request
/// with 401.
pub struct AuthenticatedUser(pub entity::user::Model);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let credentials = BasicAuth::from_request(req, payload);
        let db = req.app_data::<web::Data<Arc<PostgresService>>>().cloned();

        Box::pin(async move {
            let credentials = credentials.await.map_err(|_| AppError::Unauthorized)?;
            let db = db.ok_or_else(|| {
                AppError::Internal("database handle missing from app data".to_string())
            })?;

            let password = credentials.password().ok_or(AppError::Unauthorized)?;
            let user = db
                .get_user_by_email(credentials.user_id())
                .await
                .map_err(|_| AppError::Unauthorized)?;

            if !password::verify(password, &user.password_hash).unwrap_or(false) {
                return Err(AppError::Unauthorized);
            }

            Ok(AuthenticatedUser(user))
        })
    }
}

/// Build the signed `user` cookie set on login. Returns `None` only if the
/// jar refuses the cookie, which a caller treats as "no cookie this time".
pub fn signed_user_cookie(key: &Key, user_id: &str) -> Option<Cookie<'static>> {
    let mut jar = CookieJar::new();
    jar.signed_mut(key).add(
        Cookie::build(USER_COOKIE, user_id.to_owned())
            .path("/")
            .http_only(false)
            .same_site(SameSite::Lax)
            .finish(),
    );
    jar.get(USER_COOKIE).cloned()
}

/// Expired removal cookie for signout.
pub fn clear_user_cookie() -> Option<Cookie<'static>> {
    let mut jar = CookieJar::new();
    let mut stale = Cookie::named(USER_COOKIE);
    stale.set_path("/");
    jar.add_original(stale.clone());
    jar.remove(stale);
    jar.delta().next().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> Key {
        Key::derive_from(b"an-extremely-well-kept-secret-of-at-least-32-bytes")
    }

    #[test]
    fn login_cookie_is_signed() {
        let id = "bb297cc9-f0f1-4c50-8e2c-9e21c837699e";
        let cookie = signed_user_cookie(&test_key(), id).unwrap();
        assert_eq!(cookie.name(), USER_COOKIE);
        // Signed value = signature + original value, so it must differ from
        // the raw id while still embedding it.
        assert_ne!(cookie.value(), id);

        let mut jar = CookieJar::new();
        jar.add_original(cookie);
        let verified = jar.signed(&test_key()).get(USER_COOKIE).unwrap();
        assert_eq!(verified.value(), id);
    }

    #[test]
    fn tampered_cookie_fails_verification() {
        let cookie = signed_user_cookie(&test_key(), "some-user-id").unwrap();
        let mut forged = cookie.clone();
        forged.set_value(format!("{}x", cookie.value()));

        let mut jar = CookieJar::new();
        jar.add_original(forged);
        assert!(jar.signed(&test_key()).get(USER_COOKIE).is_none());
    }

    #[test]
    fn signout_cookie_expires_immediately() {
        let cookie = clear_user_cookie().unwrap();
        assert_eq!(cookie.name(), USER_COOKIE);
        assert_eq!(cookie.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
    }
}
