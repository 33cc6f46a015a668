use actix_web::cookie::Key;
use actix_web::{web, App};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use course_catalog::{
    db::postgres_service::PostgresService,
    routes::configure_routes,
    types::{course::DBCourseCreate, error::AppError, user::DBUserCreate},
    utils::{password, webutils::CookieKey},
};
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_COOKIE_SECRET: &[u8] = b"integration-test-cookie-secret-with-enough-bytes";

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(CookieKey(Key::derive_from(
                TEST_COOKIE_SECRET,
            ))))
            .configure(configure_routes)
    }

    /// Insert a user directly, the way signup would: hashed password, fresh
    /// id. Returns the id and the email to authenticate with.
    #[allow(dead_code)]
    pub async fn create_test_user(
        &self,
        email: Option<String>,
        raw_password: &str,
    ) -> Result<(Uuid, String), AppError> {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let password_hash = password::hash(raw_password).expect("Failed to hash password");

        let user_id = self
            .db
            .create_user(DBUserCreate {
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                email: email.clone(),
                password_hash,
            })
            .await?;

        Ok((user_id, email))
    }

    #[allow(dead_code)]
    pub async fn seed_course(&self, owner_id: Uuid, title: &str) -> Uuid {
        self.db
            .create_course(DBCourseCreate {
                user_id: owner_id,
                title: title.to_string(),
                description: "Seeded course for tests".to_string(),
                estimated_time: None,
                materials_needed: None,
            })
            .await
            .expect("Failed to seed course")
    }
}

/// `Authorization` header value for HTTP Basic credentials.
#[allow(dead_code)]
pub fn basic_auth(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
}
