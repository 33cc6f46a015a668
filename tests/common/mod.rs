use std::sync::Arc;

use course_catalog::db::postgres_service::PostgresService;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
pub mod test_data {
    use course_catalog::types::course::RCourseCreate;
    use course_catalog::types::user::RUserCreate;

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            first_name: "Joe".to_string(),
            last_name: "Smith".to_string(),
            email_address: "joe@smith.com".to_string(),
            password: "joepassword".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            email_address: email.to_string(),
            ..sample_user()
        }
    }

    #[allow(dead_code)]
    pub fn sample_course() -> RCourseCreate {
        RCourseCreate {
            title: "Build a Basic Bookcase".to_string(),
            description: "High-end furniture projects are great to dream about."
                .to_string(),
            estimated_time: Some("12 hours".to_string()),
            materials_needed: Some("* A lumber core plywood".to_string()),
        }
    }
}
