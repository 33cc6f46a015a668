use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    /// Key material for the signed `user` cookie. Must be at least 32 bytes.
    pub cookie_secret: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env("PORT").parse().unwrap_or(8080),
            db_url: Self::get_env("DATABASE_URL"),
            cookie_secret: Self::get_env("COOKIE_SECRET"),
        }
    }
}
