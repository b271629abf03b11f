use clap::Parser;
use once_cell::sync::Lazy;

pub const SESSION_COOKIE_NAME: &str = "session_token";

// 30 days, matching the session lifetime of the dashboard this replaces
pub const SESSION_EXPIRY_SECONDS: i64 = 30 * 24 * 60 * 60;

pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,

    #[clap(long, env, default_value_t = true)]
    pub swagger_enabled: bool,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    #[clap(long, env)]
    pub database_url: String,

    /// HMAC secret for the session token cookie
    #[clap(long, env)]
    pub session_secret: String,

    #[clap(long, env, default_value = "*")]
    pub cors_allowed_origins: String,

    /// When both admin_email and admin_password are set, a bootstrap admin
    /// is created at startup if none exists (same effect as POST /init).
    #[clap(long, env)]
    pub admin_email: Option<String>,

    #[clap(long, env)]
    pub admin_password: Option<String>,

    #[clap(long, env, default_value = "local")]
    pub app_env: String,
}
