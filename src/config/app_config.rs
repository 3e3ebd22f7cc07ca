use std::{env, path::PathBuf, str::FromStr};

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
    pub static_files: StaticConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// `*` anywhere in the list opens CORS to every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub password_scheme: PasswordScheme,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone)]
pub struct StaticConfig {
    pub dir: PathBuf,
}

/// How passwords are stored in `usuarios.password`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordScheme {
    /// Salted bcrypt hashes. Legacy MD5 rows are upgraded on successful login.
    Bcrypt,
    /// Unsalted MD5 computed by MySQL, for tables that must stay readable by older clients.
    Md5,
}

impl FromStr for PasswordScheme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(PasswordScheme::Bcrypt),
            "md5" => Ok(PasswordScheme::Md5),
            other => Err(AppError::ConfigError(format!(
                "Invalid PASSWORD_SCHEME value: {}",
                other
            ))),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("JWT_SECRET not set".to_string()))?;

        let bcrypt_cost: u32 = parse_var("BCRYPT_COST", &var("BCRYPT_COST", "12"))?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(AppError::ConfigError(
                "BCRYPT_COST must be between 4 and 31".to_string(),
            ));
        }

        let token_ttl_secs: i64 =
            parse_var("JWT_TTL_SECONDS", &var("JWT_TTL_SECONDS", "3600"))?;
        if token_ttl_secs <= 0 {
            return Err(AppError::ConfigError(
                "JWT_TTL_SECONDS must be positive".to_string(),
            ));
        }

        Ok(Self {
            server: ServerConfig {
                host: var("HOST", "0.0.0.0"),
                port: parse_var("PORT", &var("PORT", "3000"))?,
                max_body_size: parse_var("MAX_BODY_SIZE", &var("MAX_BODY_SIZE", "1048576"))?,
            },
            database: DatabaseConfig {
                url: var("DB_URL", "mysql://root@localhost:3306/tienda"),
                max_connections: parse_var(
                    "DB_MAX_CONNECTIONS",
                    &var("DB_MAX_CONNECTIONS", "10"),
                )?,
                run_migrations: parse_bool(
                    "DB_RUN_MIGRATIONS",
                    &var("DB_RUN_MIGRATIONS", "true"),
                )?,
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            auth: AuthConfig {
                jwt_secret,
                token_ttl_secs,
                password_scheme: var("PASSWORD_SCHEME", "bcrypt").parse()?,
                bcrypt_cost,
            },
            static_files: StaticConfig {
                dir: PathBuf::from(var("STATIC_DIR", "frontend")),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::ConfigError(format!("Invalid {} value", key)))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::ConfigError(format!("Invalid {} value", key))),
    }
}
