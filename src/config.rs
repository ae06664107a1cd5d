//! Service configuration from environment variables.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::model::IdPolicy;
use crate::profile::{CatalogProfile, ProfileKind};

/// Bounds for `CATALOG_ID_LENGTH`.
const ID_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 4..=64;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Profile preset with the collection path and id policy overrides applied.
    pub profile: CatalogProfile,
    /// Address to bind.
    pub host: IpAddr,
    /// Server port to listen on.
    pub port: u16,
    /// Preload the profile's sample records.
    pub seed: bool,
    /// Public base URL, used for seed image links.
    pub public_url: String,
    /// Directory served under `/images`, if any.
    pub images_dir: Option<PathBuf>,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Mailbox size of the store actor.
    pub channel_capacity: usize,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CATALOG_PROFILE`: `instruments` or `products` (default: instruments)
    /// - `CATALOG_HOST`: bind address (default: 0.0.0.0)
    /// - `PORT`: server port (default: 3000)
    /// - `CATALOG_COLLECTION_PATH`: route prefix (default: per profile)
    /// - `CATALOG_ID_POLICY`: `random` or `timestamp` (default: per profile)
    /// - `CATALOG_ID_LENGTH`: random id length, 4 to 64 (default: 6)
    /// - `CATALOG_SEED`: load sample records (default: true)
    /// - `CATALOG_PUBLIC_URL`: base URL for seed images (default: http://localhost:3000)
    /// - `CATALOG_IMAGES_DIR`: directory served at `/images` (default: unset)
    /// - `CORS_ALLOWED_ORIGINS`: allowed origins (default: "http://localhost:3001")
    /// - `CATALOG_CHANNEL_CAPACITY`: store mailbox size (default: 32)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let kind: ProfileKind = parse_or(&var, "CATALOG_PROFILE", ProfileKind::Instruments)?;
        let mut profile = CatalogProfile::for_kind(kind);

        if let Some(path) = var("CATALOG_COLLECTION_PATH") {
            profile.collection_path = normalize_collection_path(&path)?;
        }

        let length = parse_or(&var, "CATALOG_ID_LENGTH", crate::model::DEFAULT_TOKEN_LENGTH)?;
        if !ID_LENGTH_RANGE.contains(&length) {
            return Err(ConfigError::InvalidValue {
                name: "CATALOG_ID_LENGTH".to_string(),
                reason: format!(
                    "must be between {} and {}",
                    ID_LENGTH_RANGE.start(),
                    ID_LENGTH_RANGE.end()
                ),
            });
        }
        let policy = parse_or(&var, "CATALOG_ID_POLICY", profile.id_policy)?;
        profile.id_policy = match policy {
            IdPolicy::Random { .. } => IdPolicy::Random { length },
            IdPolicy::Timestamp => IdPolicy::Timestamp,
        };

        let host = parse_or(&var, "CATALOG_HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_or(&var, "PORT", 3000u16)?;

        let seed = match var("CATALOG_SEED") {
            None => true,
            Some(v) => parse_flag(&v).ok_or_else(|| ConfigError::InvalidValue {
                name: "CATALOG_SEED".to_string(),
                reason: format!("expected true or false, got '{}'", v),
            })?,
        };

        let public_url = var("CATALOG_PUBLIC_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| "http://localhost:3000".to_string());

        let images_dir = var("CATALOG_IMAGES_DIR").map(PathBuf::from);

        let cors_allowed_origins =
            var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "http://localhost:3001".to_string());
        validate_origins(&cors_allowed_origins)?;

        let channel_capacity = parse_or(&var, "CATALOG_CHANNEL_CAPACITY", 32usize)?;
        if channel_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                name: "CATALOG_CHANNEL_CAPACITY".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let log_level = var("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            profile,
            host,
            port,
            seed,
            public_url,
            images_dir,
            cors_allowed_origins,
            channel_capacity,
            log_level,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(
    var: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match var(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn normalize_collection_path(raw: &str) -> Result<String, ConfigError> {
    let path = raw.trim().trim_end_matches('/');
    let invalid = |reason: &str| ConfigError::InvalidValue {
        name: "CATALOG_COLLECTION_PATH".to_string(),
        reason: reason.to_string(),
    };

    if !path.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if path.contains(['{', '}', '*', ' ']) {
        return Err(invalid("not a usable route prefix"));
    }
    let mut segments = path[1..].split('/');
    if segments.any(|segment| segment.is_empty() || segment.starts_with(':')) {
        return Err(invalid("segments must be non-empty and must not start with ':'"));
    }
    if path == "/images" || path.starts_with("/images/") {
        return Err(invalid("'/images' is reserved for static files"));
    }
    Ok(path.to_string())
}

fn validate_origins(raw: &str) -> Result<(), ConfigError> {
    if raw.trim() == "*" {
        return Ok(());
    }
    for origin in raw.split(',').map(str::trim) {
        if origin == "*" {
            return Err(ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: "'*' cannot be combined with other origins".to_string(),
            });
        }
        if origin.is_empty() || HeaderValue::from_str(origin).is_err() {
            return Err(ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("invalid origin '{}'", origin),
            });
        }
    }
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
