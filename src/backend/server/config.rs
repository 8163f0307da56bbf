/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables.
 * The binary loads `.env` into the process environment before calling
 * `ServerConfig::from_env`.
 *
 * # Variables
 *
 * | Variable | Default |
 * |---|---|
 * | `JWT_SECRET` | required |
 * | `TOKEN_ISSUER` | `trip-planner` |
 * | `TOKEN_TTL_HOURS` | `24` |
 * | `DATABASE_URL` | `sqlite://trip-planner.db` |
 * | `SERVER_PORT` | `8080` |
 * | `STORE_TIMEOUT_SECS` | `5` |
 * | `DB_CONNECT_TIMEOUT_SECS` | `10` |
 * | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |
 *
 * # Error Handling
 *
 * `JWT_SECRET` has no default; startup fails without it. Numbers outside
 * their accepted range are rejected like unparsable ones:
 *
 * - `TOKEN_TTL_HOURS` must lie in `1..=8760`
 * - `BCRYPT_COST` must lie in `4..=31`
 * - both timeouts must be at least one second
 */

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use chrono::TimeDelta;
use thiserror::Error;

use crate::backend::auth::sessions::{DEFAULT_ISSUER, DEFAULT_TOKEN_TTL_HOURS};
use crate::backend::db::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_STORE_TIMEOUT};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://trip-planner.db";
pub const DEFAULT_PORT: u16 = 8080;

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// bcrypt's accepted cost range
pub const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=31;

/// Configuration loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {key} has invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Everything the server needs at startup
#[derive(Clone)]
pub struct ServerConfig {
    pub jwt_secret: String,
    pub token_issuer: String,
    pub token_ttl: TimeDelta,
    pub database_url: String,
    pub port: u16,
    pub store_timeout: Duration,
    pub connect_timeout: Duration,
    pub bcrypt_cost: u32,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("token_issuer", &self.token_issuer)
            .field("token_ttl", &self.token_ttl)
            .field("database_url", &self.database_url)
            .field("port", &self.port)
            .field("store_timeout", &self.store_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish_non_exhaustive()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let ttl_hours = parse_within(
            "TOKEN_TTL_HOURS",
            get("TOKEN_TTL_HOURS"),
            DEFAULT_TOKEN_TTL_HOURS,
            1..=MAX_TOKEN_TTL_HOURS,
        )?;
        let token_ttl = TimeDelta::try_hours(ttl_hours).ok_or(ConfigError::Invalid {
            key: "TOKEN_TTL_HOURS",
            value: ttl_hours.to_string(),
        })?;

        Ok(Self {
            jwt_secret,
            token_issuer: get("TOKEN_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
            token_ttl,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port: parse_or("SERVER_PORT", get("SERVER_PORT"), DEFAULT_PORT)?,
            store_timeout: Duration::from_secs(parse_within(
                "STORE_TIMEOUT_SECS",
                get("STORE_TIMEOUT_SECS"),
                DEFAULT_STORE_TIMEOUT.as_secs(),
                1..=u64::MAX,
            )?),
            connect_timeout: Duration::from_secs(parse_within(
                "DB_CONNECT_TIMEOUT_SECS",
                get("DB_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT.as_secs(),
                1..=u64::MAX,
            )?),
            bcrypt_cost: parse_within(
                "BCRYPT_COST",
                get("BCRYPT_COST"),
                bcrypt::DEFAULT_COST,
                BCRYPT_COST_RANGE,
            )?,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn parse_within<T>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + ToString,
{
    let value = parse_or(key, raw, default)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        })
    }
}
