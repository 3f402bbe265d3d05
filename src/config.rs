use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use thiserror::Error;

const MIN_SECRET_LEN: usize = 32;
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Runtime settings, read from the process environment (and `.env` via dotenvy in main).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub cookie_secure: bool,
    pub upload_dir: PathBuf,
    pub upload_base_url: String,
    pub upload_max_bytes: usize,
    pub trust_proxy: bool,
    pub bootstrap_admin: Option<(String, String)>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup so tests need not touch the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let jwt_secret = var("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {MIN_SECRET_LEN} bytes"),
            });
        }

        let token_ttl_hours: i64 = parse_or("TOKEN_TTL_HOURS", var("TOKEN_TTL_HOURS"), 24)?;
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&token_ttl_hours) {
            return Err(ConfigError::Invalid {
                key: "TOKEN_TTL_HOURS",
                reason: format!("must be between 1 and {MAX_TOKEN_TTL_HOURS}"),
            });
        }

        let upload_base_url = match var("UPLOAD_BASE_URL") {
            None => "/uploads".to_string(),
            Some(url) => {
                let url = url.trim_end_matches('/').to_string();
                if url.is_empty() {
                    return Err(ConfigError::Invalid {
                        key: "UPLOAD_BASE_URL",
                        reason: "must name a path or URL other than the site root".to_string(),
                    });
                }
                url
            }
        };

        let bootstrap_admin = match (var("ADMIN_EMAIL"), var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some((email, password)),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("ADMIN_EMAIL")),
        };

        Ok(Self {
            database_url,
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            jwt_secret,
            token_ttl_hours,
            cookie_secure: parse_or("COOKIE_SECURE", var("COOKIE_SECURE"), true)?,
            upload_dir: var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./uploads")),
            upload_base_url,
            upload_max_bytes: parse_or("UPLOAD_MAX_BYTES", var("UPLOAD_MAX_BYTES"), 5 * 1024 * 1024)?,
            trust_proxy: parse_or("TRUST_PROXY", var("TRUST_PROXY"), false)?,
            bootstrap_admin,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        None => {
            log::info!("{key} not set, using default");
            Ok(default)
        }
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let s = settings(&[("DATABASE_URL", "postgres://localhost/packsite"), ("JWT_SECRET", SECRET)])
            .expect("valid settings");

        assert_eq!(s.bind_addr, "0.0.0.0:8080");
        assert_eq!(s.token_ttl_hours, 24);
        assert!(s.cookie_secure);
        assert_eq!(s.upload_dir, PathBuf::from("./uploads"));
        assert_eq!(s.upload_base_url, "/uploads");
        assert_eq!(s.upload_max_bytes, 5 * 1024 * 1024);
        assert!(!s.trust_proxy);
        assert!(s.bootstrap_admin.is_none());
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(
            settings(&[("JWT_SECRET", SECRET)]).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );
    }

    #[test]
    fn short_secret_is_rejected() {
        let err = settings(&[("DATABASE_URL", "postgres://x"), ("JWT_SECRET", "short")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "JWT_SECRET", .. }));
    }

    #[test]
    fn overrides_are_parsed() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", SECRET),
            ("TOKEN_TTL_HOURS", "2"),
            ("COOKIE_SECURE", "false"),
            ("TRUST_PROXY", "true"),
            ("UPLOAD_BASE_URL", "https://cdn.example.com/media/"),
            ("ADMIN_EMAIL", "admin@example.com"),
            ("ADMIN_PASSWORD", "Sturdy-Crate-2026"),
        ])
        .expect("valid settings");

        assert_eq!(s.token_ttl_hours, 2);
        assert!(!s.cookie_secure);
        assert!(s.trust_proxy);
        assert_eq!(s.upload_base_url, "https://cdn.example.com/media");
        assert_eq!(
            s.bootstrap_admin,
            Some(("admin@example.com".to_string(), "Sturdy-Crate-2026".to_string()))
        );
    }

    #[test]
    fn bad_numbers_and_half_admin_are_rejected() {
        let err = settings(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", SECRET),
            ("TOKEN_TTL_HOURS", "soon"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "TOKEN_TTL_HOURS", .. }));

        let err = settings(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", SECRET),
            ("ADMIN_EMAIL", "admin@example.com"),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("ADMIN_PASSWORD"));
    }

    #[test]
    fn token_ttl_is_bounded() {
        for ttl in ["0", "-3", "8761", "9223372036854775807"] {
            let err = settings(&[
                ("DATABASE_URL", "postgres://x"),
                ("JWT_SECRET", SECRET),
                ("TOKEN_TTL_HOURS", ttl),
            ])
            .unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { key: "TOKEN_TTL_HOURS", .. }), "{ttl}");
        }

        let s = settings(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", SECRET),
            ("TOKEN_TTL_HOURS", "8760"),
        ])
        .expect("a year is allowed");
        assert_eq!(s.token_ttl_hours, 8760);
    }

    #[test]
    fn root_upload_base_url_is_rejected() {
        for url in ["/", "///"] {
            let err = settings(&[
                ("DATABASE_URL", "postgres://x"),
                ("JWT_SECRET", SECRET),
                ("UPLOAD_BASE_URL", url),
            ])
            .unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { key: "UPLOAD_BASE_URL", .. }), "{url}");
        }
    }
}
