use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use actix_web::HttpRequest;

/// Attempts recorded under one key, with the window they were checked against.
struct Bucket {
    window: Duration,
    hits: Vec<SystemTime>,
}

impl Bucket {
    fn prune(&mut self, now: SystemTime) {
        let window = self.window;
        self.hits
            .retain(|&time| now.duration_since(time).unwrap_or(Duration::from_secs(0)) < window);
    }
}

/// Simple in-memory rate limiter
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Bucket>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Records an attempt under `key`.
    /// Returns false once `max_requests` attempts already fall inside `window`.
    /// Every key's expired attempts are dropped on each call, so idle keys do not accumulate.
    pub fn check_rate_limit(&self, key: &str, max_requests: usize, window: Duration) -> bool {
        let now = SystemTime::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        requests.retain(|_, bucket| {
            bucket.prune(now);
            !bucket.hits.is_empty()
        });

        let bucket = requests.entry(key.to_string()).or_insert_with(|| Bucket {
            window,
            hits: Vec::new(),
        });
        bucket.window = window;
        bucket.prune(now);

        if bucket.hits.len() >= max_requests {
            return false;
        }

        bucket.hits.push(now);
        true
    }

    /// Forgets all attempts under `key`, e.g. after a successful login.
    pub fn reset(&self, key: &str) {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key);
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rate-limit key for the caller. The socket peer is used unless `trust_proxy` is set,
/// in which case `Forwarded` / `X-Forwarded-For` from the reverse proxy are honoured.
pub fn client_key(req: &HttpRequest, scope: &str, trust_proxy: bool) -> String {
    let ip = if trust_proxy {
        req.connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string()
    } else {
        req.peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    };
    format!("{scope}:{ip}")
}

/// Admin password policy
pub struct PasswordValidator;

impl PasswordValidator {
    const MIN_LENGTH: usize = 12;

    pub fn validate(password: &str) -> Result<(), String> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(format!(
                "Password must be at least {} characters",
                Self::MIN_LENGTH
            ));
        }

        let classes = [
            password.chars().any(|c| c.is_uppercase()),
            password.chars().any(|c| c.is_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_alphanumeric()),
        ];

        if classes.iter().filter(|&&met| met).count() < 3 {
            return Err(
                "Password must contain at least 3 of: uppercase, lowercase, digit, special character"
                    .to_string(),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limiter_blocks_after_limit() {
        let limiter = RateLimiter::new();
        let window = Duration::from_secs(60);

        for _ in 0..3 {
            assert!(limiter.check_rate_limit("login:10.0.0.1", 3, window));
        }
        assert!(!limiter.check_rate_limit("login:10.0.0.1", 3, window));
        assert!(limiter.check_rate_limit("login:10.0.0.2", 3, window));

        limiter.reset("login:10.0.0.1");
        assert!(limiter.check_rate_limit("login:10.0.0.1", 3, window));
    }

    #[test]
    fn rate_limiter_window_expires() {
        let limiter = RateLimiter::new();
        assert!(limiter.check_rate_limit("k", 1, Duration::ZERO));
        assert!(limiter.check_rate_limit("k", 1, Duration::ZERO));
    }

    #[test]
    fn rate_limiter_prunes_expired_keys() {
        let limiter = RateLimiter::new();

        for i in 0..50 {
            assert!(limiter.check_rate_limit(&format!("contact:10.1.0.{i}"), 10, Duration::ZERO));
        }
        assert_eq!(limiter.tracked_keys(), 1);

        let window = Duration::from_secs(60);
        assert!(limiter.check_rate_limit("login:10.2.0.1", 5, window));
        assert!(limiter.check_rate_limit("login:10.2.0.2", 5, window));
        assert_eq!(limiter.tracked_keys(), 2);
    }

    #[test]
    fn client_key_ignores_forwarded_headers_by_default() {
        use actix_web::test::TestRequest;

        let req = TestRequest::default()
            .peer_addr("203.0.113.7:5000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "10.9.9.9"))
            .to_http_request();

        assert_eq!(client_key(&req, "login", false), "login:203.0.113.7");
        assert_eq!(client_key(&req, "login", true), "login:10.9.9.9");
    }

    #[test]
    fn password_policy() {
        assert!(PasswordValidator::validate("Short1!").is_err());
        assert!(PasswordValidator::validate("alllowercaseletters").is_err());
        assert!(PasswordValidator::validate("Corrugated-Box-2026").is_ok());
        assert!(PasswordValidator::validate("corrugatedbox2026!").is_ok());
    }
}
