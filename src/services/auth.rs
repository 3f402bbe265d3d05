use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::sync::OnceLock;

pub struct PasswordManager;

static INSTANCE: OnceLock<Argon2> = OnceLock::new();
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

impl PasswordManager {
    fn engine() -> &'static Argon2<'static> {
        INSTANCE.get_or_init(|| {
            let params = Params::new(
                19 * 1024, // 19MB Memory (m)
                2,         // 2 Iterations (t)
                1,         // 1 Parallelism lane (p)
                None,      // Default hash length (32 bytes)
            )
            .unwrap_or_default();

            Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
        })
    }

    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        let result = Self::engine().verify_password(password.as_bytes(), &parsed_hash);

        match result {
            Ok(_) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Verifies against `stored_hash`, or against a throwaway hash when there is no
    /// account, so unknown emails cost the same time as wrong passwords.
    pub fn verify_credentials(password: &str, stored_hash: Option<&str>) -> bool {
        match stored_hash {
            Some(hash) => Self::verify_password(password, hash).unwrap_or_else(|e| {
                log::error!("Stored password hash is unreadable: {}", e);
                false
            }),
            None => {
                let dummy = DUMMY_HASH.get_or_init(|| {
                    Self::hash_password("dummy_password_for_timing").unwrap_or_default()
                });
                let _ = Self::verify_password(password, dummy);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = PasswordManager::hash_password("Pallet-Wrap-42").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(PasswordManager::verify_password("Pallet-Wrap-42", &hash).unwrap());
        assert!(!PasswordManager::verify_password("pallet-wrap-42", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = PasswordManager::hash_password("same").unwrap();
        let b = PasswordManager::hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(PasswordManager::verify_password("x", "not-a-phc-string").is_err());
        assert!(!PasswordManager::verify_credentials("x", Some("not-a-phc-string")));
    }

    #[test]
    fn missing_account_never_verifies() {
        assert!(!PasswordManager::verify_credentials("dummy_password_for_timing", None));
    }
}
