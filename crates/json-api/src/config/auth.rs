//! Auth Config

use clap::Args;
use rand::Rng;
use thiserror::Error;

/// Cookie sessions need at least a 64 byte signing key.
const MIN_SESSION_SECRET_BYTES: usize = 64;

#[derive(Debug, Error)]
pub enum SessionKeyError {
    #[error("session secret must be at least {MIN_SESSION_SECRET_BYTES} bytes")]
    TooShort,
}

/// Admin authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// PIN used to seed `admin_pin_hash` on first startup
    #[arg(long, env = "ADMIN_PIN", default_value = "123456")]
    pub admin_pin: String,

    /// Session cookie signing secret; generated per-process when unset
    #[arg(long, env = "SESSION_SECRET")]
    pub session_secret: Option<String>,
}

impl AuthConfig {
    /// The session signing key.
    ///
    /// Uses the configured secret when present, otherwise generates a random
    /// per-process key (sessions then reset on restart).
    ///
    /// # Errors
    ///
    /// Returns an error when a configured secret is too short to sign with.
    pub fn session_key(&self) -> Result<Vec<u8>, SessionKeyError> {
        match &self.session_secret {
            Some(secret) if secret.len() >= MIN_SESSION_SECRET_BYTES => {
                Ok(secret.clone().into_bytes())
            }
            Some(_) => Err(SessionKeyError::TooShort),
            None => {
                let mut key = vec![0u8; MIN_SESSION_SECRET_BYTES];

                rand::thread_rng().fill(key.as_mut_slice());

                Ok(key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn config(secret: Option<&str>) -> AuthConfig {
        AuthConfig {
            admin_pin: "123456".to_string(),
            session_secret: secret.map(str::to_string),
        }
    }

    #[test]
    fn test_configured_secret_is_used_verbatim() -> TestResult {
        let secret = "s".repeat(64);

        let key = config(Some(&secret)).session_key()?;

        assert_eq!(key, secret.into_bytes());

        Ok(())
    }

    #[test]
    fn test_short_secret_is_rejected() {
        assert!(config(Some("too-short")).session_key().is_err());
    }

    #[test]
    fn test_missing_secret_generates_a_full_length_key() -> TestResult {
        let key = config(None).session_key()?;

        assert_eq!(key.len(), MIN_SESSION_SECRET_BYTES);

        Ok(())
    }
}
