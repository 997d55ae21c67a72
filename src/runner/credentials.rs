//! Per-run test identity
//!
//! Registration needs an email that has not been seen by the app before.
//! A random suffix gives probabilistic collision avoidance across runs;
//! nothing stronger is needed for a local test target.

use rand::distributions::Alphanumeric;
use rand::Rng;

const SUFFIX_LEN: usize = 8;

/// Credentials synthesized for one run
#[derive(Debug, Clone)]
pub struct GeneratedCredentials {
    pub email: String,
}

impl GeneratedCredentials {
    /// Generate a `test<suffix>@example.com` address with a random
    /// lowercase-alphanumeric suffix.
    pub fn generate() -> Self {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .map(char::from)
            .map(|c| c.to_ascii_lowercase())
            .take(SUFFIX_LEN)
            .collect();

        Self {
            email: format!("test{}@example.com", suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        let creds = GeneratedCredentials::generate();

        assert!(creds.email.starts_with("test"));
        assert!(creds.email.ends_with("@example.com"));

        let suffix = &creds.email["test".len()..creds.email.len() - "@example.com".len()];
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_emails_differ_between_runs() {
        let a = GeneratedCredentials::generate();
        let b = GeneratedCredentials::generate();
        assert_ne!(a.email, b.email);
    }
}
