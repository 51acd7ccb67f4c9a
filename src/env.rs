//! Environment access — every variable the adapter reads, by name.
//!
//! The orchestration platform injects the RDS_*, SMTP_*, MOUNT_DIRECTORY
//! and CRYPTO_MASTER_SALT variables; the rest are optional deployment
//! overrides. A missing variable is never an error here — the wrapped
//! application's own startup validation decides what is fatal.

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

// ═══════════════════════════════════════════════════════════════
// Variable names
// ═══════════════════════════════════════════════════════════════

// Injected by the platform.
pub const RDS_HOSTNAME: &str = "RDS_HOSTNAME";
pub const RDS_PORT: &str = "RDS_PORT";
pub const RDS_DB_NAME: &str = "RDS_DB_NAME";
pub const RDS_USERNAME: &str = "RDS_USERNAME";
pub const RDS_PASSWORD: &str = "RDS_PASSWORD";
pub const CRYPTO_MASTER_SALT: &str = "CRYPTO_MASTER_SALT";
pub const SMTP_USERNAME: &str = "SMTP_USERNAME";
pub const SMTP_PASSWORD: &str = "SMTP_PASSWORD";
pub const MOUNT_DIRECTORY: &str = "MOUNT_DIRECTORY";

// Deployment overrides.
pub const SMTP_HOST: &str = "SMTP_HOST";
pub const SMTP_PORT: &str = "SMTP_PORT";
pub const SMTP_CONNECTION_MODE: &str = "SMTP_CONNECTION_MODE";
pub const WEBMASTER_EMAIL: &str = "WEBMASTER_EMAIL";
pub const FROM_EMAIL: &str = "FROM_EMAIL";
pub const RETURN_PATH_EMAIL: &str = "RETURN_PATH_EMAIL";
pub const FROM_NAME: &str = "FROM_NAME";
pub const MAX_FILE_SIZE: &str = "MAX_FILE_SIZE";
pub const ALLOWED_FILE_EXTENSIONS: &str = "ALLOWED_FILE_EXTENSIONS";
pub const DISALLOWED_FILE_EXTENSIONS: &str = "DISALLOWED_FILE_EXTENSIONS";
pub const WINDOW_TITLE: &str = "WINDOW_TITLE";
pub const LOGO_IMAGE: &str = "LOGO_IMAGE";
pub const FAVICON_IMAGE: &str = "FAVICON_IMAGE";
pub const DEFAULT_HOME_PAGE: &str = "DEFAULT_HOME_PAGE";
pub const CONFIG_OUT: &str = "CONFIG_OUT";

// ═══════════════════════════════════════════════════════════════
// Read helpers
// ═══════════════════════════════════════════════════════════════

/// Value of `name`, or the empty string when unset.
/// The wrapped application receives the empty slot as-is.
pub fn string(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

/// Value of `name` when set and non-empty.
pub fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Parse `name` into `T`, falling back to `default` when unset.
/// Fails when the value is present but does not parse.
pub fn parsed<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            var: name,
            reason: e.to_string(),
        }),
    }
}

/// Comma-separated list. Entries are trimmed; empties dropped.
pub fn list(name: &str) -> Vec<String> {
    env::var(name)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

// ═══════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════

/// Tests that touch the process environment serialize on this lock;
/// `std::env` is process-global and cargo runs tests in parallel.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_defaults_to_empty() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var("SAWFLY_TEST_MISSING");
        assert_eq!(string("SAWFLY_TEST_MISSING"), "");
    }

    #[test]
    fn optional_filters_empty_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("SAWFLY_TEST_EMPTY", "");
        assert_eq!(optional("SAWFLY_TEST_EMPTY"), None);
        env::set_var("SAWFLY_TEST_EMPTY", "value");
        assert_eq!(optional("SAWFLY_TEST_EMPTY"), Some("value".into()));
        env::remove_var("SAWFLY_TEST_EMPTY");
    }

    #[test]
    fn parsed_falls_back_when_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var("SAWFLY_TEST_PORT");
        let port: u16 = parsed("SAWFLY_TEST_PORT", 465).unwrap();
        assert_eq!(port, 465);
    }

    #[test]
    fn parsed_rejects_garbage() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("SAWFLY_TEST_PORT", "not-a-port");
        let err = parsed::<u16>("SAWFLY_TEST_PORT", 465).unwrap_err();
        assert!(err.to_string().contains("SAWFLY_TEST_PORT"));
        env::remove_var("SAWFLY_TEST_PORT");
    }

    #[test]
    fn list_splits_and_trims() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("SAWFLY_TEST_LIST", "png, jpg ,,gif");
        assert_eq!(list("SAWFLY_TEST_LIST"), vec!["png", "jpg", "gif"]);
        env::remove_var("SAWFLY_TEST_LIST");
        assert!(list("SAWFLY_TEST_LIST").is_empty());
    }
}
