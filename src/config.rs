//! Typed configuration sections — all deployment input comes from
//! environment variables.
//!
//! A variable the platform did not inject yields an empty slot; deciding
//! whether that is fatal is the wrapped tracker's job, not ours. The only
//! hard failures are overrides that are present but unparseable.

use std::fmt;

use crate::env;
use crate::error::ConfigError;
use crate::types::{AccessLevel, DbDriver, FileUploadMethod, MailTransport, SmtpConnectionMode};

/// Minimum length the installation requires of the crypto master salt.
pub const MIN_SALT_LEN: usize = 16;

/// Everything the adapter hands to the wrapped tracker, plus our own
/// log filter.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Log level filter.
    pub log_level: String,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub account: AccountConfig,
    pub mail: MailConfig,
    pub uploads: UploadConfig,
    pub branding: BrandingConfig,
}

impl DeployConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "sawfly_deployconf=info".into()),
            database: DatabaseConfig::from_env(),
            security: SecurityConfig::from_env(),
            account: AccountConfig::from_env(),
            mail: MailConfig::from_env()?,
            uploads: UploadConfig::from_env()?,
            branding: BrandingConfig::from_env(),
        })
    }
}

// ═══════════════════════════════════════════════════════════════
// Database
// ═══════════════════════════════════════════════════════════════

/// Connection parameters for the tracker's relational database.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    /// Uninterpreted text; composed into the hostname slot as-is.
    pub port: String,
    pub database: String,
    pub username: String,
    pub password: String,
    pub driver: DbDriver,
}

impl DatabaseConfig {
    fn from_env() -> Self {
        Self {
            host: env::string(env::RDS_HOSTNAME),
            port: env::string(env::RDS_PORT),
            database: env::string(env::RDS_DB_NAME),
            username: env::string(env::RDS_USERNAME),
            password: env::string(env::RDS_PASSWORD),
            driver: DbDriver::Postgres,
        }
    }

    /// The tracker's hostname slot is `host:port` in one string.
    /// Absent variables degrade to `":"`, an effectively empty slot.
    pub fn hostname(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("driver", &self.driver)
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════
// Security
// ═══════════════════════════════════════════════════════════════

/// Installation-unique secrets. The adapter neither generates nor
/// validates the salt; see [`SecurityConfig::salt_meets_minimum`].
#[derive(Clone)]
pub struct SecurityConfig {
    pub crypto_master_salt: String,
}

impl SecurityConfig {
    fn from_env() -> Self {
        Self {
            crypto_master_salt: env::string(env::CRYPTO_MASTER_SALT),
        }
    }

    /// Whether the salt satisfies the installation requirement of a
    /// random string of at least [`MIN_SALT_LEN`] chars. Advisory only.
    pub fn salt_meets_minimum(&self) -> bool {
        self.crypto_master_salt.len() >= MIN_SALT_LEN
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("crypto_master_salt", &"<redacted>")
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════
// Accounts
// ═══════════════════════════════════════════════════════════════

/// Site account policy. The four toggles are deployment policy fixed at
/// build time; only the optional slots read the environment.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    pub allow_signup: bool,
    pub allow_anonymous_login: bool,
    /// Account used for anonymous access, when enabled.
    pub anonymous_account: Option<String>,
    pub show_realname: bool,
    /// Access level from which real names are visible.
    pub show_user_realname_threshold: AccessLevel,
    /// Page shown after login, when overridden.
    pub default_home_page: Option<String>,
}

impl AccountConfig {
    fn from_env() -> Self {
        Self {
            allow_signup: true,
            allow_anonymous_login: false,
            anonymous_account: None,
            show_realname: true,
            show_user_realname_threshold: AccessLevel::Reporter,
            default_home_page: env::optional(env::DEFAULT_HOME_PAGE),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// Mail
// ═══════════════════════════════════════════════════════════════

/// Settings for the tracker's mailer. Credentials come from the
/// platform; host, port and connection mode are deployment overrides.
#[derive(Clone)]
pub struct MailConfig {
    pub transport: MailTransport,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub connection_mode: SmtpConnectionMode,
    pub smtp_username: String,
    pub smtp_password: String,
    /// Site contact shown to users and used for bounces.
    pub webmaster_email: String,
    /// The "From:" field in outgoing mail.
    pub from_email: String,
    /// Return address for bounced mail.
    pub return_path_email: String,
    pub from_name: Option<String>,
}

impl MailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            transport: MailTransport::Smtp,
            smtp_host: env::optional(env::SMTP_HOST).unwrap_or_else(|| "localhost".into()),
            smtp_port: env::parsed(env::SMTP_PORT, 465)?,
            connection_mode: env::parsed(env::SMTP_CONNECTION_MODE, SmtpConnectionMode::Ssl)?,
            smtp_username: env::string(env::SMTP_USERNAME),
            smtp_password: env::string(env::SMTP_PASSWORD),
            webmaster_email: env::string(env::WEBMASTER_EMAIL),
            from_email: env::string(env::FROM_EMAIL),
            return_path_email: env::string(env::RETURN_PATH_EMAIL),
            from_name: env::optional(env::FROM_NAME),
        })
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("transport", &self.transport)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("connection_mode", &self.connection_mode)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"<redacted>")
            .field("webmaster_email", &self.webmaster_email)
            .field("from_email", &self.from_email)
            .field("return_path_email", &self.return_path_email)
            .field("from_name", &self.from_name)
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════
// Uploads
// ═══════════════════════════════════════════════════════════════

/// Attachment handling. Uploads go to the mounted volume.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub allow_file_upload: bool,
    pub method: FileUploadMethod,
    /// Mount path with the trailing `/` the tracker requires.
    pub default_upload_folder: String,
    /// Upper bound on a single attachment, in bytes.
    pub max_file_size: u64,
    /// Extension allowlist; empty means no restriction.
    pub allowed_files: Vec<String>,
    /// Extension denylist; empty means no restriction.
    pub disallowed_files: Vec<String>,
}

impl UploadConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            allow_file_upload: true,
            method: FileUploadMethod::Disk,
            default_upload_folder: ensure_trailing_slash(env::string(env::MOUNT_DIRECTORY)),
            max_file_size: env::parsed(env::MAX_FILE_SIZE, 5_000_000)?,
            allowed_files: env::list(env::ALLOWED_FILE_EXTENSIONS),
            disallowed_files: env::list(env::DISALLOWED_FILE_EXTENSIONS),
        })
    }
}

/// The tracker rejects upload folders without a trailing slash.
fn ensure_trailing_slash(mut path: String) -> String {
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

// ═══════════════════════════════════════════════════════════════
// Branding
// ═══════════════════════════════════════════════════════════════

/// Site presentation slots.
#[derive(Debug, Clone)]
pub struct BrandingConfig {
    pub window_title: String,
    pub logo_image: String,
    pub favicon_image: String,
}

impl BrandingConfig {
    fn from_env() -> Self {
        Self {
            window_title: env::optional(env::WINDOW_TITLE).unwrap_or_else(|| "Sawfly".into()),
            logo_image: env::optional(env::LOGO_IMAGE)
                .unwrap_or_else(|| "images/sawfly_logo.png".into()),
            favicon_image: env::optional(env::FAVICON_IMAGE)
                .unwrap_or_else(|| "images/favicon.ico".into()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════
