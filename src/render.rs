//! Namespace emission — the flat document handed to the wrapped tracker.
//!
//! Slot names and value shapes follow the tracker's configuration
//! namespace: one flat object, extension lists as comma-separated text,
//! unset optionals as `null`. Field order follows the tracker's
//! configuration sections.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::config::DeployConfig;
use crate::error::ConfigError;

#[derive(Debug, Serialize)]
pub struct ConfigNamespace {
    // Database
    pub hostname: String,
    pub database_name: String,
    pub db_username: String,
    pub db_password: String,
    pub db_type: &'static str,

    // Security
    pub crypto_master_salt: String,

    // Anonymous access / signup
    pub allow_signup: bool,
    pub allow_anonymous_login: bool,
    pub anonymous_account: Option<String>,

    // Email
    pub mail_transport: &'static str,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_connection_mode: &'static str,
    pub smtp_username: String,
    pub smtp_password: String,
    pub webmaster_email: String,
    pub from_email: String,
    pub return_path_email: String,
    pub from_name: Option<String>,

    // Attachments / file uploads
    pub allow_file_upload: bool,
    pub file_upload_method: &'static str,
    pub default_upload_folder: String,
    pub max_file_size: u64,
    pub allowed_files: String,
    pub disallowed_files: String,

    // Branding
    pub window_title: String,
    pub logo_image: String,
    pub favicon_image: String,

    // Real names
    pub show_realname: bool,
    pub show_user_realname_threshold: &'static str,

    // Others
    pub default_home_page: Option<String>,
}

impl ConfigNamespace {
    pub fn from_config(config: &DeployConfig) -> Self {
        Self {
            hostname: config.database.hostname(),
            database_name: config.database.database.clone(),
            db_username: config.database.username.clone(),
            db_password: config.database.password.clone(),
            db_type: config.database.driver.as_str(),

            crypto_master_salt: config.security.crypto_master_salt.clone(),

            allow_signup: config.account.allow_signup,
            allow_anonymous_login: config.account.allow_anonymous_login,
            anonymous_account: config.account.anonymous_account.clone(),

            mail_transport: config.mail.transport.as_str(),
            smtp_host: config.mail.smtp_host.clone(),
            smtp_port: config.mail.smtp_port,
            smtp_connection_mode: config.mail.connection_mode.as_str(),
            smtp_username: config.mail.smtp_username.clone(),
            smtp_password: config.mail.smtp_password.clone(),
            webmaster_email: config.mail.webmaster_email.clone(),
            from_email: config.mail.from_email.clone(),
            return_path_email: config.mail.return_path_email.clone(),
            from_name: config.mail.from_name.clone(),

            allow_file_upload: config.uploads.allow_file_upload,
            file_upload_method: config.uploads.method.as_str(),
            default_upload_folder: config.uploads.default_upload_folder.clone(),
            max_file_size: config.uploads.max_file_size,
            allowed_files: config.uploads.allowed_files.join(","),
            disallowed_files: config.uploads.disallowed_files.join(","),

            window_title: config.branding.window_title.clone(),
            logo_image: config.branding.logo_image.clone(),
            favicon_image: config.branding.favicon_image.clone(),

            show_realname: config.account.show_realname,
            show_user_realname_threshold: config.account.show_user_realname_threshold.as_str(),

            default_home_page: config.account.default_home_page.clone(),
        }
    }

    /// The document handed to the wrapped application.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("namespace is serializable")
    }

    /// Persist the namespace for the wrapped application to pick up.
    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let mut doc = self.to_json_pretty();
        doc.push('\n');
        fs::write(path, doc).map_err(|source| ConfigError::Emit {
            path: path.to_path_buf(),
            source,
        })
    }
}

// ═══════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AccountConfig, BrandingConfig, DatabaseConfig, MailConfig, SecurityConfig, UploadConfig,
    };
    use crate::types::{
        AccessLevel, DbDriver, FileUploadMethod, MailTransport, SmtpConnectionMode,
    };

    fn sample_config() -> DeployConfig {
        DeployConfig {
            log_level: "sawfly_deployconf=info".into(),
            database: DatabaseConfig {
                host: "db.internal".into(),
                port: "5432".into(),
                database: "sawfly".into(),
                username: "sawfly_app".into(),
                password: "hunter2".into(),
                driver: DbDriver::Postgres,
            },
            security: SecurityConfig {
                crypto_master_salt: "0123456789abcdef".into(),
            },
            account: AccountConfig {
                allow_signup: true,
                allow_anonymous_login: false,
                anonymous_account: None,
                show_realname: true,
                show_user_realname_threshold: AccessLevel::Reporter,
                default_home_page: None,
            },
            mail: MailConfig {
                transport: MailTransport::Smtp,
                smtp_host: "smtp.example.net".into(),
                smtp_port: 465,
                connection_mode: SmtpConnectionMode::Ssl,
                smtp_username: "mailer".into(),
                smtp_password: "mailpass".into(),
                webmaster_email: "tracker@example.net".into(),
                from_email: "noreply@example.net".into(),
                return_path_email: "bounces@example.net".into(),
                from_name: None,
            },
            uploads: UploadConfig {
                allow_file_upload: true,
                method: FileUploadMethod::Disk,
                default_upload_folder: "/var/lib/sawfly/uploads/".into(),
                max_file_size: 5_000_000,
                allowed_files: vec!["png".into(), "txt".into()],
                disallowed_files: vec![],
            },
            branding: BrandingConfig {
                window_title: "Sawfly".into(),
                logo_image: "images/sawfly_logo.png".into(),
                favicon_image: "images/favicon.ico".into(),
            },
        }
    }

    #[test]
    fn emits_expected_slots() {
        let ns = ConfigNamespace::from_config(&sample_config());
        let doc: serde_json::Value = serde_json::from_str(&ns.to_json_pretty()).unwrap();

        assert_eq!(doc["hostname"], "db.internal:5432");
        assert_eq!(doc["db_type"], "pgsql");
        assert_eq!(doc["crypto_master_salt"], "0123456789abcdef");
        assert_eq!(doc["allow_signup"], true);
        assert_eq!(doc["allow_anonymous_login"], false);
        assert_eq!(doc["mail_transport"], "smtp");
        assert_eq!(doc["smtp_port"], 465);
        assert_eq!(doc["smtp_connection_mode"], "ssl");
        assert_eq!(doc["file_upload_method"], "disk");
        assert_eq!(doc["default_upload_folder"], "/var/lib/sawfly/uploads/");
        assert_eq!(doc["allowed_files"], "png,txt");
        assert_eq!(doc["disallowed_files"], "");
        assert_eq!(doc["show_user_realname_threshold"], "reporter");
    }

    #[test]
    fn unset_optionals_are_null() {
        let ns = ConfigNamespace::from_config(&sample_config());
        let doc: serde_json::Value = serde_json::from_str(&ns.to_json_pretty()).unwrap();

        assert!(doc["anonymous_account"].is_null());
        assert!(doc["from_name"].is_null());
        assert!(doc["default_home_page"].is_null());
    }

    #[test]
    fn writes_namespace_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("effective-config.json");

        let ns = ConfigNamespace::from_config(&sample_config());
        ns.write(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.ends_with('\n'));
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["database_name"], "sawfly");
    }

    #[test]
    fn write_fails_on_missing_directory() {
        let ns = ConfigNamespace::from_config(&sample_config());
        let err = ns
            .write(Path::new("/nonexistent/sawfly/effective-config.json"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sawfly"));
    }
}
