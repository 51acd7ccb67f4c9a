//! Value types for the tracker's configuration namespace.
//!
//! The wrapped application understands a fixed vocabulary for its driver,
//! mail transport, upload method and access-level slots; these enums pin
//! that vocabulary instead of passing free text around.

use std::str::FromStr;

// ═══════════════════════════════════════════════════════════════
// Database
// ═══════════════════════════════════════════════════════════════

/// Database driver name expected by the tracker.
/// Deployments here always run Postgres; the enum exists because the
/// slot is a driver name, not arbitrary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbDriver {
    Postgres,
    Mysql,
}

impl DbDriver {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "pgsql",
            Self::Mysql => "mysql",
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// Mail
// ═══════════════════════════════════════════════════════════════

/// How the tracker's mailer hands messages off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTransport {
    Smtp,
    Sendmail,
    Mail,
}

impl MailTransport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Smtp => "smtp",
            Self::Sendmail => "sendmail",
            Self::Mail => "mail",
        }
    }
}

/// SMTP connection security. `Plain` renders as the empty string,
/// which is what the tracker expects for an unencrypted connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpConnectionMode {
    Plain,
    Ssl,
    Tls,
}

impl SmtpConnectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Ssl => "ssl",
            Self::Tls => "tls",
        }
    }
}

impl FromStr for SmtpConnectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Plain),
            "ssl" => Ok(Self::Ssl),
            "tls" => Ok(Self::Tls),
            other => Err(format!("unknown SMTP connection mode '{other}'")),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// Uploads
// ═══════════════════════════════════════════════════════════════

/// Where attachment bytes land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileUploadMethod {
    Disk,
    Database,
}

impl FileUploadMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disk => "disk",
            Self::Database => "database",
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// Access levels
// ═══════════════════════════════════════════════════════════════

/// The tracker's access ladder, lowest to highest.
/// Used as the visibility threshold for real names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccessLevel {
    Viewer,
    Reporter,
    Updater,
    Developer,
    Manager,
    Administrator,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Reporter => "reporter",
            Self::Updater => "updater",
            Self::Developer => "developer",
            Self::Manager => "manager",
            Self::Administrator => "administrator",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_mode_round_trips() {
        for mode in [
            SmtpConnectionMode::Plain,
            SmtpConnectionMode::Ssl,
            SmtpConnectionMode::Tls,
        ] {
            assert_eq!(mode.as_str().parse::<SmtpConnectionMode>(), Ok(mode));
        }
    }

    #[test]
    fn connection_mode_is_case_insensitive() {
        assert_eq!("SSL".parse(), Ok(SmtpConnectionMode::Ssl));
        assert_eq!("Tls".parse(), Ok(SmtpConnectionMode::Tls));
    }

    #[test]
    fn connection_mode_rejects_unknown_tokens() {
        let err = "starttls".parse::<SmtpConnectionMode>().unwrap_err();
        assert!(err.contains("starttls"));
    }

    #[test]
    fn access_levels_order() {
        assert!(AccessLevel::Viewer < AccessLevel::Reporter);
        assert!(AccessLevel::Reporter < AccessLevel::Administrator);
    }

    #[test]
    fn driver_and_method_names() {
        assert_eq!(DbDriver::Postgres.as_str(), "pgsql");
        assert_eq!(FileUploadMethod::Disk.as_str(), "disk");
        assert_eq!(MailTransport::Smtp.as_str(), "smtp");
    }
}
