//! sawfly-deployconf — deployment configuration adapter for Sawfly.
//!
//! Reads the variables the orchestration platform injects, assembles the
//! tracker's configuration namespace, and emits it as JSON: to the path
//! named by `CONFIG_OUT` when set, otherwise to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info, warn};

use sawfly_deployconf::config::{DeployConfig, MIN_SALT_LEN};
use sawfly_deployconf::env;
use sawfly_deployconf::render::ConfigNamespace;

fn main() -> ExitCode {
    // Load .env if present (local dev).
    let _ = dotenvy::dotenv();

    let config = match DeployConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not up yet; stderr is all we have.
            eprintln!("sawfly-deployconf: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(true)
        .init();

    info!("sawfly-deployconf starting");
    info!(
        db_host = %config.database.host,
        db_name = %config.database.database,
        smtp_host = %config.mail.smtp_host,
        upload_folder = %config.uploads.default_upload_folder,
    );

    if !config.security.salt_meets_minimum() {
        warn!(
            "crypto master salt is missing or shorter than {MIN_SALT_LEN} chars; \
             the tracker's own startup validation may refuse it"
        );
    }

    // ── Emit the namespace ──────────────────────────────────────
    let namespace = ConfigNamespace::from_config(&config);
    match env::optional(env::CONFIG_OUT) {
        Some(path) => {
            let path = PathBuf::from(path);
            if let Err(e) = namespace.write(&path) {
                error!("{e}");
                return ExitCode::FAILURE;
            }
            info!(path = %path.display(), "namespace written");
        }
        None => println!("{}", namespace.to_json_pretty()),
    }

    ExitCode::SUCCESS
}
