//! Deployment configuration adapter for the Sawfly issue tracker.
//!
//! Maps the variables an orchestration platform injects (database endpoint
//! and credentials, SMTP credentials, upload mount, crypto master salt)
//! into the tracker's configuration namespace, alongside this
//! installation's fixed site policy. The tracker itself (request
//! handling, auth, schema, mail delivery, file storage) is a separate,
//! pre-built application; this crate only supplies its parameters.

pub mod config;
pub mod env;
pub mod error;
pub mod render;
pub mod types;
