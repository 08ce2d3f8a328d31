//! Dogtor core — the client-side pipeline behind the Dogtor pet-health app.
//!
//! Three remote collaborators do the heavy lifting: an image classifier for
//! eye/skin conditions, a language model constrained to a pet-health persona,
//! and a places service for nearby veterinary clinics. The genuine decision
//! logic lives in [`diagnose::ResultInterpreter`], which turns a raw
//! prediction list into a localized, human-readable outcome.
//!
//! Control flow for one diagnosis:
//! capture → [`image_encode`] → [`diagnose::RoboflowClient`] →
//! [`diagnose::ResultInterpreter`] → render.

pub mod chat;
pub mod config;
pub mod diagnose;
pub mod image_encode;
pub mod josa;
pub mod locale;
pub mod models;
pub mod places;
pub mod session;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding application.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core starting v{}", config::APP_NAME, config::APP_VERSION);
}
