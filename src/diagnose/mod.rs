//! Diagnosis pipeline: remote image classification and result interpretation.
//!
//! Control flow: encoded photo → [`ClassifyClient::classify`] →
//! [`ResultInterpreter::interpret`] → [`crate::models::DiagnosisOutcome`].

pub mod interpret;
pub mod roboflow;

pub use interpret::*;
pub use roboflow::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Cannot reach classifier at {0}")]
    Connection(String),

    #[error("Classifier returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}
