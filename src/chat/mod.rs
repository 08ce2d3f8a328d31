//! AI Dogtor chat assistant: persona prompt, remote client, and the
//! session transcript.

pub mod openai;
pub mod persona;
pub mod transcript;

pub use openai::*;
pub use transcript::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Cannot reach chat service at {0}")]
    Connection(String),

    #[error("Chat service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}
