//! Nearby veterinary clinic search.

pub mod geo;
pub mod google;

pub use geo::*;
pub use google::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Cannot reach places service at {0}")]
    Connection(String),

    #[error("Places service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}
