//! Core data types shared across the diagnosis, chat, and places subsystems.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single raw prediction from the remote classifier.
///
/// Ephemeral — held only for the duration of one diagnosis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "class")]
    pub class_name: String,
    pub confidence: f64,
}

/// Final, user-facing diagnosis result.
///
/// Derived deterministically from a prediction list (or its absence) plus the
/// immutable localization tables. `top_class` is empty only when the request
/// failed before a classification list was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisOutcome {
    pub display_message: String,
    pub top_class: String,
    pub description: String,
}

impl DiagnosisOutcome {
    /// An outcome with no resolved class (transport or parse failure).
    pub fn failure(display_message: impl Into<String>) -> Self {
        Self {
            display_message: display_message.into(),
            top_class: String::new(),
            description: String::new(),
        }
    }
}

/// One message in a chat session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub text: String,
    pub is_from_user: bool,
    pub at: NaiveDateTime,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_user: true,
            at: chrono::Local::now().naive_local(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_user: false,
            at: chrono::Local::now().naive_local(),
        }
    }
}

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A veterinary clinic returned by nearby search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: LatLng,
    pub phone: Option<String>,
    pub website: Option<String>,
}
