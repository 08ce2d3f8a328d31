/// Application-level constants
pub const APP_NAME: &str = "Dogtor";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Roboflow hosted inference endpoint (image classification).
pub const CLASSIFIER_BASE_URL: &str = "https://detect.roboflow.com";

/// OpenAI Responses API endpoint (chat assistant).
pub const CHAT_BASE_URL: &str = "https://api.openai.com";

/// Chat model used for the AI Dogtor persona.
pub const CHAT_MODEL: &str = "gpt-4o-mini";

/// Google Places API endpoint (nearby clinic search).
pub const PLACES_BASE_URL: &str = "https://places.googleapis.com";

/// Nearby search radius around the map center, in meters.
pub const SEARCH_RADIUS_METERS: f64 = 5000.0;

/// Maximum number of clinics returned per nearby search.
pub const MAX_SEARCH_RESULTS: u32 = 20;

/// Places category filter for veterinary clinics.
pub const VETERINARY_PLACE_TYPE: &str = "veterinary_care";

/// Minimum map-center pan distance before re-querying, in meters.
pub const REQUERY_THRESHOLD_METERS: f64 = 500.0;

/// A remote classifier model, addressed by id and published version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierModel {
    pub id: &'static str,
    pub version: &'static str,
}

/// Eye condition model.
pub const EYE_MODEL: ClassifierModel = ClassifierModel {
    id: "dog-eye-problems-detection",
    version: "4",
};

/// Skin condition model.
pub const SKIN_MODEL: ClassifierModel = ClassifierModel {
    id: "dog-skin-disease-dataset",
    version: "2",
};

/// Roboflow API key, injected at build time.
pub fn classifier_api_key() -> &'static str {
    option_env!("DOGTOR_ROBOFLOW_API_KEY").unwrap_or("")
}

/// OpenAI API key, injected at build time.
pub fn chat_api_key() -> &'static str {
    option_env!("DOGTOR_OPENAI_API_KEY").unwrap_or("")
}

/// Google Maps/Places API key, injected at build time.
pub fn places_api_key() -> &'static str {
    option_env!("DOGTOR_MAPS_API_KEY").unwrap_or("")
}

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "dogtor=info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_dogtor() {
        assert_eq!(APP_NAME, "Dogtor");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn eye_and_skin_models_differ() {
        assert_ne!(EYE_MODEL.id, SKIN_MODEL.id);
    }

    #[test]
    fn search_limits_match_design() {
        assert_eq!(SEARCH_RADIUS_METERS, 5000.0);
        assert_eq!(MAX_SEARCH_RESULTS, 20);
        assert_eq!(REQUERY_THRESHOLD_METERS, 500.0);
    }
}
