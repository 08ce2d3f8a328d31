//! Google Places nearby-search client.
//!
//! One operation: a radius-bounded search for veterinary clinics around a
//! coordinate, returning up to a fixed maximum of place records.

use serde::{Deserialize, Serialize};

use super::PlacesError;
use crate::config::{MAX_SEARCH_RESULTS, SEARCH_RADIUS_METERS, VETERINARY_PLACE_TYPE};
use crate::models::{Hospital, LatLng};

/// Fields requested from the places service.
const FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,\
places.location,places.nationalPhoneNumber,places.websiteUri";

/// Fallback display values for records missing optional text fields.
const UNNAMED: &str = "이름 없음";
const NO_ADDRESS: &str = "주소 없음";

/// Radius-bounded nearby search for a category of points of interest.
pub trait NearbySearch {
    fn search_nearby(&self, center: LatLng) -> Result<Vec<Hospital>, PlacesError>;
}

/// Blocking client for `POST {base}/v1/places:searchNearby`.
pub struct GooglePlacesClient {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl GooglePlacesClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Client for the production endpoint.
    pub fn production() -> Self {
        Self::new(
            crate::config::PLACES_BASE_URL,
            crate::config::places_api_key(),
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchNearbyRequest {
    included_types: Vec<&'static str>,
    max_result_count: u32,
    location_restriction: LocationRestriction,
}

#[derive(Serialize)]
struct LocationRestriction {
    circle: Circle,
}

#[derive(Serialize)]
struct Circle {
    center: LatLng,
    radius: f64,
}

fn build_request(center: LatLng) -> SearchNearbyRequest {
    SearchNearbyRequest {
        included_types: vec![VETERINARY_PLACE_TYPE],
        max_result_count: MAX_SEARCH_RESULTS,
        location_restriction: LocationRestriction {
            circle: Circle {
                center,
                radius: SEARCH_RADIUS_METERS,
            },
        },
    }
}

#[derive(Deserialize, Default)]
struct SearchNearbyResponse {
    #[serde(default)]
    places: Vec<PlaceRecord>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PlaceRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    display_name: Option<LocalizedText>,
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    location: Option<LatLng>,
    #[serde(default)]
    national_phone_number: Option<String>,
    #[serde(default)]
    website_uri: Option<String>,
}

#[derive(Deserialize, Default)]
struct LocalizedText {
    #[serde(default)]
    text: String,
}

/// Parse the search response into clinic records. Places without a
/// coordinate are skipped; missing names and addresses degrade to fixed
/// fallback strings.
pub fn parse_places(body: &str) -> Result<Vec<Hospital>, PlacesError> {
    let parsed: SearchNearbyResponse =
        serde_json::from_str(body).map_err(|e| PlacesError::ResponseParsing(e.to_string()))?;

    let hospitals = parsed
        .places
        .into_iter()
        .filter_map(|place| {
            let location = place.location?;
            Some(Hospital {
                id: place.id.unwrap_or_else(|| "unknown".to_string()),
                name: place
                    .display_name
                    .map(|n| n.text)
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| UNNAMED.to_string()),
                address: place
                    .formatted_address
                    .unwrap_or_else(|| NO_ADDRESS.to_string()),
                location,
                phone: place.national_phone_number,
                website: place.website_uri,
            })
        })
        .collect();

    Ok(hospitals)
}

impl NearbySearch for GooglePlacesClient {
    fn search_nearby(&self, center: LatLng) -> Result<Vec<Hospital>, PlacesError> {
        let _span = tracing::info_span!(
            "places_search",
            lat = center.latitude,
            lng = center.longitude,
        )
        .entered();

        let url = format!("{}/v1/places:searchNearby", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&build_request(center))
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    PlacesError::Connection(self.base_url.clone())
                } else {
                    PlacesError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| PlacesError::HttpClient(e.to_string()))?;

        if !status.is_success() {
            return Err(PlacesError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let hospitals = parse_places(&text)?;
        tracing::info!(results = hospitals.len(), "nearby search complete");
        Ok(hospitals)
    }
}

/// Mock nearby search for testing.
pub struct MockNearbySearch {
    hospitals: Vec<Hospital>,
}

impl MockNearbySearch {
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        Self { hospitals }
    }
}

impl NearbySearch for MockNearbySearch {
    fn search_nearby(&self, _center: LatLng) -> Result<Vec<Hospital>, PlacesError> {
        Ok(self.hospitals.clone())
    }
}
