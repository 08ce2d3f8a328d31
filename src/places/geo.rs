//! Geodesic distance and the pan-threshold re-query policy.
//!
//! The map screen re-queries nearby clinics only when its visual center has
//! moved far enough since the last query, to bound request volume while
//! keeping results relevant to the visible region.

use crate::config::REQUERY_THRESHOLD_METERS;
use crate::models::LatLng;

/// Mean Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates, in meters.
pub fn haversine_meters(a: LatLng, b: LatLng) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Tracks the last-queried map center and decides when a pan warrants a
/// fresh nearby search.
#[derive(Debug, Default)]
pub struct PanTracker {
    last_queried: Option<LatLng>,
}

impl PanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given center has moved past the re-query threshold since
    /// the last recorded query. Always true before the first query.
    pub fn should_requery(&self, center: LatLng) -> bool {
        match self.last_queried {
            None => true,
            Some(last) => haversine_meters(last, center) > REQUERY_THRESHOLD_METERS,
        }
    }

    /// Record that a search was issued at this center.
    pub fn mark_queried(&mut self, center: LatLng) {
        self.last_queried = Some(center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Seoul city hall
    const CENTER: LatLng = LatLng {
        latitude: 37.5665,
        longitude: 126.9780,
    };

    #[test]
    fn zero_distance_for_same_point() {
        assert!(haversine_meters(CENTER, CENTER) < 1e-9);
    }

    #[test]
    fn known_distance_roughly_correct() {
        // ~0.009 degrees of latitude is about 1 km
        let north = LatLng::new(CENTER.latitude + 0.009, CENTER.longitude);
        let d = haversine_meters(CENTER, north);
        assert!((d - 1000.0).abs() < 20.0, "distance was {d}");
    }

    #[test]
    fn first_query_always_fires() {
        let tracker = PanTracker::new();
        assert!(tracker.should_requery(CENTER));
    }

    #[test]
    fn small_pan_does_not_requery() {
        let mut tracker = PanTracker::new();
        tracker.mark_queried(CENTER);
        // ~100 m north
        let nearby = LatLng::new(CENTER.latitude + 0.0009, CENTER.longitude);
        assert!(!tracker.should_requery(nearby));
    }

    #[test]
    fn pan_past_threshold_requeries() {
        let mut tracker = PanTracker::new();
        tracker.mark_queried(CENTER);
        // ~1 km north, past the 500 m threshold
        let far = LatLng::new(CENTER.latitude + 0.009, CENTER.longitude);
        assert!(tracker.should_requery(far));
    }
}
