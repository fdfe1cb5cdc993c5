use crate::models::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// Inputs are not range-checked; callers pass valid degrees.
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers, unrounded
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2.to_radians() - lon1.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push sqrt(a) just past 1.0 near antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two coordinates, rounded to one decimal place
///
/// Rounds half away from zero, so 0.05 becomes 0.1.
#[inline]
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    round_to_tenth(haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude))
}

#[inline]
fn round_to_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london_lat = 51.5074;
        let london_lon = -0.1278;
        let paris_lat = 48.8566;
        let paris_lon = 2.3522;

        let distance = haversine_distance(london_lat, london_lon, paris_lat, paris_lon);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_same_point_is_zero() {
        let mumbai = Coordinate::new(19.0760, 72.8777);
        assert_eq!(distance_km(&mumbai, &mumbai), 0.0);
    }

    #[test]
    fn test_one_degree_at_equator() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        assert_eq!(distance_km(&a, &b), 111.2);
    }

    #[test]
    fn test_antipodal_points() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        assert_eq!(distance_km(&a, &b), 20015.1);
    }

    #[test]
    fn test_symmetry() {
        let delhi = Coordinate::new(28.6139, 77.2090);
        let pune = Coordinate::new(18.5204, 73.8567);
        assert_eq!(distance_km(&delhi, &pune), distance_km(&pune, &delhi));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to_tenth(12.34), 12.3);
        assert_eq!(round_to_tenth(12.36), 12.4);
        assert_eq!(round_to_tenth(0.25), 0.3);
    }
}
