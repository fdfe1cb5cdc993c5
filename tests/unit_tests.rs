// Unit tests for Blood Locator

use blood_locator::core::{
    distance::{distance_km, haversine_distance},
    filters::{matches_blood_group, matches_location, normalize_blood_group},
};
use blood_locator::models::{Candidate, Coordinate, Distance};

#[test]
fn test_distance_zero_for_identical_points() {
    let points = [
        Coordinate::new(0.0, 0.0),
        Coordinate::new(19.0760, 72.8777),
        Coordinate::new(-33.8688, 151.2093),
        Coordinate::new(90.0, 0.0),
    ];

    for point in &points {
        assert_eq!(distance_km(point, point), 0.0, "{:?}", point);
    }
}

#[test]
fn test_distance_symmetric() {
    let mumbai = Coordinate::new(19.0760, 72.8777);
    let kolkata = Coordinate::new(22.5726, 88.3639);
    let london = Coordinate::new(51.5074, -0.1278);

    assert_eq!(distance_km(&mumbai, &kolkata), distance_km(&kolkata, &mumbai));
    assert_eq!(distance_km(&mumbai, &london), distance_km(&london, &mumbai));
}

#[test]
fn test_distance_known_fixtures() {
    let origin = Coordinate::new(0.0, 0.0);

    assert_eq!(distance_km(&origin, &Coordinate::new(0.0, 1.0)), 111.2);
    assert_eq!(distance_km(&origin, &Coordinate::new(0.0, 180.0)), 20015.1);
}

#[test]
fn test_distance_rounded_to_one_decimal() {
    let mumbai = Coordinate::new(19.0760, 72.8777);
    let pune = Coordinate::new(18.5204, 73.8567);

    let rounded = distance_km(&mumbai, &pune);
    let raw = haversine_distance(mumbai.latitude, mumbai.longitude, pune.latitude, pune.longitude);

    assert!((rounded - raw).abs() <= 0.05);
    assert_eq!((rounded * 10.0).round() / 10.0, rounded);
    // Mumbai to Pune is roughly 120 km as the crow flies
    assert!(rounded > 110.0 && rounded < 130.0, "got {}", rounded);
}

#[test]
fn test_near_antipodal_does_not_produce_nan() {
    let a = Coordinate::new(45.0, 30.0);
    let b = Coordinate::new(-45.0, -150.0);

    let distance = distance_km(&a, &b);
    assert!(distance.is_finite());
    assert!((distance - 20015.1).abs() < 0.2);
}

#[test]
fn test_blood_group_matching() {
    let donor = Candidate::donor("1", "Asha", " O- ", "Mumbai");

    assert!(matches_blood_group(&donor, "o-"));
    assert!(!matches_blood_group(&donor, "O+"));
    assert_eq!(normalize_blood_group(" ab+"), "AB+");
}

#[test]
fn test_location_heuristic_is_substring() {
    let donor = Candidate::donor("1", "Asha", "O-", "Mumbai Suburban");

    assert!(matches_location(&donor, "mumbai"));
    assert!(matches_location(&donor, "SUBURB"));
    assert!(!matches_location(&donor, "Thane"));
}

#[test]
fn test_distance_variants() {
    assert_eq!(Distance::Known(4.2).km(), Some(4.2));
    assert_eq!(Distance::Heuristic.km(), Some(0.0));
    assert_eq!(Distance::Unknown.km(), None);

    assert_eq!(Distance::Known(4.2).display().as_deref(), Some("4.2 km"));
    assert_eq!(Distance::Heuristic.source(), "heuristic");
    assert!(Distance::Unknown.display().is_none());
    assert!(!Distance::Heuristic.is_known());
}

#[test]
fn test_coordinate_validity() {
    assert!(Coordinate::new(90.0, -180.0).is_valid());
    assert!(!Coordinate::new(90.1, 0.0).is_valid());
    assert!(!Coordinate::new(0.0, 181.0).is_valid());
    assert!(!Coordinate::new(f64::INFINITY, 0.0).is_valid());
    assert_eq!(Coordinate::from_parts(Some(1.0), None), None);
}
