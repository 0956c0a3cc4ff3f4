use carelens_core::models::provider::HomeHealthAgency;
use carelens_directory::stats::{AgencyMedians, median};

fn agency(quality: Option<f64>, walking: Option<f64>) -> HomeHealthAgency {
    HomeHealthAgency {
        id: "017000".to_string(),
        name: "Agency".to_string(),
        address: String::new(),
        city: String::new(),
        state: String::new(),
        zip: String::new(),
        phone: String::new(),
        offers_nursing: true,
        offers_physical_therapy: false,
        offers_occupational_therapy: false,
        offers_speech_pathology: false,
        offers_medical_social: false,
        offers_home_health_aide: false,
        quality_rating: quality,
        better_walking_moving: walking,
        better_bed_transfer: None,
        better_bathing: None,
        better_breathing: None,
        timely_care: None,
    }
}

#[test]
fn median_of_empty_is_zero() {
    assert_eq!(median(&[]), 0.0);
}

#[test]
fn median_of_singleton_is_the_element() {
    assert_eq!(median(&[4.0]), 4.0);
}

#[test]
fn median_of_even_length_averages_the_middle_pair() {
    assert_eq!(median(&[2.0, 4.0]), 3.0);
    assert_eq!(median(&[1.0, 2.0, 3.0, 10.0]), 2.5);
}

#[test]
fn median_of_odd_length_is_the_middle_element() {
    assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
}

#[test]
fn agency_medians_computed_per_metric_with_absent_as_zero() {
    let records = vec![
        agency(Some(4.0), Some(70.0)),
        agency(Some(2.0), Some(80.0)),
        agency(Some(3.0), None),
    ];

    let medians = AgencyMedians::from_records(&records);
    assert_eq!(medians.quality_rating, 3.0);
    // The absent walking value counts as 0: sorted [0, 70, 80].
    assert_eq!(medians.better_walking_moving, 70.0);
    // Metrics with no data at all settle at 0.
    assert_eq!(medians.better_bathing, 0.0);
}
