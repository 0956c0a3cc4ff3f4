use carelens_core::models::provider::{HomeHealthAgency, NursingHome};
use carelens_directory::banding::PerformanceBand;
use carelens_directory::compare::{AgencyQuality, NursingHomeQuality};
use carelens_directory::stats::{AgencyMedians, NursingHomeMedians};

fn agency(walking: Option<f64>) -> HomeHealthAgency {
    HomeHealthAgency {
        id: "017000".to_string(),
        name: "Alpha Home Care".to_string(),
        address: "1 Main St".to_string(),
        city: "Birmingham".to_string(),
        state: "AL".to_string(),
        zip: "35501".to_string(),
        phone: "(205) 555-0100".to_string(),
        offers_nursing: true,
        offers_physical_therapy: true,
        offers_occupational_therapy: false,
        offers_speech_pathology: false,
        offers_medical_social: false,
        offers_home_health_aide: true,
        quality_rating: Some(3.5),
        better_walking_moving: walking,
        better_bed_transfer: None,
        better_bathing: None,
        better_breathing: None,
        timely_care: None,
    }
}

#[test]
fn agency_above_median_walking_is_excellent() {
    let subject = agency(Some(80.0));
    let medians = AgencyMedians {
        quality_rating: 3.5,
        better_walking_moving: 70.0,
        better_bed_transfer: 0.0,
        better_bathing: 0.0,
        better_breathing: 0.0,
        timely_care: 0.0,
    };

    let quality = AgencyQuality::assess(&subject, &medians);
    // 80 / 70 ≈ 1.14, over the 1.10 cutoff.
    assert_eq!(quality.better_walking_moving, PerformanceBand::Excellent);
    // At-median rating lands in the second band.
    assert_eq!(quality.quality_rating, PerformanceBand::Good);
    // Metrics whose national median is 0 cannot be compared.
    assert_eq!(quality.better_bathing, PerformanceBand::NoData);
}

#[test]
fn nursing_home_with_zero_fines_gets_the_best_financial_band() {
    let subject = NursingHome {
        id: "015009".to_string(),
        name: "Cedar Grove Health and Rehab".to_string(),
        address: "100 Oak Ave".to_string(),
        city: "Mobile".to_string(),
        state: "AL".to_string(),
        zip: "36602".to_string(),
        phone: "(251) 555-0100".to_string(),
        bed_count: Some(120),
        staffing_hours: Some(4.2),
        turnover_rate: Some(45.0),
        total_fines: Some(0.0),
        overall_rating: Some(4.0),
        health_inspection_rating: Some(3.0),
        staffing_rating: Some(4.0),
        quality_measure_rating: Some(5.0),
    };
    let medians = NursingHomeMedians {
        overall_rating: 3.0,
        health_inspection_rating: 3.0,
        staffing_rating: 3.0,
        quality_measure_rating: 3.5,
        staffing_hours: 3.6,
        turnover_rate: 52.0,
        total_fines: 0.0,
    };

    let quality = NursingHomeQuality::assess(&subject, &medians);
    // Zero fines is the best band even though the median is itself 0.
    assert_eq!(quality.total_fines, PerformanceBand::Excellent);
    // 4.0 / 3.0 ≈ 1.33, over the nursing-home 1.15 cutoff.
    assert_eq!(quality.overall_rating, PerformanceBand::Excellent);
    // 45 / 52 ≈ 0.87 turnover: comfortably better than median.
    assert_eq!(quality.turnover_rate, PerformanceBand::Good);
    // 5.0 / 3.5 ≈ 1.43.
    assert_eq!(quality.quality_measure_rating, PerformanceBand::Excellent);
}
