use carelens_core::models::filter::{
    AgencyFilter, AgencySortField, NursingHomeFilter, NursingHomeSortField, RegionFilter,
    SortDirection,
};
use carelens_core::models::provider::{HomeHealthAgency, NursingHome};
use carelens_directory::query::{
    agency_view, filter_agencies, filter_nursing_homes, page_count, paginate, reconcile_page,
    sort_agencies, sort_nursing_homes,
};

fn agency(id: &str, name: &str, city: &str, state: &str) -> HomeHealthAgency {
    HomeHealthAgency {
        id: id.to_string(),
        name: name.to_string(),
        address: format!("{id} Main St"),
        city: city.to_string(),
        state: state.to_string(),
        zip: "35501".to_string(),
        phone: "(205) 555-0100".to_string(),
        offers_nursing: true,
        offers_physical_therapy: false,
        offers_occupational_therapy: false,
        offers_speech_pathology: false,
        offers_medical_social: false,
        offers_home_health_aide: true,
        quality_rating: Some(3.5),
        better_walking_moving: Some(70.0),
        better_bed_transfer: None,
        better_bathing: None,
        better_breathing: None,
        timely_care: Some(90.0),
    }
}

fn home(id: &str, name: &str, state: &str, beds: Option<u32>) -> NursingHome {
    NursingHome {
        id: id.to_string(),
        name: name.to_string(),
        address: format!("{id} Oak Ave"),
        city: "Mobile".to_string(),
        state: state.to_string(),
        zip: "36602".to_string(),
        phone: "(251) 555-0100".to_string(),
        bed_count: beds,
        staffing_hours: Some(3.6),
        turnover_rate: Some(50.0),
        total_fines: Some(0.0),
        overall_rating: Some(4.0),
        health_inspection_rating: Some(3.0),
        staffing_rating: Some(4.0),
        quality_measure_rating: Some(5.0),
    }
}

fn sample_agencies() -> Vec<HomeHealthAgency> {
    vec![
        agency("01", "Alpha Home Care", "Birmingham", "AL"),
        agency("02", "Beacon Health at Home", "Mobile", "AL"),
        agency("03", "Coastal Caregivers", "Pensacola", "FL"),
        agency("04", "Delta Visiting Nurses", "Jackson", "MS"),
    ]
}

#[test]
fn neutral_filter_is_an_order_preserving_identity() {
    let records = sample_agencies();
    let matched = filter_agencies(&records, &AgencyFilter::default());

    assert_eq!(matched.len(), records.len());
    for (original, kept) in records.iter().zip(&matched) {
        assert_eq!(original.id, kept.id);
    }
}

#[test]
fn filtering_never_grows_the_set() {
    let records = sample_agencies();
    let filters = [
        AgencyFilter {
            query: "care".to_string(),
            ..AgencyFilter::default()
        },
        AgencyFilter {
            region: RegionFilter::State("AL".to_string()),
            ..AgencyFilter::default()
        },
        AgencyFilter {
            query: "zzz no such agency".to_string(),
            ..AgencyFilter::default()
        },
    ];

    for filter in filters {
        assert!(filter_agencies(&records, &filter).len() <= records.len());
    }
}

#[test]
fn region_match_is_case_insensitive() {
    let records = sample_agencies();
    let filter = AgencyFilter {
        region: RegionFilter::State("al".to_string()),
        ..AgencyFilter::default()
    };

    let matched = filter_agencies(&records, &filter);
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|a| a.state == "AL"));
}

#[test]
fn query_matches_any_text_field_case_insensitively() {
    let records = sample_agencies();

    // City field.
    let filter = AgencyFilter {
        query: "PENSACOLA".to_string(),
        ..AgencyFilter::default()
    };
    assert_eq!(filter_agencies(&records, &filter).len(), 1);

    // Address substring.
    let filter = AgencyFilter {
        query: "04 main".to_string(),
        ..AgencyFilter::default()
    };
    assert_eq!(filter_agencies(&records, &filter).len(), 1);

    // Zip prefix hits every sample agency.
    let filter = AgencyFilter {
        query: "355".to_string(),
        ..AgencyFilter::default()
    };
    assert_eq!(filter_agencies(&records, &filter).len(), 4);
}

#[test]
fn service_toggles_and_together() {
    let mut records = sample_agencies();
    records[0].offers_physical_therapy = true;
    records[1].offers_physical_therapy = true;
    records[1].offers_home_health_aide = false;

    let mut filter = AgencyFilter::default();
    filter.services.physical_therapy = true;
    assert_eq!(filter_agencies(&records, &filter).len(), 2);

    filter.services.home_health_aide = true;
    let matched = filter_agencies(&records, &filter);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "01");
}

#[test]
fn ascending_then_reversed_equals_descending() {
    let records = sample_agencies();

    let mut ascending = filter_agencies(&records, &AgencyFilter::default());
    sort_agencies(&mut ascending, AgencySortField::Name, SortDirection::Ascending);

    let mut descending = filter_agencies(&records, &AgencyFilter::default());
    sort_agencies(&mut descending, AgencySortField::Name, SortDirection::Descending);

    ascending.reverse();
    let asc_ids: Vec<_> = ascending.iter().map(|a| &a.id).collect();
    let desc_ids: Vec<_> = descending.iter().map(|a| &a.id).collect();
    assert_eq!(asc_ids, desc_ids);
}

#[test]
fn missing_sort_values_go_last_in_both_directions() {
    let records = vec![
        home("A", "Autumn Manor", "AL", Some(120)),
        home("B", "Bayside Rest", "AL", None),
        home("C", "Cedar Grove", "AL", Some(60)),
    ];

    let mut view = filter_nursing_homes(&records, &NursingHomeFilter::default());
    sort_nursing_homes(&mut view, NursingHomeSortField::BedCount, SortDirection::Ascending);
    let ids: Vec<_> = view.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, ["C", "A", "B"]);

    let mut view = filter_nursing_homes(&records, &NursingHomeFilter::default());
    sort_nursing_homes(&mut view, NursingHomeSortField::BedCount, SortDirection::Descending);
    let ids: Vec<_> = view.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, ["A", "C", "B"]);
}

#[test]
fn pagination_partitions_the_set_exactly() {
    let records: Vec<u32> = (0..23).collect();
    let page_size = 5;

    let mut reassembled = Vec::new();
    for page in 1..=page_count(records.len(), page_size) {
        reassembled.extend_from_slice(paginate(&records, page, page_size));
    }
    assert_eq!(reassembled, records);
}

#[test]
fn out_of_range_page_is_empty_not_clamped() {
    let records: Vec<u32> = (0..10).collect();
    assert!(paginate(&records, 3, 5).is_empty());
    assert_eq!(paginate(&records, 2, 5), &[5, 6, 7, 8, 9]);
}

#[test]
fn page_reconciliation_resets_to_first_page() {
    assert_eq!(reconcile_page(4, 23, 5), 4);
    assert_eq!(reconcile_page(5, 23, 5), 5);
    assert_eq!(reconcile_page(6, 23, 5), 1);
    // Empty result still shows page 1.
    assert_eq!(reconcile_page(3, 0, 5), 1);
    assert_eq!(page_count(0, 5), 1);
}

#[test]
fn sort_by_toggles_direction_on_repeat_and_resets_on_change() {
    let mut filter = AgencyFilter::default();
    assert_eq!(filter.sort, AgencySortField::Name);
    assert_eq!(filter.direction, SortDirection::Ascending);

    filter.sort_by(AgencySortField::Name);
    assert_eq!(filter.direction, SortDirection::Descending);

    filter.sort_by(AgencySortField::QualityRating);
    assert_eq!(filter.sort, AgencySortField::QualityRating);
    assert_eq!(filter.direction, SortDirection::Ascending);
}

#[test]
fn agency_view_reconciles_a_stale_page() {
    let records = sample_agencies();
    let filter = AgencyFilter {
        // Only two AL agencies match, but the user was on page 3.
        region: RegionFilter::State("AL".to_string()),
        page: 3,
        ..AgencyFilter::default()
    };

    let view = agency_view(&records, &filter, 2);
    assert_eq!(view.total, 2);
    assert_eq!(view.page, 1);
    assert_eq!(view.page_count, 1);
    assert_eq!(view.items.len(), 2);
}
