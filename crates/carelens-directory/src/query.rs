//! The pure query layer: filter, sort, and paginate over the loaded
//! record snapshot. Every function returns a fresh derived view and
//! never mutates the input collection.

use std::cmp::Ordering;

use carelens_core::models::filter::{
    AgencyFilter, AgencySortField, NursingHomeFilter, NursingHomeSortField, SortDirection,
};
use carelens_core::models::provider::{HomeHealthAgency, NursingHome};

/// One rendered page of a filtered, sorted directory view.
#[derive(Debug)]
pub struct DirectoryPage<'a, T> {
    pub items: Vec<&'a T>,
    /// Total matching records before paging.
    pub total: usize,
    /// The page actually shown, after reconciliation.
    pub page: u32,
    pub page_count: u32,
}

/// Narrow the agency collection: region equality (case-insensitive), then
/// case-insensitive substring query across name, city, state, address,
/// and zip (any field matches), then active service toggles ANDed
/// together. Order-preserving.
pub fn filter_agencies<'a>(
    records: &'a [HomeHealthAgency],
    filter: &AgencyFilter,
) -> Vec<&'a HomeHealthAgency> {
    let query = filter.query.trim().to_lowercase();

    records
        .iter()
        .filter(|a| filter.region.matches(&a.state))
        .filter(|a| {
            query.is_empty()
                || any_field_contains(&[&a.name, &a.city, &a.state, &a.address, &a.zip], &query)
        })
        .filter(|a| {
            let s = &filter.services;
            (!s.nursing || a.offers_nursing)
                && (!s.physical_therapy || a.offers_physical_therapy)
                && (!s.occupational_therapy || a.offers_occupational_therapy)
                && (!s.speech_pathology || a.offers_speech_pathology)
                && (!s.medical_social || a.offers_medical_social)
                && (!s.home_health_aide || a.offers_home_health_aide)
        })
        .collect()
}

/// Narrow the nursing-home collection: region, then free-text query.
pub fn filter_nursing_homes<'a>(
    records: &'a [NursingHome],
    filter: &NursingHomeFilter,
) -> Vec<&'a NursingHome> {
    let query = filter.query.trim().to_lowercase();

    records
        .iter()
        .filter(|h| filter.region.matches(&h.state))
        .filter(|h| {
            query.is_empty()
                || any_field_contains(&[&h.name, &h.city, &h.state, &h.address, &h.zip], &query)
        })
        .collect()
}

fn any_field_contains(fields: &[&str], query: &str) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(query))
}

/// Stable sort of an agency view. Records missing the sort value go last
/// regardless of direction.
pub fn sort_agencies(
    records: &mut [&HomeHealthAgency],
    field: AgencySortField,
    direction: SortDirection,
) {
    records.sort_by(|a, b| match field {
        AgencySortField::Name => compare_str(&a.name, &b.name, direction),
        AgencySortField::City => compare_str(&a.city, &b.city, direction),
        AgencySortField::QualityRating => {
            compare_opt(a.quality_rating, b.quality_rating, direction)
        }
        AgencySortField::TimelyCare => compare_opt(a.timely_care, b.timely_care, direction),
        AgencySortField::BetterWalkingMoving => {
            compare_opt(a.better_walking_moving, b.better_walking_moving, direction)
        }
    });
}

/// Stable sort of a nursing-home view.
pub fn sort_nursing_homes(
    records: &mut [&NursingHome],
    field: NursingHomeSortField,
    direction: SortDirection,
) {
    records.sort_by(|a, b| match field {
        NursingHomeSortField::Name => compare_str(&a.name, &b.name, direction),
        NursingHomeSortField::City => compare_str(&a.city, &b.city, direction),
        NursingHomeSortField::OverallRating => {
            compare_opt(a.overall_rating, b.overall_rating, direction)
        }
        NursingHomeSortField::BedCount => compare_opt(
            a.bed_count.map(f64::from),
            b.bed_count.map(f64::from),
            direction,
        ),
        NursingHomeSortField::StaffingHours => {
            compare_opt(a.staffing_hours, b.staffing_hours, direction)
        }
        NursingHomeSortField::TurnoverRate => {
            compare_opt(a.turnover_rate, b.turnover_rate, direction)
        }
        NursingHomeSortField::TotalFines => compare_opt(a.total_fines, b.total_fines, direction),
    });
}

fn compare_str(a: &str, b: &str, direction: SortDirection) -> Ordering {
    let ord = a.to_lowercase().cmp(&b.to_lowercase());
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

fn compare_opt(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        // Missing values sort last in both directions.
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }
}

/// Slice out one page. `page` is 1-indexed; an out-of-range page yields
/// an empty slice — reconciliation against the current total is the
/// caller's job (see [`reconcile_page`]).
pub fn paginate<T>(records: &[T], page: u32, page_size: usize) -> &[T] {
    let index = (page.max(1) - 1) as usize;
    let start = index.saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = (start + page_size).min(records.len());
    &records[start..end]
}

/// Number of pages a collection of `total` records occupies. Never 0, so
/// an empty result still has a page 1 to show.
pub fn page_count(total: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return 1;
    }
    (total.div_ceil(page_size).max(1)) as u32
}

/// Reconcile the current page against a recomputed total: when the
/// filtered set shrank below the current page, reset to page 1.
pub fn reconcile_page(page: u32, total: usize, page_size: usize) -> u32 {
    let page = page.max(1);
    if page > page_count(total, page_size) { 1 } else { page }
}

/// Full pipeline for the agency directory: filter, sort, reconcile the
/// requested page, slice.
pub fn agency_view<'a>(
    records: &'a [HomeHealthAgency],
    filter: &AgencyFilter,
    page_size: usize,
) -> DirectoryPage<'a, HomeHealthAgency> {
    let mut matched = filter_agencies(records, filter);
    sort_agencies(&mut matched, filter.sort, filter.direction);

    let total = matched.len();
    let page = reconcile_page(filter.page, total, page_size);
    let items = paginate(&matched, page, page_size).to_vec();

    DirectoryPage {
        items,
        total,
        page,
        page_count: page_count(total, page_size),
    }
}

/// Full pipeline for the nursing-home directory.
pub fn nursing_home_view<'a>(
    records: &'a [NursingHome],
    filter: &NursingHomeFilter,
    page_size: usize,
) -> DirectoryPage<'a, NursingHome> {
    let mut matched = filter_nursing_homes(records, filter);
    sort_nursing_homes(&mut matched, filter.sort, filter.direction);

    let total = matched.len();
    let page = reconcile_page(filter.page, total, page_size);
    let items = paginate(&matched, page, page_size).to_vec();

    DirectoryPage {
        items,
        total,
        page,
        page_count: page_count(total, page_size),
    }
}
