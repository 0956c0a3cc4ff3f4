use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sort direction for a directory column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Region (state) narrowing, with an explicit all-regions sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "kind", content = "state")]
#[ts(export)]
pub enum RegionFilter {
    #[default]
    All,
    State(String),
}

impl RegionFilter {
    /// Exact-equality region match, case-insensitive for resilience
    /// against inconsistent casing in the source data.
    pub fn matches(&self, state: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::State(s) => s.eq_ignore_ascii_case(state),
        }
    }
}

/// Sortable columns of the home-health agency directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgencySortField {
    Name,
    City,
    QualityRating,
    TimelyCare,
    BetterWalkingMoving,
}

/// Sortable columns of the nursing-home directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NursingHomeSortField {
    Name,
    City,
    OverallRating,
    BedCount,
    StaffingHours,
    TurnoverRate,
    TotalFines,
}

/// Independent service-availability toggles for the agency directory.
/// Active toggles AND together; inactive ones impose no constraint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceToggles {
    pub nursing: bool,
    pub physical_therapy: bool,
    pub occupational_therapy: bool,
    pub speech_pathology: bool,
    pub medical_social: bool,
    pub home_health_aide: bool,
}

impl ServiceToggles {
    pub fn any_active(&self) -> bool {
        self.nursing
            || self.physical_therapy
            || self.occupational_therapy
            || self.speech_pathology
            || self.medical_social
            || self.home_health_aide
    }
}

/// Transient view state for the agency directory. Owned by the
/// presentation layer; the engines only ever read it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgencyFilter {
    pub query: String,
    pub region: RegionFilter,
    pub services: ServiceToggles,
    pub sort: AgencySortField,
    pub direction: SortDirection,
    /// 1-indexed page number.
    pub page: u32,
}

impl Default for AgencyFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            region: RegionFilter::All,
            services: ServiceToggles::default(),
            sort: AgencySortField::Name,
            direction: SortDirection::Ascending,
            page: 1,
        }
    }
}

impl AgencyFilter {
    /// Column-header click: same field flips direction, a new field
    /// resets to ascending.
    pub fn sort_by(&mut self, field: AgencySortField) {
        if self.sort == field {
            self.direction = self.direction.toggled();
        } else {
            self.sort = field;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Transient view state for the nursing-home directory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NursingHomeFilter {
    pub query: String,
    pub region: RegionFilter,
    pub sort: NursingHomeSortField,
    pub direction: SortDirection,
    /// 1-indexed page number.
    pub page: u32,
}

impl Default for NursingHomeFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            region: RegionFilter::All,
            sort: NursingHomeSortField::Name,
            direction: SortDirection::Ascending,
            page: 1,
        }
    }
}

impl NursingHomeFilter {
    pub fn sort_by(&mut self, field: NursingHomeSortField) {
        if self.sort == field {
            self.direction = self.direction.toggled();
        } else {
            self.sort = field;
            self.direction = SortDirection::Ascending;
        }
    }
}
