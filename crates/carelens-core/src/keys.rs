//! Object key/path conventions for the hosted store.
//!
//! Pure string functions — no client dependency. These define the canonical
//! layout of objects CareLens reads and writes.

pub fn report(token: &str) -> String {
    format!("reports/{token}.json")
}

pub const HOME_HEALTH_DATASET: &str = "directories/home-health-agencies.json";

pub const NURSING_HOME_DATASET: &str = "directories/nursing-homes.json";
