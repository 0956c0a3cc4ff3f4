//! The write-once persistence seam for generated reports.
//!
//! The hosted store is an external collaborator: saves are append-only,
//! keyed by the opaque token, with no retry and no read-back
//! verification. Failures surface to the caller and never touch engine
//! state.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::info;

use carelens_core::keys;
use carelens_core::models::report::ScreeningReport;

use crate::error::ReportError;

/// Destination for rendered reports.
pub trait ReportSink {
    /// Write-once append. Saving an already-used token is an error.
    fn save(&self, key: &str, content: &str) -> Result<(), ReportError>;
}

/// Serialize a report and hand it to the sink under its token's
/// canonical key.
pub fn save_report(sink: &dyn ReportSink, report: &ScreeningReport) -> Result<String, ReportError> {
    let key = keys::report(&report.token);
    let body = serde_json::to_string(report)?;
    sink.save(&key, &body)?;

    info!(token = %report.token, key = %key, "screening report saved");
    Ok(key)
}

/// In-memory sink for tests and local development.
#[derive(Debug, Default)]
pub struct MemorySink {
    objects: Mutex<HashMap<String, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.lock().unwrap().is_empty()
    }
}

impl ReportSink for MemorySink {
    fn save(&self, key: &str, content: &str) -> Result<(), ReportError> {
        let mut objects = self.objects.lock().unwrap();
        if objects.contains_key(key) {
            return Err(ReportError::DuplicateToken(key.to_string()));
        }
        objects.insert(key.to_string(), content.to_string());
        Ok(())
    }
}
