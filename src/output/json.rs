// src/output/json.rs

use super::ReportFormatter;
use crate::core_types::ReportData;
use crate::errors::Result;

/// Renders a report as pretty-printed JSON.
///
/// Keys follow the field order of [`ReportData`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ReportData) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
