//! Report port: Trait for consumers of finished assessment reports.
//!
//! Rendering (HTML, charts, print layouts) lives behind this trait.

use crate::domain::AssessmentReport;

/// Errors that can occur while publishing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report encoding failed: {0}")]
    Encoding(serde_json::Error),

    #[error("Report sink unavailable: {0}")]
    Unavailable(String),
}

// serde_json wraps writer failures in its own error; keep those as I/O.
impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Self::Io(e.into())
        } else {
            Self::Encoding(e)
        }
    }
}

/// Trait for report consumers.
pub trait ReportSink: Send + Sync {
    /// Hand a finished report to the consumer.
    ///
    /// # Errors
    /// Returns `ReportError` if the report could not be delivered.
    fn publish(&self, report: &AssessmentReport) -> Result<(), ReportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_io_failure_maps_to_io() {
        let mut full = [0u8; 0];
        let err = serde_json::to_writer(&mut full[..], &"report").unwrap_err();
        assert!(matches!(ReportError::from(err), ReportError::Io(_)));
    }

    #[test]
    fn test_json_data_failure_maps_to_encoding() {
        let err = serde_json::from_str::<u8>("not json").unwrap_err();
        assert!(matches!(ReportError::from(err), ReportError::Encoding(_)));
    }
}
