//! JSON adapters: assessment input parsing and a ReportSink over any writer.

use std::io::{Read, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::domain::{AssessmentReport, PatientAssessment};
use crate::ports::{ReportError, ReportSink};
use crate::CmdError;

/// Parse one assessment from a JSON reader.
///
/// # Errors
/// Returns `CmdError::Serialization` on malformed JSON or missing fields.
pub fn read_assessment<R: Read>(reader: R) -> Result<PatientAssessment, CmdError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse one assessment from a JSON file.
///
/// # Errors
/// Returns `CmdError::Io` if the file cannot be opened.
pub fn read_assessment_file(path: &Path) -> Result<PatientAssessment, CmdError> {
    let file = std::fs::File::open(path)?;
    read_assessment(std::io::BufReader::new(file))
}

/// Writes each report as pretty-printed JSON followed by a newline.
pub struct JsonReportWriter<W> {
    writer: Mutex<W>,
}

impl<W> JsonReportWriter<W>
where
    W: Write + Send,
{
    /// Create a new JSON writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer.
    ///
    /// # Errors
    /// Returns `ReportError::Unavailable` if the writer lock was poisoned.
    pub fn into_inner(self) -> Result<W, ReportError> {
        self.writer
            .into_inner()
            .map_err(|_| ReportError::Unavailable("Report writer lock poisoned".to_string()))
    }
}

impl<W> ReportSink for JsonReportWriter<W>
where
    W: Write + Send,
{
    fn publish(&self, report: &AssessmentReport) -> Result<(), ReportError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ReportError::Unavailable("Report writer lock poisoned".to_string()))?;

        serde_json::to_writer_pretty(&mut *writer, report)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
