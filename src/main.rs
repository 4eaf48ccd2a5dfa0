//! CMD Engine command-line entry point.
//!
//! Reads one assessment as JSON and prints the report as JSON.
//!
//! # Usage
//!
//! ```bash
//! cmd-engine [assessment.json]   # reads stdin when no path is given
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cmd_engine::adapters::json::{read_assessment, read_assessment_file};
use cmd_engine::adapters::sanitize::SanitizingMakeWriter;
use cmd_engine::adapters::{JsonReportWriter, ReferenceEngine, ValidatingEngine};
use cmd_engine::application::AssessmentService;
use cmd_engine::config::{EngineConfig, LogMode};
use cmd_engine::ports::ScoringEngine;
use cmd_engine::PatientAssessment;

fn main() -> Result<()> {
    let config = EngineConfig::from_env();

    // stdout carries the report, so logs go to stderr or a file.
    let (writer, _guard) = match &config.log_mode {
        LogMode::File(path) => {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_appender::non_blocking(file)
        }
        LogMode::Stderr => tracing_appender::non_blocking(std::io::stderr()),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(SanitizingMakeWriter::new(writer)),
        )
        .init();

    let assessment = match std::env::args().nth(1) {
        Some(path) => read_assessment_file(Path::new(&path))
            .with_context(|| format!("Failed to read assessment from {path}"))?,
        None => read_assessment(std::io::stdin().lock())
            .context("Failed to read assessment from stdin")?,
    };

    if config.strict_validation {
        run(ValidatingEngine::new(ReferenceEngine::new()), &assessment)
    } else {
        run(ReferenceEngine::new(), &assessment)
    }
}

fn run<E>(engine: E, assessment: &PatientAssessment) -> Result<()>
where
    E: ScoringEngine,
{
    let sink = Arc::new(JsonReportWriter::new(std::io::stdout()));
    // stdout is the only output, so a report that cannot be written fails the run.
    let service = AssessmentService::new(Arc::new(engine), sink).with_strict_publish(true);

    service.run_assessment(assessment)?;
    Ok(())
}
