use crate::survey::dashboard::RespondentInterpretation;
use crate::survey::interpretation::Category;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "failed to write export: {}", err),
            ExportError::Csv(err) => write!(f, "failed to encode export CSV: {}", err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(err) => Some(err),
            ExportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Column names of the wide export, one score/weighted/flag triple per domain.
pub fn header() -> Vec<String> {
    let mut columns = vec![
        "respondent_id".to_string(),
        "overall_index".to_string(),
        "risk_level".to_string(),
        "recommendation".to_string(),
    ];
    for category in Category::ordered() {
        let key = category.key();
        columns.push(format!("{key}_score"));
        columns.push(format!("{key}_weighted"));
        columns.push(format!("{key}_flag"));
    }
    columns
}

fn row(result: &RespondentInterpretation) -> Vec<String> {
    let summary = &result.interpretation.summary;
    let mut fields = vec![
        result.respondent_id.clone(),
        format!("{:.2}", summary.overall_index),
        summary.risk_level.key().to_string(),
        summary.recommendation_level.key().to_string(),
    ];
    for category in Category::ordered() {
        match summary.domain(category) {
            Some(domain) => {
                fields.push(format!("{:.2}", domain.score));
                fields.push(format!("{:.2}", domain.weighted_score));
                fields.push(domain.flag.label().to_string());
            }
            None => fields.extend([String::new(), String::new(), String::new()]),
        }
    }
    fields
}

pub fn write_summaries<W: Write>(
    writer: W,
    results: &[RespondentInterpretation],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(header())?;
    for result in results {
        csv_writer.write_record(row(result))?;
    }
    csv_writer.flush()?;

    info!(rows = results.len(), "summary export written");
    Ok(())
}

pub fn export_to_path<P: AsRef<Path>>(
    path: P,
    results: &[RespondentInterpretation],
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_summaries(file, results)
}
