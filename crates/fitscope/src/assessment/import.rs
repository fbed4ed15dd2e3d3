use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{QuestionId, ResponseSet, ResponseValue};

/// Error raised while reading a response export.
#[derive(Debug, thiserror::Error)]
pub enum ResponseImportError {
    #[error("failed to read response export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid response CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    question_id: String,
    value: String,
}

/// Importer for `question_id,value` CSV exports of a response set.
///
/// Numeric cells become likert scale answers, anything else is treated as a
/// selected option. Duplicate question ids replace earlier rows, matching the
/// response map's last-write-wins contract. Blank rows are skipped; unknown
/// question ids are kept and left for the engine to ignore.
pub struct CsvResponseImporter;

impl CsvResponseImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ResponseSet, ResponseImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ResponseSet, ResponseImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut responses = ResponseSet::new();
        for row in csv_reader.deserialize::<ResponseRow>() {
            let row: ResponseRow = row?;
            if row.question_id.is_empty() || row.value.is_empty() {
                continue;
            }

            let value = match row.value.parse::<u8>() {
                Ok(scale) => ResponseValue::Scale(scale),
                Err(_) => ResponseValue::Choice(row.value),
            };
            responses.record(QuestionId(row.question_id), value);
        }

        Ok(responses)
    }
}
