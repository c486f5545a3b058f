//! Training dataset access for the diabetes risk model.
//!
//! Reads the tabular dataset the training collaborator consumes: a CSV
//! file with a fixed 9-column schema (8 clinical features plus the binary
//! outcome), and produces the seeded train/test split.

use std::path::Path;

use anyhow::{Context, Result};
use risk_structs::{HealthProfile, HealthRecord, RiskLabel};

mod split;

pub use split::*;

/// Number of columns in the dataset schema: 8 features plus the outcome.
pub const COLUMN_COUNT: usize = 9;

/// Loads all labeled records from a CSV dataset file.
///
/// A header row is tolerated and skipped; blank lines are ignored. Every
/// remaining row must carry exactly [`COLUMN_COUNT`] numeric columns.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any row violates the
/// schema, with the offending line number in the context.
pub fn load_records(path: &Path) -> Result<Vec<HealthRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;

    let mut records = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if index == 0 && is_header(line) {
            continue;
        }

        let record = parse_record(line)
            .with_context(|| format!("Invalid dataset row on line {}", index + 1))?;
        records.push(record);
    }

    Ok(records)
}

/// Returns true if a line looks like the column-name header row.
fn is_header(line: &str) -> bool {
    line.split(',')
        .next()
        .is_some_and(|first| first.trim().parse::<f32>().is_err())
}

/// Parses one dataset row into a labeled record.
fn parse_record(line: &str) -> Result<HealthRecord> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    if parts.len() != COLUMN_COUNT {
        anyhow::bail!(
            "Expected {COLUMN_COUNT} columns, found {}",
            parts.len()
        );
    }

    let profile = HealthProfile {
        pregnancies: parse_column(parts[0], "Pregnancies")?,
        glucose: parse_column(parts[1], "Glucose")?,
        blood_pressure: parse_column(parts[2], "BloodPressure")?,
        skin_thickness: parse_column(parts[3], "SkinThickness")?,
        insulin: parse_column(parts[4], "Insulin")?,
        bmi: parse_column(parts[5], "BMI")?,
        pedigree: parse_column(parts[6], "DiabetesPedigreeFunction")?,
        age: parse_column(parts[7], "Age")?,
    };

    let outcome: u8 = parse_column(parts[8], "Outcome")?;
    if outcome > 1 {
        anyhow::bail!("Outcome must be 0 or 1, found {outcome}");
    }

    Ok(HealthRecord {
        profile,
        outcome: RiskLabel::from(outcome),
    })
}

/// Parses a single named column value.
fn parse_column<T: core::str::FromStr>(value: &str, column: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid {column} value: {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome
6,148,72,35,0,33.6,0.627,50,1
1,85,66,29,0,26.6,0.351,31,0

8,183,64,0,0,23.3,0.672,32,1
";

    fn write_temp(content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "health_data_test_{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_records_skips_header_and_blanks() {
        let path = write_temp(SAMPLE);
        let records = load_records(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].profile.pregnancies, 6);
        assert!((records[0].profile.bmi - 33.6).abs() < f32::EPSILON);
        assert_eq!(records[0].outcome, RiskLabel::High);
        assert_eq!(records[1].outcome, RiskLabel::Low);
    }

    #[test]
    fn test_parse_record_rejects_short_rows() {
        assert!(parse_record("1,2,3").is_err());
    }

    #[test]
    fn test_parse_record_rejects_bad_numbers() {
        let err = parse_record("6,abc,72,35,0,33.6,0.627,50,1").unwrap_err();
        assert!(err.to_string().contains("Glucose"));
    }

    #[test]
    fn test_parse_record_rejects_bad_outcome() {
        assert!(parse_record("6,148,72,35,0,33.6,0.627,50,2").is_err());
    }

    #[test]
    fn test_is_header() {
        assert!(is_header("Pregnancies,Glucose"));
        assert!(!is_header("6,148,72,35,0,33.6,0.627,50,1"));
    }
}
