//! Common routines for handling input data.
use anyhow::{Context, Result, ensure};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

mod crop;
pub use crop::read_crops;
mod mineral;
pub use mineral::read_mineral_stock;

/// Read a series of type `T`s from a CSV file.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
///
/// # Returns
///
/// The records in the order they appear in the file, or an error if the file is missing, cannot be
/// parsed or contains no records.
pub fn read_csv<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let vec = read_csv_records(file_path)
        .with_context(|| format!("Error reading {}", file_path.display()))?;
    ensure!(
        !vec.is_empty(),
        "CSV file {} cannot be empty",
        file_path.display()
    );

    Ok(vec)
}

fn read_csv_records<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(file_path)?;

    let mut vec = Vec::new();
    for result in reader.deserialize() {
        vec.push(result?);
    }

    Ok(vec)
}

/// Parse a TOML file at the specified path.
///
/// # Arguments
///
/// * `file_path` - Path to the TOML file
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let toml_str = fs::read_to_string(file_path)
        .with_context(|| format!("Could not read file {}", file_path.display()))?;
    let toml_data = toml::from_str(&toml_str)
        .with_context(|| format!("Could not parse TOML file {}", file_path.display()))?;

    Ok(toml_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use serde::Deserialize;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Record {
        id: String,
        value: u32,
    }

    /// Create a CSV file with the given contents, returning its path
    fn create_csv_file(dir_path: &Path, contents: &str) -> std::path::PathBuf {
        let file_path = dir_path.join("test.csv");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "{contents}").unwrap();
        file_path
    }

    #[test]
    fn test_read_csv() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "id,value\nhello, 1\nworld,2");
        let records: Vec<Record> = read_csv(&file_path).unwrap();
        assert_eq!(
            records,
            &[
                Record {
                    id: "hello".to_string(),
                    value: 1,
                },
                Record {
                    id: "world".to_string(),
                    value: 2,
                }
            ]
        );
    }

    #[test]
    fn test_read_csv_empty() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "id,value");
        assert_error!(
            read_csv::<Record>(&file_path),
            format!("CSV file {} cannot be empty", file_path.display())
        );
    }

    #[test]
    fn test_read_csv_bad_value() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "id,value\nhello,-1");
        assert_error!(
            read_csv::<Record>(&file_path),
            format!("Error reading {}", file_path.display())
        );
    }

    #[test]
    fn test_read_csv_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_csv::<Record>(&dir.path().join("missing.csv")).is_err());
    }

    #[test]
    fn test_read_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.toml");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "id = \"hello\"\nvalue = 1").unwrap();
        }

        let record: Record = read_toml(&file_path).unwrap();
        assert_eq!(
            record,
            Record {
                id: "hello".to_string(),
                value: 1
            }
        );

        assert!(read_toml::<Record>(&dir.path().join("missing.toml")).is_err());
    }
}
