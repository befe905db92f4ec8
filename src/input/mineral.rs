//! Code for reading the contents of the mineral stockpile.
use super::read_csv;
use crate::mineral::{MineralID, MineralStock};
use crate::units::Kilograms;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const MINERALS_FILE_NAME: &str = "minerals.csv";

/// A row of the minerals CSV file
#[derive(Debug, PartialEq, Deserialize)]
struct MineralRow {
    mineral: MineralID,
    kilograms: Kilograms,
}

/// Read the mineral stockpile for a scenario.
///
/// # Arguments
///
/// * `scenario_dir` - Folder containing scenario files
///
/// # Returns
///
/// The stockpile, with minerals in the order they appear in the file
pub fn read_mineral_stock(scenario_dir: &Path) -> Result<MineralStock> {
    let file_path = scenario_dir.join(MINERALS_FILE_NAME);
    let rows: Vec<MineralRow> = read_csv(&file_path)?;

    MineralStock::new(rows.into_iter().map(|row| (row.mineral, row.kilograms)))
        .with_context(|| format!("Error reading {}", file_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::mineral_stock;
    use rstest::rstest;
    use std::fs;
    use tempfile::tempdir;

    #[rstest]
    fn test_read_mineral_stock(mineral_stock: MineralStock) {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(MINERALS_FILE_NAME),
            "mineral,kilograms\nOnyx,2943\nAmethyst,3958\nBloodstone,4010\nEmerald,3850\n",
        )
        .unwrap();

        assert_eq!(read_mineral_stock(dir.path()).unwrap(), mineral_stock);
    }

    #[test]
    fn test_read_mineral_stock_duplicate() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(MINERALS_FILE_NAME);
        fs::write(&file_path, "mineral,kilograms\nOnyx,10\nOnyx,5\n").unwrap();

        let err = read_mineral_stock(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), format!("Error reading {}", file_path.display()));
        assert_eq!(
            err.chain().nth(1).unwrap().to_string(),
            "Duplicate mineral in stockpile: Onyx"
        );
    }
}
