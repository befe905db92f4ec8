//! Code for reading the crops harvested from the field.
use super::read_csv;
use crate::crop::CropRecord;
use anyhow::Result;
use std::path::Path;

const CROPS_FILE_NAME: &str = "crops.csv";

/// Read the crop records for a scenario.
///
/// # Arguments
///
/// * `scenario_dir` - Folder containing scenario files
///
/// # Returns
///
/// The crops in the order they will be processed
pub fn read_crops(scenario_dir: &Path) -> Result<Vec<CropRecord>> {
    read_csv(&scenario_dir.join(CROPS_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::crops;
    use rstest::rstest;
    use std::fs;
    use tempfile::tempdir;

    #[rstest]
    fn test_read_crops(crops: Vec<CropRecord>) {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CROPS_FILE_NAME),
            "type,plants\nCorn,368\nWheat,452\nKale,212\nTurnip,84\n",
        )
        .unwrap();

        assert_eq!(read_crops(dir.path()).unwrap(), crops);
    }

    #[test]
    fn test_read_crops_negative_plants() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CROPS_FILE_NAME), "type,plants\nCorn,-3\n").unwrap();
        assert!(read_crops(dir.path()).is_err());
    }
}
