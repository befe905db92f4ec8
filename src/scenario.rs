//! Code for loading the static input tables for a run.
use crate::crop::{CropRecord, check_crop_capacity, process_yield};
use crate::input::{read_crops, read_mineral_stock};
use crate::mineral::MineralStock;
use anyhow::Result;
use std::path::Path;

/// The static input data for one run of the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Crops harvested from the field, in processing order
    pub crops: Vec<CropRecord>,
    /// The mineral stockpile to be drawn down
    pub minerals: MineralStock,
}

impl Scenario {
    /// Read a scenario from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `scenario_dir` - Folder containing scenario files
    pub fn from_path<P: AsRef<Path>>(scenario_dir: P) -> Result<Scenario> {
        let scenario_dir = scenario_dir.as_ref();
        Ok(Scenario {
            crops: read_crops(scenario_dir)?,
            minerals: read_mineral_stock(scenario_dir)?,
        })
    }

    /// Check that the scenario can be run.
    ///
    /// The crop containers have a fixed capacity, so the yield must be checked before packing.
    pub fn validate(&self) -> Result<()> {
        check_crop_capacity(&process_yield(&self.crops))
    }
}

/// Load a scenario from the specified directory and check that it can be run
pub fn load_scenario<P: AsRef<Path>>(scenario_dir: P) -> Result<Scenario> {
    let scenario = Scenario::from_path(scenario_dir)?;
    scenario.validate()?;

    Ok(scenario)
}
