//! The module responsible for writing output data to disk.
use crate::container::{Container, CropContainer};
use crate::crop::CropType;
use crate::facility::FacilityRecord;
use crate::mineral::{MineralID, Order};
use crate::units::Kilograms;
use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

pub mod metadata;
pub mod summary;

/// The root folder in which scenario-specific output folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "lexscopistan_results";

/// The output file name for crop containers
const CROP_CONTAINERS_FILE_NAME: &str = "crop_containers.csv";

/// The output file name for the storage facility
const FACILITY_FILE_NAME: &str = "facility.csv";

/// The output file name for the full list of mineral orders
const ORDERS_FILE_NAME: &str = "debug_orders.csv";

/// Get the default output directory for the scenario at the specified path
pub fn get_output_dir(scenario_dir: &Path) -> Result<PathBuf> {
    // Canonicalise in case the user has specified "."
    let scenario_dir = scenario_dir
        .canonicalize()
        .context("Could not resolve path to scenario")?;

    let scenario_name = scenario_dir
        .file_name()
        .context("Scenario cannot be in root folder")?
        .to_str()
        .context("Invalid chars in scenario dir name")?;

    Ok([OUTPUT_DIRECTORY_ROOT, scenario_name].iter().collect())
}

/// Create a new output directory, emptying it first if `allow_overwrite` is set.
///
/// # Returns
///
/// Whether an existing, non-empty folder is being overwritten, or an error if it is not allowed.
pub fn create_output_directory(output_dir: &Path, allow_overwrite: bool) -> Result<bool> {
    let overwrite = if let Ok(mut it) = fs::read_dir(output_dir) {
        if it.next().is_none() {
            // Folder exists and is empty: nothing to do
            return Ok(false);
        }

        ensure!(
            allow_overwrite,
            "Output folder already exists and is not empty. \
            Please delete the folder or pass the --overwrite command-line option."
        );

        fs::remove_dir_all(output_dir)?;
        true
    } else {
        false
    };

    fs::create_dir_all(output_dir)?;

    Ok(overwrite)
}

/// Represents a row in the crop containers CSV file.
///
/// There is one row for each type of crop stored in each container.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct CropContainerRow {
    container_id: u32,
    crop_type: CropType,
    bushels: usize,
}

/// Represents a row in the facility CSV file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct FacilityRow {
    container_id: u32,
    orders: usize,
    nominal_kilograms: Kilograms,
    actual_kilograms: Kilograms,
    contents: String,
}

/// Represents a row in the debug orders CSV file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct OrderRow {
    order_index: usize,
    mineral: MineralID,
    kilograms: Kilograms,
}

/// An object for writing simulation results to file
pub struct DataWriter {
    crop_containers_writer: csv::Writer<File>,
    facility_writer: csv::Writer<File>,
    orders_writer: Option<csv::Writer<File>>,
}

impl DataWriter {
    /// Open CSV files to write output data to
    ///
    /// # Arguments
    ///
    /// * `output_path` - Folder where files will be saved
    /// * `save_debug_info` - Whether to write every mineral order to file as well
    pub fn create(output_path: &Path, save_debug_info: bool) -> Result<Self> {
        let new_writer = |file_name| {
            let file_path = output_path.join(file_name);
            csv::Writer::from_path(file_path)
        };

        let orders_writer = if save_debug_info {
            Some(new_writer(ORDERS_FILE_NAME)?)
        } else {
            None
        };

        Ok(Self {
            crop_containers_writer: new_writer(CROP_CONTAINERS_FILE_NAME)?,
            facility_writer: new_writer(FACILITY_FILE_NAME)?,
            orders_writer,
        })
    }

    /// Write the contents of crop containers to a CSV file
    pub fn write_crop_containers(&mut self, containers: &[CropContainer]) -> Result<()> {
        for container in containers {
            // Bushels of the same type are stored together, so group consecutive runs
            let chunks = container.bushels.iter().chunk_by(|b| b.crop_type.clone());
            for (crop_type, group) in &chunks {
                let row = CropContainerRow {
                    container_id: container.id(),
                    crop_type,
                    bushels: group.count(),
                };
                self.crop_containers_writer.serialize(row)?;
            }
        }

        Ok(())
    }

    /// Write the containers stored in the facility to a CSV file
    pub fn write_facility(&mut self, facility: &FacilityRecord) -> Result<()> {
        for entry in facility.iter() {
            let row = FacilityRow {
                container_id: entry.container.id(),
                orders: entry.container.len(),
                nominal_kilograms: entry.container.nominal_weight(),
                actual_kilograms: entry.container.actual_weight(),
                contents: entry.contents.iter().join(";"),
            };
            self.facility_writer.serialize(row)?;
        }

        Ok(())
    }

    /// Write every mineral order to a CSV file, if debug info is enabled
    pub fn write_debug_orders(&mut self, orders: &[Order]) -> Result<()> {
        let Some(wtr) = &mut self.orders_writer else {
            return Ok(());
        };

        for (order_index, order) in orders.iter().enumerate() {
            let row = OrderRow {
                order_index,
                mineral: order.mineral.clone(),
                kilograms: order.amount,
            };
            wtr.serialize(row)?;
        }

        Ok(())
    }

    /// Flush the underlying streams
    pub fn flush(&mut self) -> Result<()> {
        self.crop_containers_writer.flush()?;
        self.facility_writer.flush()?;
        if let Some(wtr) = &mut self.orders_writer {
            wtr.flush()?;
        }

        Ok(())
    }
}
