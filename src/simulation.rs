//! Functionality for running the storage simulation.
use crate::container::{ContainerSupply, CropContainer};
use crate::crop::{pack_bushels, process_yield, total_bushels};
use crate::facility::{FacilityRecord, pack_orders};
use crate::mineral::allocate_orders;
use crate::output::DataWriter;
use crate::output::metadata::write_metadata;
use crate::scenario::Scenario;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;

/// The results of a simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    /// Crop containers in the order they were filled
    pub crop_containers: Vec<CropContainer>,
    /// The mineral containers stored in the facility
    pub facility: FacilityRecord,
}

/// Run the simulation.
///
/// Crops are processed and packed first, then the mineral stockpile is drawn down and packed.
///
/// # Arguments
///
/// * `scenario` - The scenario to run
/// * `writer` - Where to write results, if anywhere
pub fn run(scenario: Scenario, mut writer: Option<&mut DataWriter>) -> Result<SimulationOutcome> {
    let Scenario {
        crops,
        minerals: mut stock,
    } = scenario;

    // Crop stack
    let processed = process_yield(&crops);
    info!(
        "Processed {} crops into {} bushels",
        processed.len(),
        total_bushels(&processed)
    );
    let crop_containers =
        pack_bushels(&processed, ContainerSupply::crop()).context("Failed to pack bushels.")?;
    info!("Packed bushels into {} crop containers", crop_containers.len());

    // Mineral heap
    let orders = allocate_orders(&mut stock)?;
    info!("Allocated {} mineral orders", orders.len());
    if let Some(writer) = writer.as_deref_mut() {
        writer.write_debug_orders(&orders)?;
    }

    let facility = pack_orders(orders, ContainerSupply::mineral());
    info!("Stored {} mineral containers in the facility", facility.len());
    if facility.dropped_orders() > 0 {
        warn!(
            "Ran out of mineral containers: {} orders ({}) were not stored",
            facility.dropped_orders(),
            facility.dropped_kilograms()
        );
    }

    if let Some(writer) = writer {
        writer.write_crop_containers(&crop_containers)?;
        writer.write_facility(&facility)?;
        writer.flush()?;
    }

    Ok(SimulationOutcome {
        crop_containers,
        facility,
    })
}

/// Run the simulation, writing results to the specified output folder.
///
/// # Arguments
///
/// * `scenario` - The scenario to run
/// * `scenario_path` - Where the scenario was loaded from, for the run metadata
/// * `output_path` - Folder where output files will be saved
/// * `debug_output` - Whether to write additional information to CSV files
pub fn run_to_dir(
    scenario: Scenario,
    scenario_path: &Path,
    output_path: &Path,
    debug_output: bool,
) -> Result<SimulationOutcome> {
    write_metadata(output_path, scenario_path).context("Failed to save metadata.")?;
    let mut writer = DataWriter::create(output_path, debug_output)?;
    run(scenario, Some(&mut writer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;
    use crate::fixture::{assert_error, scenario};
    use rstest::rstest;
    use tempfile::tempdir;

    #[rstest]
    fn test_run(scenario: Scenario) {
        let outcome = run(scenario, None).unwrap();
        assert_eq!(outcome.crop_containers.len(), 3);
        assert_eq!(outcome.facility.len(), 27);
        assert_eq!(outcome.facility.dropped_orders(), 0);
    }

    #[rstest]
    fn test_run_capacity_exceeded(mut scenario: Scenario) {
        scenario.crops[1].plants = 22 * 500;
        assert_error!(run(scenario, None), "Failed to pack bushels.");
    }

    #[rstest]
    fn test_run_to_dir(scenario: Scenario) {
        let dir = tempdir().unwrap();
        let outcome = run_to_dir(scenario, Path::new("scenario"), dir.path(), true).unwrap();
        assert!(outcome.crop_containers.iter().all(|c| !c.is_empty()));

        for file_name in [
            "crop_containers.csv",
            "facility.csv",
            "debug_orders.csv",
            "metadata.toml",
        ] {
            assert!(dir.path().join(file_name).is_file(), "{file_name} missing");
        }
    }
}
