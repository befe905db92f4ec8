//! Crops are processed into bushels, which are then packed into crop containers.
use crate::container::{
    CROP_CONTAINER_CAPACITY, CROP_CONTAINER_LIMIT, Container, ContainerSupply, CropContainer,
};
use crate::id::define_id_type;
use anyhow::{Result, bail, ensure};
use log::debug;
use serde::Deserialize;

define_id_type! {CropType}

/// Food processors produce one bushel for this many plants
pub const PLANTS_PER_BUSHEL: u32 = 22;

/// A raw crop harvested from the field
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CropRecord {
    /// The type of crop (e.g. "Corn")
    #[serde(rename = "type")]
    pub crop_type: CropType,
    /// The number of plants harvested
    pub plants: u32,
}

/// A crop which has been converted into bushels
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedCrop {
    /// The type of crop
    pub crop_type: CropType,
    /// The number of whole bushels produced
    pub bushels: u32,
}

/// A single bushel to be stored in a container
#[derive(Debug, Clone, PartialEq)]
pub struct BushelUnit {
    /// The type of crop in the bushel
    pub crop_type: CropType,
}

/// Convert raw crops into bushels.
///
/// Partial bushels are discarded. The output has one entry per input crop, in the same order.
pub fn process_yield(crops: &[CropRecord]) -> Vec<ProcessedCrop> {
    crops
        .iter()
        .map(|crop| ProcessedCrop {
            crop_type: crop.crop_type.clone(),
            bushels: crop.plants / PLANTS_PER_BUSHEL,
        })
        .collect()
}

/// The total number of bushels across all processed crops
pub fn total_bushels(processed: &[ProcessedCrop]) -> u64 {
    processed.iter().map(|crop| u64::from(crop.bushels)).sum()
}

/// Check that the crop containers can hold all the bushels before packing begins
pub fn check_crop_capacity(processed: &[ProcessedCrop]) -> Result<()> {
    let demand = total_bushels(processed);
    let capacity = u64::from(CROP_CONTAINER_LIMIT) * CROP_CONTAINER_CAPACITY as u64;
    ensure!(
        demand <= capacity,
        "Crops yield {demand} bushels, but only {capacity} can be stored \
        ({CROP_CONTAINER_LIMIT} containers of {CROP_CONTAINER_CAPACITY})"
    );

    Ok(())
}

/// Pack bushels into containers taken from `supply`.
///
/// Bushels are stored one at a time in the order the crops appear. Each container is sealed as
/// soon as it is full and the next one is taken from the supply. A trailing, partially filled
/// container is included at the end; empty containers never are.
///
/// # Returns
///
/// The sealed containers in the order they were filled, or an error if the supply runs out while
/// there are still bushels to store.
pub fn pack_bushels(
    processed: &[ProcessedCrop],
    mut supply: ContainerSupply<CropContainer>,
) -> Result<Vec<CropContainer>> {
    let mut containers = Vec::new();
    let mut current = supply.next();

    for crop in processed {
        for _ in 0..crop.bushels {
            let Some(container) = current.as_mut() else {
                bail!(
                    "Capacity exceeded: no crop container left for {} bushel \
                    (all {} containers are full)",
                    crop.crop_type,
                    supply.maximum()
                );
            };

            container.bushels.push(BushelUnit {
                crop_type: crop.crop_type.clone(),
            });

            if container.is_full() {
                debug!("Sealed crop container {}", container.id());
                containers.extend(current.take());
                current = supply.next();
            }
        }
    }

    if let Some(container) = current.filter(|c| !c.is_empty()) {
        debug!(
            "Sealed partially filled crop container {} ({} bushels)",
            container.id(),
            container.len()
        );
        containers.push(container);
    }

    Ok(containers)
}
