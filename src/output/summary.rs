//! Rendering a human-readable summary of a simulation run.
use crate::container::{Container, CropContainer};
use crate::facility::FacilityRecord;
use itertools::Itertools;
use std::fmt::Write;

/// Render a summary of the packed crop containers and the mineral storage facility.
///
/// For the facility, this lists the number of containers used and the distinct minerals held by
/// each, along with any orders which could not be stored.
pub fn render_summary(crop_containers: &[CropContainer], facility: &FacilityRecord) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "The crop stack used {} storage containers",
        crop_containers.len()
    )
    .unwrap();
    for container in crop_containers {
        let counts = container
            .bushels
            .iter()
            .chunk_by(|b| b.crop_type.clone())
            .into_iter()
            .map(|(crop_type, group)| format!("{crop_type} x{}", group.count()))
            .join(", ");
        writeln!(out, "Container #{} ({} bushels): {counts}", container.id(), container.len())
            .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(
        out,
        "The heap skope used {} storage containers",
        facility.len()
    )
    .unwrap();
    for entry in facility.iter() {
        writeln!(
            out,
            "Container #{} Contents: {}",
            entry.container.id(),
            entry.contents.iter().join(",")
        )
        .unwrap();
    }

    if facility.dropped_orders() > 0 {
        writeln!(
            out,
            "{} orders ({}) could not be stored",
            facility.dropped_orders(),
            facility.dropped_kilograms()
        )
        .unwrap();
    }

    out
}
