//! Code for writing metadata to file
use anyhow::Result;
use chrono::prelude::*;
use platform_info::{PlatformInfo, PlatformInfoAPI, UNameAPI};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// The output file name for metadata
const METADATA_FILE_NAME: &str = "metadata.toml";

#[derive(Serialize)]
struct Metadata<'a> {
    run: RunMetadata<'a>,
    program: ProgramMetadata<'a>,
    platform: PlatformMetadata,
}

/// Information about the scenario run
#[derive(Serialize)]
struct RunMetadata<'a> {
    /// Path to the scenario which was run
    scenario_path: &'a Path,
    /// The date and time on which the run started
    datetime: String,
}

impl<'a> RunMetadata<'a> {
    fn new(scenario_path: &'a Path) -> Self {
        let dt = Local::now();
        Self {
            scenario_path,
            datetime: dt.to_rfc2822(),
        }
    }
}

#[derive(Serialize)]
struct ProgramMetadata<'a> {
    /// The program name
    name: &'a str,
    /// The program version as specified in Cargo.toml
    version: &'a str,
    /// Whether it is a debug build
    is_debug: bool,
}

impl Default for ProgramMetadata<'_> {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            is_debug: cfg!(debug_assertions),
        }
    }
}

/// Information about the platform on which the program is running.
///
/// The fields correspond to different data available from the [`PlatformInfo`] struct.
#[derive(Serialize)]
struct PlatformMetadata {
    sysname: String,
    nodename: String,
    release: String,
    version: String,
    machine: String,
    osname: String,
}

impl PlatformMetadata {
    fn new() -> Result<Self> {
        let info = PlatformInfo::new()
            .map_err(|err| anyhow::anyhow!("Unable to determine platform info: {err}"))?;
        Ok(Self {
            sysname: info.sysname().to_string_lossy().into(),
            nodename: info.nodename().to_string_lossy().into(),
            release: info.release().to_string_lossy().into(),
            version: info.version().to_string_lossy().into(),
            machine: info.machine().to_string_lossy().into(),
            osname: info.osname().to_string_lossy().into(),
        })
    }
}

/// Write metadata to the specified output path in TOML format
pub fn write_metadata(output_path: &Path, scenario_path: &Path) -> Result<()> {
    let metadata = Metadata {
        run: RunMetadata::new(scenario_path),
        program: ProgramMetadata::default(),
        platform: PlatformMetadata::new()?,
    };
    let file_path = output_path.join(METADATA_FILE_NAME);
    fs::write(&file_path, toml::to_string(&metadata)?)?;

    Ok(())
}
