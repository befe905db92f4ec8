//! Common functionality for the Lexscopistan storage simulation.
//!
//! Raw agricultural yield is converted into bushels and packed into crop containers, while a
//! finite mineral stockpile is drawn down in fixed-size orders and packed into mineral containers.
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod cli;
pub mod container;
pub mod crop;
pub mod facility;
pub mod id;
pub mod input;
pub mod log;
pub mod mineral;
pub mod output;
pub mod scenario;
pub mod settings;
pub mod simulation;
pub mod units;

#[cfg(test)]
mod fixture;

/// Get the directory in which per-user program configuration is stored.
///
/// Falls back to the current directory if the platform has no notion of a config directory.
pub fn get_lexscopistan_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_default();
    path.push("lexscopistan");
    path
}
