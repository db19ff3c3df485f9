pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{RolePlacement, StageGeometry};

pub use crate::core::{generate_rider, RiderGenerator};
pub use crate::domain::model::{
    InputChannel, Performer, RiderDocument, RiderOptions, RiderSection, RiderType, Roster,
    StagePlotData, StagePlotElement,
};
pub use crate::utils::error::{Result, RiderError};
