#[cfg(feature = "cli")]
pub mod cli;
pub mod geometry;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use geometry::{RolePlacement, StageGeometry};
