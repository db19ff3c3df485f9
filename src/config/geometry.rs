use crate::core::stage_layout::StageRole;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, validate_nonzero_step, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One placement band: a fixed row, a starting column, and the x increment
/// applied per additional element in the same band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RolePlacement {
    pub y: f64,
    pub start_x: f64,
    pub step_x: f64,
}

/// Stage-geometry policy table, one band per role on a nominal 800x600
/// canvas (y grows toward the audience). The numbers are policy, not
/// contract: the layout engine only guarantees determinism and non-collision
/// for whatever table it is handed. A partial TOML file overrides individual
/// bands and inherits the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageGeometry {
    pub drums: RolePlacement,
    pub bass: RolePlacement,
    pub guitar_left: RolePlacement,
    pub guitar_right: RolePlacement,
    pub keys: RolePlacement,
    pub vocals: RolePlacement,
    pub dj: RolePlacement,
    pub fallback: RolePlacement,
}

impl Default for StageGeometry {
    fn default() -> Self {
        Self {
            drums: RolePlacement {
                y: 110.0,
                start_x: 360.0,
                step_x: 90.0,
            },
            bass: RolePlacement {
                y: 230.0,
                start_x: 520.0,
                step_x: 70.0,
            },
            guitar_left: RolePlacement {
                y: 260.0,
                start_x: 140.0,
                step_x: 70.0,
            },
            guitar_right: RolePlacement {
                y: 280.0,
                start_x: 660.0,
                step_x: -70.0,
            },
            keys: RolePlacement {
                y: 320.0,
                start_x: 640.0,
                step_x: 70.0,
            },
            vocals: RolePlacement {
                y: 430.0,
                start_x: 330.0,
                step_x: 90.0,
            },
            dj: RolePlacement {
                y: 300.0,
                start_x: 400.0,
                step_x: 80.0,
            },
            fallback: RolePlacement {
                y: 520.0,
                start_x: 60.0,
                step_x: 70.0,
            },
        }
    }
}

impl StageGeometry {
    pub fn placement(&self, role: StageRole) -> RolePlacement {
        match role {
            StageRole::Drums => self.drums,
            StageRole::Bass => self.bass,
            StageRole::GuitarLeft => self.guitar_left,
            StageRole::GuitarRight => self.guitar_right,
            StageRole::Keys => self.keys,
            StageRole::Vocals => self.vocals,
            StageRole::Dj => self.dj,
            StageRole::Fallback => self.fallback,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let geometry: StageGeometry = toml::from_str(&content)?;
        geometry.validate()?;
        Ok(geometry)
    }

    fn bands(&self) -> [(&'static str, &RolePlacement); 8] {
        [
            ("drums", &self.drums),
            ("bass", &self.bass),
            ("guitar_left", &self.guitar_left),
            ("guitar_right", &self.guitar_right),
            ("keys", &self.keys),
            ("vocals", &self.vocals),
            ("dj", &self.dj),
            ("fallback", &self.fallback),
        ]
    }
}

impl Validate for StageGeometry {
    fn validate(&self) -> Result<()> {
        for (name, band) in self.bands() {
            validate_finite(&format!("{}.y", name), band.y)?;
            validate_finite(&format!("{}.start_x", name), band.start_x)?;
            validate_nonzero_step(&format!("{}.step_x", name), band.step_x)?;
        }
        Ok(())
    }
}
