use crate::config::geometry::StageGeometry;
use crate::domain::model::{Roster, StagePlotElement};
use std::collections::{HashMap, HashSet};

/// Placement band an instrument lands in. Guitars alternate between the left
/// and right bands by occurrence across the whole roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageRole {
    Drums,
    Bass,
    GuitarLeft,
    GuitarRight,
    Keys,
    Vocals,
    Dj,
    Fallback,
}

impl StageRole {
    pub fn element_type(self) -> &'static str {
        match self {
            StageRole::Drums => "drum-kit",
            StageRole::Bass => "bass",
            StageRole::GuitarLeft | StageRole::GuitarRight => "guitar",
            StageRole::Keys => "keys",
            StageRole::Vocals => "vocals",
            StageRole::Dj => "dj",
            StageRole::Fallback => "generic",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformerPlacement {
    pub performer_id: String,
    pub elements: Vec<StagePlotElement>,
}

// Keyword order matters: "bass" is checked before "guitar" so a bass guitar
// lands in the bass band, and "drum" before "dj" covers drum machines.
fn classify(label: &str, guitars_seen: &mut usize) -> StageRole {
    let lower = label.to_lowercase();
    if lower.contains("drum") {
        StageRole::Drums
    } else if lower.contains("vocal") {
        StageRole::Vocals
    } else if lower.contains("bass") {
        StageRole::Bass
    } else if lower.contains("guitar") {
        let role = if *guitars_seen % 2 == 0 {
            StageRole::GuitarLeft
        } else {
            StageRole::GuitarRight
        };
        *guitars_seen += 1;
        role
    } else if lower.contains("keyboard") || lower.contains("piano") || lower.contains("synth") {
        StageRole::Keys
    } else if lower.contains("dj") || lower.contains("turntable") {
        StageRole::Dj
    } else {
        StageRole::Fallback
    }
}

/// Assigns deterministic coordinates to every instrument on the roster.
///
/// Each role owns a row (y) and a start column (x); the nth element in a role
/// sits `n` steps from the start. A bump pass resolves any residual overlap
/// by walking further along the row, so no two elements ever share `(x, y)`
/// whatever geometry table is in effect. Pure in the roster and table: the
/// same inputs always produce the same layout.
pub fn layout_stage(roster: &Roster, geometry: &StageGeometry) -> Vec<PerformerPlacement> {
    let mut role_counts: HashMap<StageRole, usize> = HashMap::new();
    let mut occupied: HashSet<(u64, u64)> = HashSet::new();
    let mut guitars_seen = 0usize;
    let mut next_id = 0usize;
    let mut placements = Vec::with_capacity(roster.band_size());

    for performer in &roster.performers {
        let mut elements = Vec::with_capacity(performer.instruments.len());

        for instrument in &performer.instruments {
            let role = classify(instrument, &mut guitars_seen);
            let ordinal = {
                let count = role_counts.entry(role).or_insert(0);
                let ordinal = *count;
                *count += 1;
                ordinal
            };

            let placement = geometry.placement(role);
            let y = placement.y;
            let mut x = placement.start_x + placement.step_x * ordinal as f64;
            while !occupied.insert((x.to_bits(), y.to_bits())) {
                x += placement.step_x;
            }

            elements.push(StagePlotElement::new(
                format!("el-{}", next_id),
                role.element_type(),
                x,
                y,
            ));
            next_id += 1;
        }

        placements.push(PerformerPlacement {
            performer_id: performer.id.clone(),
            elements,
        });
    }

    tracing::debug!("Placed {} stage elements", next_id);

    placements
}
