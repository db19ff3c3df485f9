use crate::domain::model::{RiderSection, Roster};

pub const POWER_DESCRIPTION: &str =
    "Grounded power outlets distributed across the stage, reachable from each performer position";

pub const LIGHTING_DESCRIPTION: &str =
    "General stage wash with front fill and at least one operator-run scene change during the set";

/// Monitoring is always emitted, even with zero monitor mixes; a count of
/// zero tells the venue something too.
pub fn monitoring_section(roster: &Roster) -> RiderSection {
    let requirements: Vec<String> = roster
        .performers
        .iter()
        .filter(|p| p.needs_monitor)
        .map(|p| format!("{}: {} in mix", p.name, p.instruments.join(", ")))
        .collect();

    RiderSection::Monitoring {
        monitor_count: requirements.len(),
        requirements,
    }
}

pub fn power_outlet_count(band_size: usize) -> usize {
    std::cmp::max(2, band_size.div_ceil(2))
}

pub fn power_section(band_size: usize) -> RiderSection {
    RiderSection::Power {
        outlet_count: power_outlet_count(band_size),
        description: POWER_DESCRIPTION.to_string(),
    }
}

pub fn lighting_section() -> RiderSection {
    RiderSection::Lighting {
        description: LIGHTING_DESCRIPTION.to_string(),
    }
}
