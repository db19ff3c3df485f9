use crate::domain::model::Roster;
use std::collections::HashSet;

/// Instrument keywords to venue-provided gear, first match wins per
/// instrument. "bass" sits above "guitar" so a bass guitar never implies a
/// guitar amp.
struct BacklineRule {
    keywords: &'static [&'static str],
    provides: &'static str,
}

const BACKLINE_RULES: &[BacklineRule] = &[
    BacklineRule {
        keywords: &["drum"],
        provides: "Full drum kit with hardware",
    },
    BacklineRule {
        keywords: &["bass"],
        provides: "Bass amp (Ampeg or equivalent, 300W+)",
    },
    BacklineRule {
        keywords: &["guitar", "electric"],
        provides: "Guitar amp (Marshall or Fender equivalent)",
    },
    BacklineRule {
        keywords: &["keyboard"],
        provides: "Keyboard stands and power",
    },
    BacklineRule {
        keywords: &["piano"],
        provides: "Keyboard stands and power",
    },
];

pub const ARTIST_BRINGS: [&str; 2] = [
    "All instruments, cables, and personal equipment",
    "Pedals and effects",
];

#[derive(Debug, Clone, PartialEq)]
pub struct BacklineRequirements {
    pub venue_provides: Vec<String>,
    pub artist_brings: Vec<String>,
}

/// Maps each (performer, instrument) pair to implied venue gear and
/// deduplicates. `venue_provides` keeps first-trigger order so regeneration
/// is byte-stable; unmatched instruments contribute nothing.
pub fn aggregate_backline(roster: &Roster) -> BacklineRequirements {
    let mut seen = HashSet::new();
    let mut venue_provides = Vec::new();

    for performer in &roster.performers {
        for instrument in &performer.instruments {
            let lower = instrument.to_lowercase();
            let matched = BACKLINE_RULES
                .iter()
                .find(|rule| rule.keywords.iter().all(|kw| lower.contains(kw)));
            if let Some(rule) = matched {
                if seen.insert(rule.provides) {
                    venue_provides.push(rule.provides.to_string());
                }
            }
        }
    }

    tracing::debug!("Backline: venue provides {} items", venue_provides.len());

    BacklineRequirements {
        venue_provides,
        artist_brings: ARTIST_BRINGS.iter().map(|s| s.to_string()).collect(),
    }
}
