use crate::core::mic::recommend_mic;
use crate::domain::model::{InputChannel, Roster};

/// Canonical drum kit expansion, emitted in this order for any label
/// containing "drum". The performer's DI flag does not apply to kit channels.
const DRUM_KIT_CHANNELS: &[(&str, &str)] = &[
    ("Kick Drum", "Beta 52 or equivalent"),
    ("Snare", "SM57"),
    ("Hi-Hat", "Condenser"),
    ("Tom 1", "Sennheiser e604"),
    ("Tom 2", "Sennheiser e604"),
    ("Floor Tom", "Sennheiser e604"),
    ("Overhead L", "Condenser"),
    ("Overhead R", "Condenser"),
];

pub const DI_REQUIRED_NOTE: &str = "DI Box required";

/// Expands a roster into console input channels, in roster order then
/// per-performer instrument order.
pub fn expand_input_list(roster: &Roster) -> Vec<InputChannel> {
    let mut channels = Vec::new();

    for performer in &roster.performers {
        for instrument in &performer.instruments {
            if instrument.to_lowercase().contains("drum") {
                channels.extend(DRUM_KIT_CHANNELS.iter().map(|(label, mic)| InputChannel {
                    instrument: (*label).to_string(),
                    mic: (*mic).to_string(),
                    notes: String::new(),
                }));
            } else {
                channels.push(InputChannel {
                    instrument: instrument.clone(),
                    mic: recommend_mic(instrument).to_string(),
                    notes: if performer.needs_di {
                        DI_REQUIRED_NOTE.to_string()
                    } else {
                        String::new()
                    },
                });
            }
        }
    }

    tracing::debug!(
        "Expanded {} performers into {} input channels",
        roster.band_size(),
        channels.len()
    );

    channels
}
