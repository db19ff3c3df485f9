//! Mic/DI recommendation as an ordered rule table.
//!
//! Evaluated top to bottom, first match wins; a rule matches when every one
//! of its keywords appears (case-insensitively) in the instrument label. The
//! acoustic-guitar row must stay above the bare "guitar" row, otherwise
//! acoustic guitars get an amp mic instead of a DI.

struct MicRule {
    keywords: &'static [&'static str],
    mic: &'static str,
}

const MIC_RULES: &[MicRule] = &[
    MicRule {
        keywords: &["vocal"],
        mic: "Shure SM58 or equivalent",
    },
    MicRule {
        keywords: &["guitar", "acoustic"],
        mic: "DI Box",
    },
    MicRule {
        keywords: &["guitar"],
        mic: "SM57 on amp",
    },
    MicRule {
        keywords: &["bass"],
        mic: "DI + Beta 52 on amp",
    },
    MicRule {
        keywords: &["keyboard"],
        mic: "DI Box (stereo)",
    },
    MicRule {
        keywords: &["piano"],
        mic: "DI Box (stereo)",
    },
    MicRule {
        keywords: &["synth"],
        mic: "DI Box (stereo)",
    },
    MicRule {
        keywords: &["sax"],
        mic: "SM57 or condenser",
    },
    MicRule {
        keywords: &["trumpet"],
        mic: "SM57 or condenser",
    },
    MicRule {
        keywords: &["horn"],
        mic: "SM57 or condenser",
    },
];

pub const DEFAULT_MIC: &str = "SM57 or equivalent";

/// Total over any label; unmatched labels get [`DEFAULT_MIC`].
pub fn recommend_mic(label: &str) -> &'static str {
    let lower = label.to_lowercase();
    MIC_RULES
        .iter()
        .find(|rule| rule.keywords.iter().all(|kw| lower.contains(kw)))
        .map(|rule| rule.mic)
        .unwrap_or(DEFAULT_MIC)
}
