use crate::config::geometry::StageGeometry;
use crate::core::backline::aggregate_backline;
use crate::core::hospitality::hospitality_sections;
use crate::core::input_list::expand_input_list;
use crate::core::requirements::{lighting_section, monitoring_section, power_section};
use crate::core::stage_layout::layout_stage;
use crate::domain::model::{
    RiderDocument, RiderOptions, RiderSection, RiderType, Roster, StagePlotData,
};
use crate::utils::error::{Result, RiderError};

/// Orchestrates the section generators into one document. Holds only the
/// stage-geometry policy table; generation itself is stateless and pure.
pub struct RiderGenerator {
    geometry: StageGeometry,
}

impl Default for RiderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RiderGenerator {
    pub fn new() -> Self {
        Self {
            geometry: StageGeometry::default(),
        }
    }

    pub fn with_geometry(geometry: StageGeometry) -> Self {
        Self { geometry }
    }

    /// Derives a complete rider from a roster snapshot. The only rejected
    /// input is an empty roster; anything else degrades gracefully.
    pub fn generate(
        &self,
        roster: &Roster,
        rider_type: RiderType,
        options: RiderOptions,
    ) -> Result<RiderDocument> {
        if roster.is_empty() {
            return Err(RiderError::EmptyRoster);
        }

        let band_size = roster.band_size();
        tracing::debug!(
            "Generating {} rider for {} performers",
            rider_type.title(),
            band_size
        );

        let (sections, stage_plot_data) = match rider_type {
            RiderType::Technical => {
                let mut sections = vec![RiderSection::InputList {
                    channels: expand_input_list(roster),
                }];

                if options.include_backline {
                    let backline = aggregate_backline(roster);
                    sections.push(RiderSection::Backline {
                        venue_provides: backline.venue_provides,
                        artist_brings: backline.artist_brings,
                    });
                }

                sections.push(monitoring_section(roster));
                sections.push(power_section(band_size));

                if options.include_lighting {
                    sections.push(lighting_section());
                }

                let elements = layout_stage(roster, &self.geometry)
                    .into_iter()
                    .flat_map(|placement| placement.elements)
                    .collect();

                (sections, Some(StagePlotData { elements }))
            }
            RiderType::Hospitality => (hospitality_sections(band_size), None),
        };

        let document = RiderDocument {
            name: format!("{} Rider - {} Members", rider_type.title(), band_size),
            rider_type,
            sections,
            stage_plot_data,
        };

        tracing::info!(
            "Generated '{}' with {} sections",
            document.name,
            document.sections.len()
        );

        Ok(document)
    }
}

/// Convenience wrapper using the built-in stage geometry.
pub fn generate_rider(
    roster: &Roster,
    rider_type: RiderType,
    options: RiderOptions,
) -> Result<RiderDocument> {
    RiderGenerator::new().generate(roster, rider_type, options)
}
