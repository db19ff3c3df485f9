use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    pub id: String,
    pub name: String,
    pub instruments: Vec<String>,
    #[serde(default)]
    pub needs_monitor: bool,
    #[serde(default)]
    pub needs_di: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub performers: Vec<Performer>,
}

impl Roster {
    pub fn new(performers: Vec<Performer>) -> Self {
        Self { performers }
    }

    pub fn band_size(&self) -> usize {
        self.performers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.performers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputChannel {
    pub instrument: String,
    pub mic: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagePlotElement {
    pub id: String,
    #[serde(rename = "type")]
    pub element_type: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl StagePlotElement {
    pub fn new(id: String, element_type: &str, x: f64, y: f64) -> Self {
        Self {
            id,
            element_type: element_type.to_string(),
            x,
            y,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RiderType {
    Technical,
    Hospitality,
}

impl RiderType {
    pub fn title(&self) -> &'static str {
        match self {
            RiderType::Technical => "Technical",
            RiderType::Hospitality => "Hospitality",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiderOptions {
    #[serde(default)]
    pub include_backline: bool,
    #[serde(default)]
    pub include_lighting: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RiderSection {
    #[serde(rename_all = "camelCase")]
    InputList { channels: Vec<InputChannel> },
    #[serde(rename_all = "camelCase")]
    Backline {
        venue_provides: Vec<String>,
        artist_brings: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Monitoring {
        monitor_count: usize,
        requirements: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Power {
        outlet_count: usize,
        description: String,
    },
    Lighting { description: String },
    #[serde(rename_all = "camelCase")]
    FoodDrink {
        water_bottles: usize,
        soft_drinks: usize,
        notes: String,
    },
    DressingRoom { seating: usize, notes: String },
    GuestList { count: usize, notes: String },
    Transportation { notes: String },
}

impl RiderSection {
    pub fn kind(&self) -> &'static str {
        match self {
            RiderSection::InputList { .. } => "input-list",
            RiderSection::Backline { .. } => "backline",
            RiderSection::Monitoring { .. } => "monitoring",
            RiderSection::Power { .. } => "power",
            RiderSection::Lighting { .. } => "lighting",
            RiderSection::FoodDrink { .. } => "food-drink",
            RiderSection::DressingRoom { .. } => "dressing-room",
            RiderSection::GuestList { .. } => "guest-list",
            RiderSection::Transportation { .. } => "transportation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagePlotData {
    pub elements: Vec<StagePlotElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiderDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub rider_type: RiderType,
    pub sections: Vec<RiderSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_plot_data: Option<StagePlotData>,
}
