// Domain layer: value models only. Generation logic lives in core.

pub mod model;

pub use model::{
    InputChannel, Performer, RiderDocument, RiderOptions, RiderSection, RiderType, Roster,
    StagePlotData, StagePlotElement,
};
