pub mod backline;
pub mod hospitality;
pub mod input_list;
pub mod mic;
pub mod requirements;
pub mod rider;
pub mod stage_layout;

pub use backline::{aggregate_backline, BacklineRequirements};
pub use input_list::expand_input_list;
pub use mic::recommend_mic;
pub use rider::{generate_rider, RiderGenerator};
pub use stage_layout::{layout_stage, PerformerPlacement, StageRole};
