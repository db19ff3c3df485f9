use crate::domain::model::RiderSection;

pub const FOOD_DRINK_NOTES: &str =
    "Hot meal or buffet for the full touring party; vegetarian options required";

pub const DRESSING_ROOM_NOTES: &str =
    "Private lockable room with mirrors, adequate lighting, and power outlets";

pub const GUEST_LIST_NOTES: &str = "Names submitted to the box office by day of show";

pub const TRANSPORTATION_NOTES: &str =
    "Load-in access and parking for one van and trailer adjacent to the venue";

/// The four hospitality sections in fixed order, with counts scaled linearly
/// by band size.
pub fn hospitality_sections(band_size: usize) -> Vec<RiderSection> {
    vec![
        RiderSection::FoodDrink {
            water_bottles: 3 * band_size,
            soft_drinks: 2 * band_size,
            notes: FOOD_DRINK_NOTES.to_string(),
        },
        RiderSection::DressingRoom {
            seating: band_size + 2,
            notes: DRESSING_ROOM_NOTES.to_string(),
        },
        RiderSection::GuestList {
            count: band_size + 2,
            notes: GUEST_LIST_NOTES.to_string(),
        },
        RiderSection::Transportation {
            notes: TRANSPORTATION_NOTES.to_string(),
        },
    ]
}
