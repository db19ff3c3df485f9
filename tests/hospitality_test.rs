use riderforge::{generate_rider, Performer, RiderOptions, RiderSection, RiderType, Roster};

fn band_of(size: usize) -> Roster {
    Roster::new(
        (0..size)
            .map(|i| Performer {
                id: format!("p{}", i),
                name: format!("Member {}", i),
                instruments: vec!["Vocals".to_string()],
                needs_monitor: false,
                needs_di: false,
            })
            .collect(),
    )
}

fn hospitality_sections(size: usize) -> Vec<RiderSection> {
    generate_rider(&band_of(size), RiderType::Hospitality, RiderOptions::default())
        .unwrap()
        .sections
}

#[test]
fn test_counts_scale_with_a_four_piece() {
    let sections = hospitality_sections(4);

    match &sections[0] {
        RiderSection::FoodDrink {
            water_bottles,
            soft_drinks,
            ..
        } => {
            assert_eq!(*water_bottles, 12);
            assert_eq!(*soft_drinks, 8);
        }
        other => panic!("unexpected section: {:?}", other),
    }
    match &sections[1] {
        RiderSection::DressingRoom { seating, .. } => assert_eq!(*seating, 6),
        other => panic!("unexpected section: {:?}", other),
    }
    match &sections[2] {
        RiderSection::GuestList { count, .. } => assert_eq!(*count, 6),
        other => panic!("unexpected section: {:?}", other),
    }
}

#[test]
fn test_counts_scale_with_a_solo_act() {
    let sections = hospitality_sections(1);

    match &sections[0] {
        RiderSection::FoodDrink {
            water_bottles,
            soft_drinks,
            ..
        } => {
            assert_eq!(*water_bottles, 3);
            assert_eq!(*soft_drinks, 2);
        }
        other => panic!("unexpected section: {:?}", other),
    }
    match &sections[1] {
        RiderSection::DressingRoom { seating, .. } => assert_eq!(*seating, 3),
        other => panic!("unexpected section: {:?}", other),
    }
}

#[test]
fn test_boilerplate_does_not_vary_with_band_size() {
    let small = hospitality_sections(2);
    let large = hospitality_sections(9);

    let notes = |sections: &[RiderSection]| -> Vec<String> {
        sections
            .iter()
            .map(|s| match s {
                RiderSection::FoodDrink { notes, .. }
                | RiderSection::DressingRoom { notes, .. }
                | RiderSection::GuestList { notes, .. }
                | RiderSection::Transportation { notes } => notes.clone(),
                other => panic!("unexpected section: {:?}", other),
            })
            .collect()
    };

    assert_eq!(notes(&small), notes(&large));
}

#[test]
fn test_options_are_ignored_for_hospitality_riders() {
    let options = RiderOptions {
        include_backline: true,
        include_lighting: true,
    };
    let document = generate_rider(&band_of(3), RiderType::Hospitality, options).unwrap();

    let kinds: Vec<&str> = document.sections.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec!["food-drink", "dressing-room", "guest-list", "transportation"]
    );
}

#[test]
fn test_power_outlets_scale_with_band_size() {
    for (size, outlets) in [(1, 2), (3, 2), (4, 2), (5, 3), (7, 4)] {
        let document =
            generate_rider(&band_of(size), RiderType::Technical, RiderOptions::default())
                .unwrap();
        let power = document
            .sections
            .iter()
            .find(|s| s.kind() == "power")
            .unwrap();
        match power {
            RiderSection::Power { outlet_count, .. } => assert_eq!(
                *outlet_count, outlets,
                "band of {} should need {} outlets",
                size, outlets
            ),
            other => panic!("unexpected section: {:?}", other),
        }
    }
}
