use riderforge::core::aggregate_backline;
use riderforge::{Performer, Roster};

fn performer(id: &str, name: &str, instruments: &[&str]) -> Performer {
    Performer {
        id: id.to_string(),
        name: name.to_string(),
        instruments: instruments.iter().map(|s| s.to_string()).collect(),
        needs_monitor: false,
        needs_di: false,
    }
}

#[test]
fn test_two_electric_guitarists_yield_one_amp_line() {
    let roster = Roster::new(vec![
        performer("p1", "Alice", &["Electric Guitar"]),
        performer("p2", "Bob", &["Electric Guitar"]),
    ]);

    let backline = aggregate_backline(&roster);

    assert_eq!(
        backline.venue_provides,
        vec!["Guitar amp (Marshall or Fender equivalent)"]
    );
}

#[test]
fn test_venue_list_keeps_first_trigger_order() {
    let roster = Roster::new(vec![
        performer("p1", "Bob", &["Drums"]),
        performer("p2", "Alice", &["Bass Guitar"]),
        performer("p3", "Cleo", &["Electric Guitar", "Grand Piano"]),
    ]);

    let backline = aggregate_backline(&roster);

    assert_eq!(
        backline.venue_provides,
        vec![
            "Full drum kit with hardware",
            "Bass amp (Ampeg or equivalent, 300W+)",
            "Guitar amp (Marshall or Fender equivalent)",
            "Keyboard stands and power",
        ]
    );
}

#[test]
fn test_acoustic_guitar_implies_no_amp() {
    let roster = Roster::new(vec![performer("p1", "Alice", &["Acoustic Guitar"])]);

    let backline = aggregate_backline(&roster);

    assert!(backline.venue_provides.is_empty());
}

#[test]
fn test_unmatched_instruments_contribute_nothing() {
    let roster = Roster::new(vec![performer("p1", "Alice", &["Theremin", "Flute"])]);

    let backline = aggregate_backline(&roster);

    assert!(backline.venue_provides.is_empty());
}

#[test]
fn test_artist_brings_is_fixed() {
    let empty_handed = Roster::new(vec![performer("p1", "Alice", &["Flute"])]);
    let full_band = Roster::new(vec![
        performer("p1", "Bob", &["Drums"]),
        performer("p2", "Alice", &["Keyboard"]),
    ]);

    let expected = vec![
        "All instruments, cables, and personal equipment".to_string(),
        "Pedals and effects".to_string(),
    ];
    assert_eq!(aggregate_backline(&empty_handed).artist_brings, expected);
    assert_eq!(aggregate_backline(&full_band).artist_brings, expected);
}

#[test]
fn test_keyboard_and_piano_share_one_line() {
    let roster = Roster::new(vec![performer("p1", "Alice", &["Keyboard", "Grand Piano"])]);

    let backline = aggregate_backline(&roster);

    assert_eq!(backline.venue_provides, vec!["Keyboard stands and power"]);
}
