use std::collections::HashSet;

use super::*;

#[test]
fn exactly_fifty_distinct_codes() {
    let codes: HashSet<&str> = UsState::ALL.iter().map(|s| s.code()).collect();
    assert_eq!(codes.len(), 50);
    assert!(codes.iter().all(|c| c.len() == 2 && c.chars().all(|ch| ch.is_ascii_uppercase())));
}

#[test]
fn parses_known_codes() {
    assert_eq!("CA".parse::<UsState>(), Ok(UsState::California));
    assert_eq!("FL".parse::<UsState>(), Ok(UsState::Florida));
    assert_eq!("WY".parse::<UsState>(), Ok(UsState::Wyoming));
}

#[test]
fn rejects_unknown_codes_and_names() {
    assert!("ZZ".parse::<UsState>().is_err());
    assert!("".parse::<UsState>().is_err());
    assert!("California".parse::<UsState>().is_err());
    assert!("ca".parse::<UsState>().is_err());
    // Territories and DC are not on the list.
    assert!("DC".parse::<UsState>().is_err());
    assert!("PR".parse::<UsState>().is_err());
}

#[test]
fn names_are_human_readable() {
    assert_eq!(UsState::NewHampshire.name(), "New Hampshire");
    assert_eq!(UsState::NewHampshire.to_string(), "NH");
}

#[test]
fn serde_round_trips_through_code() {
    let json = serde_json::to_string(&UsState::Texas).unwrap();
    assert_eq!(json, "\"TX\"");
    let back: UsState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, UsState::Texas);
    assert!(serde_json::from_str::<UsState>("\"Texas\"").is_err());
}
