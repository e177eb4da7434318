use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn given_known_names_when_parse_then_matching_level() {
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
    assert_eq!(LogLevel::from_str("Error").unwrap().0, LevelFilter::Error);
    assert_eq!(LogLevel::from_str("TRACE").unwrap().0, LevelFilter::Trace);
}

#[test]
fn given_unknown_name_when_parse_then_info() {
    assert_eq!(LogLevel::parse_lenient("verbose").0, LevelFilter::Info);
}
