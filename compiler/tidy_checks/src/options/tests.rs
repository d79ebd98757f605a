#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

const CHECK: &str = "performance-unnecessary-value-param";

#[test]
fn get_or_falls_back() {
    let mut options = CheckOptions::new();
    assert_eq!(options.get(CHECK, "IncludeStyle"), None);
    assert_eq!(options.get_or(CHECK, "IncludeStyle", "llvm"), "llvm");

    options.store(CHECK, "IncludeStyle", "google");
    assert_eq!(options.get(CHECK, "IncludeStyle"), Some("google"));
    assert_eq!(options.get_or(CHECK, "IncludeStyle", "llvm"), "google");
    assert_eq!(options.len(), 1);
}

#[test]
fn options_are_scoped_by_check() {
    let mut options = CheckOptions::new();
    options.store(CHECK, "IncludeStyle", "google");
    assert_eq!(
        options.get("readability-delete-null-pointer", "IncludeStyle"),
        None
    );
}

#[test]
fn parse_key_value_lines() {
    let text = "\
# project defaults
performance-unnecessary-value-param.IncludeStyle: google

readability-delete-null-pointer.Unused:  x
";
    let options = CheckOptions::parse(text).unwrap();
    let pairs: Vec<(&str, &str)> = options.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("performance-unnecessary-value-param.IncludeStyle", "google"),
            ("readability-delete-null-pointer.Unused", "x"),
        ]
    );
}

#[test]
fn parse_rejects_lines_without_colon() {
    let err = CheckOptions::parse("IncludeStyle google").unwrap_err();
    assert_eq!(
        err,
        OptionError::Malformed {
            line: 1,
            text: "IncludeStyle google".to_owned()
        }
    );
    assert!(CheckOptions::parse(": google").is_err());
}

#[test]
fn option_error_messages() {
    assert_eq!(
        OptionError::UnknownCheck("misc-foo".to_owned()).to_string(),
        "unknown check `misc-foo`"
    );
    assert_eq!(
        OptionError::InvalidValue {
            option: "IncludeStyle".to_owned(),
            value: "gnu".to_owned()
        }
        .to_string(),
        "invalid value `gnu` for option `IncludeStyle`"
    );
}
