use pretty_assertions::assert_eq;

use super::*;

#[test]
fn parse_and_display_round_trip() {
    for style in [IncludeStyle::Llvm, IncludeStyle::Google] {
        assert_eq!(style.to_string().parse::<IncludeStyle>(), Ok(style));
    }
    assert_eq!(IncludeStyle::default(), IncludeStyle::Llvm);
}

#[test]
fn unknown_style_is_an_invalid_value() {
    assert_eq!(
        "mozilla".parse::<IncludeStyle>(),
        Err(OptionError::InvalidValue {
            option: "IncludeStyle".to_owned(),
            value: "mozilla".to_owned(),
        })
    );
}

#[test]
fn llvm_merges_system_blocks() {
    let llvm = IncludeStyle::Llvm;
    assert_eq!(llvm.block_of(IncludeKind::MainHeader), 0);
    assert_eq!(llvm.block_of(IncludeKind::NonSystem), 1);
    assert_eq!(llvm.block_of(IncludeKind::CSystem), 2);
    assert_eq!(llvm.block_of(IncludeKind::CxxSystem), 2);
}

#[test]
fn google_separates_c_and_cxx_system() {
    let google = IncludeStyle::Google;
    assert_eq!(google.block_of(IncludeKind::MainHeader), 0);
    assert_eq!(google.block_of(IncludeKind::CSystem), 1);
    assert_eq!(google.block_of(IncludeKind::CxxSystem), 2);
    assert_eq!(google.block_of(IncludeKind::NonSystem), 3);
}

#[test]
fn llvm_orders_case_insensitively() {
    assert!(IncludeStyle::Llvm.sorts_before("apple.h", "Banana.h"));
    assert!(!IncludeStyle::Google.sorts_before("apple.h", "Banana.h"));
    assert!(!IncludeStyle::Llvm.sorts_before("map", "map"));
}
